// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use tracing::debug;

use crate::domain::services::result_store::ResultStore;

/// Pointer travel (px) a press must exceed before it becomes a drag.
pub const ACTIVATION_DISTANCE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Keep the rect inside `bounds`; an oversized rect is pinned to the top-left edge.
    pub fn clamp_within(&self, bounds: Size) -> Self {
        let max_x = (bounds.width - self.width).max(0.0);
        let max_y = (bounds.height - self.height).max(0.0);
        Self {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
            ..*self
        }
    }
}

/// 拖拽状态机
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { active_id: String },
}

/// 放下的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The store was reordered.
    Moved { from: usize, to: usize },
    /// Dropped on itself, or the ids no longer resolve.
    Unchanged,
    /// Released outside any droppable target.
    Cancelled,
    /// No drag was in progress.
    Ignored,
}

/// 拖拽中显示的浮动预览
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPreview {
    pub result_id: String,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
struct Press {
    id: String,
    origin: Point,
    pointer: Point,
    card_rect: Rect,
}

/// 拖拽重排协调器
///
/// 按下后指针移动超过 [`ACTIVATION_DISTANCE`] 才进入 `Dragging`；放下时对
/// [`ResultStore`] 调用 `move_to`。
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    state: DragState,
    press: Option<Press>,
    viewport: Size,
    activation_distance: f64,
}

impl DragCoordinator {
    pub fn new(viewport: Size) -> Self {
        Self {
            state: DragState::Idle,
            press: None,
            viewport,
            activation_distance: ACTIVATION_DISTANCE,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { active_id } => Some(active_id),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// 在卡片的拖拽把手上按下指针
    pub fn pointer_down(&mut self, id: impl Into<String>, at: Point, card_rect: Rect) {
        self.state = DragState::Idle;
        self.press = Some(Press {
            id: id.into(),
            origin: at,
            pointer: at,
            card_rect,
        });
    }

    /// 指针移动；返回这次移动是否开始了拖拽
    pub fn pointer_move(&mut self, to: Point) -> bool {
        let already_dragging = self.is_dragging();
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        press.pointer = to;

        if already_dragging || press.origin.distance_to(to) <= self.activation_distance {
            return false;
        }

        debug!(id = %press.id, "Drag started");
        self.state = DragState::Dragging {
            active_id: press.id.clone(),
        };
        true
    }

    /// 释放指针；`target` 是指针下方可放置卡片的 id
    pub fn drop_on(&mut self, target: Option<&str>, store: &mut ResultStore) -> DropOutcome {
        let state = std::mem::take(&mut self.state);
        self.press = None;

        let DragState::Dragging { active_id } = state else {
            return DropOutcome::Ignored;
        };
        let Some(target) = target else {
            return DropOutcome::Cancelled;
        };

        match store.move_to(&active_id, target) {
            Some((from, to)) => {
                debug!(from, to, "Drag dropped");
                DropOutcome::Moved { from, to }
            }
            None => DropOutcome::Unchanged,
        }
    }

    /// 显式取消（如按下 Esc），不修改存储
    pub fn cancel(&mut self) -> DropOutcome {
        let was_dragging = self.is_dragging();
        self.reset();
        if was_dragging {
            DropOutcome::Cancelled
        } else {
            DropOutcome::Ignored
        }
    }

    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.press = None;
    }

    /// 当前的浮动预览，被限制在视口内
    pub fn preview(&self) -> Option<DragPreview> {
        let active_id = self.active_id()?;
        let press = self.press.as_ref()?;
        let rect = press
            .card_rect
            .translate(press.pointer.x - press.origin.x, press.pointer.y - press.origin.y)
            .clamp_within(self.viewport);
        Some(DragPreview {
            result_id: active_id.to_string(),
            rect,
        })
    }
}
