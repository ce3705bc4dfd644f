// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 布局策略模块
///
/// 三种可互换的结果布局（网格、瀑布流、封面流）共享同一套卡片样式、
/// 排版比例和交互能力（编辑、删除、拖拽）。
pub mod coverflow;
pub mod grid;
pub mod masonry;

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::models::search_result::SearchResult;
use crate::domain::models::settings::{CardSettings, LayoutMode, Settings};

pub use coverflow::{visual_transform, Carousel, CardTransform, CoverflowLayout};
pub use grid::GridLayout;
pub use masonry::{pack_columns, MasonryLayout, MasonryPlacement};

/// Title size as a multiple of the configured font size.
pub const TITLE_SCALE: f64 = 1.25;
/// Source label and description size as a fraction of the configured font size.
pub const SECONDARY_SCALE: f64 = 0.875;
/// Shown in place of any image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// 卡片排版
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub color: String,
    pub primary_px: f64,
    pub title_px: f64,
    pub secondary_px: f64,
}

impl Typography {
    pub fn from_card(card: &CardSettings) -> Self {
        let primary = card.font.size as f64;
        Self {
            font_family: card.font.family.css(),
            color: card.font.color.clone(),
            primary_px: primary,
            title_px: primary * TITLE_SCALE,
            secondary_px: primary * SECONDARY_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CardSizing {
    /// Every card has the same height.
    Fixed { height: u32 },
    /// Height follows the image aspect, capped at `max_height`.
    Intrinsic { max_height: u32 },
}

/// 所有布局共享的卡片样式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub typography: Typography,
    pub border_width: u32,
    pub border_color: String,
    pub border_radius: u32,
    pub sizing: CardSizing,
}

impl CardStyle {
    pub fn from_settings(card: &CardSettings, sizing: CardSizing) -> Self {
        Self {
            typography: Typography::from_card(card),
            border_width: card.border.width,
            border_color: card.border.color.clone(),
            border_radius: card.border.radius,
            sizing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContainerStyle {
    Grid {
        columns: u32,
        gap: u32,
    },
    Columns {
        count: u32,
        gap: u32,
    },
    #[serde(rename_all = "camelCase")]
    Carousel {
        slide_basis_percent: u32,
        looping: bool,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle<'a> {
    pub padding: u32,
    pub background_image: Option<&'a str>,
}

impl<'a> PageStyle<'a> {
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self {
            padding: settings.page.container_padding,
            background_image: settings.page.background_image.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardActions {
    pub edit: bool,
    pub delete: bool,
    pub drag: bool,
}

impl Default for CardActions {
    fn default() -> Self {
        Self {
            edit: true,
            delete: true,
            drag: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
}

/// 单张卡片的渲染描述
///
/// `index` 是渲染时在 Result Store 中的位置，删除操作以它为参数；
/// `id` 是拖拽和详情选择使用的身份键。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView<'a> {
    pub index: usize,
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub source: &'a str,
    pub favicon: &'a str,
    pub image: &'a str,
    pub link: &'a str,
    pub dragging: bool,
    pub actions: CardActions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<GridSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<CardTransform>,
}

/// 一次渲染的完整描述
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutView<'a> {
    pub mode: LayoutMode,
    pub page: PageStyle<'a>,
    pub container: ContainerStyle,
    pub card_style: CardStyle,
    pub cards: Vec<CardView<'a>>,
}

/// 渲染时的交互状态
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'c> {
    pub dragging_id: Option<&'c str>,
    pub failed_images: &'c HashSet<String>,
}

impl<'c> RenderContext<'c> {
    pub fn new(dragging_id: Option<&'c str>, failed_images: &'c HashSet<String>) -> Self {
        Self {
            dragging_id,
            failed_images,
        }
    }

    /// Image to display for a result, substituting the placeholder after a load failure.
    pub fn image_for<'a>(&self, result: &'a SearchResult) -> &'a str {
        match result.image.as_deref() {
            Some(image) if !self.failed_images.contains(&result.link) => image,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn card<'a>(&self, index: usize, result: &'a SearchResult) -> CardView<'a> {
        CardView {
            index,
            id: &result.link,
            title: &result.title,
            description: &result.description,
            source: &result.source,
            favicon: &result.favicon,
            image: self.image_for(result),
            link: &result.link,
            dragging: self.dragging_id == Some(result.link.as_str()),
            actions: CardActions::default(),
            slot: None,
            transform: None,
        }
    }
}

/// 布局策略
///
/// 每种布局消费同一个结果序列和同一份配置，只持有借用。
pub trait LayoutStrategy {
    fn mode(&self) -> LayoutMode;

    fn render<'a>(
        &self,
        results: &'a [SearchResult],
        settings: &'a Settings,
        ctx: &RenderContext<'_>,
    ) -> LayoutView<'a>;
}
