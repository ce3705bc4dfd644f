// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::application::session::{GallerySession, SearchPhase};
use crate::domain::layout::LayoutView;
use crate::domain::services::drag_coordinator::DragPreview;
use crate::presentation::detail::DetailView;
use crate::presentation::errors::ErrorView;
use crate::presentation::nav::NavView;

/// 结果页主体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "camelCase")]
pub enum PageContent<'a> {
    Idle,
    Loading,
    Error(ErrorView),
    Gallery(LayoutView<'a>),
}

/// 整个结果页的视图模型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub nav: NavView,
    pub content: PageContent<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_preview: Option<DragPreview>,
}

impl<'a> PageView<'a> {
    pub fn from_session(session: &'a GallerySession) -> Self {
        let user = session.current_user();
        let content = match session.phase() {
            SearchPhase::Idle => PageContent::Idle,
            SearchPhase::Loading => PageContent::Loading,
            SearchPhase::Failed(error) => PageContent::Error(error.clone()),
            SearchPhase::Ready => PageContent::Gallery(session.render()),
        };

        Self {
            nav: NavView::new(user.as_ref(), session.layout_mode()),
            content,
            detail: session.detail_view(),
            drag_preview: session.drag_preview(),
        }
    }
}
