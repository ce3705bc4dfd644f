// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use validator::{Validate, ValidationErrors};

use crate::application::dto::search_request::SearchRequestDto;
use crate::domain::layout::{
    Carousel, CoverflowLayout, GridLayout, LayoutStrategy, LayoutView, MasonryLayout,
    RenderContext,
};
use crate::domain::models::search_result::SearchResult;
use crate::domain::models::settings::{LayoutMode, Settings, SettingsPatch};
use crate::domain::repositories::storage_repository::StorageError;
use crate::domain::search::engine::SearchError;
use crate::domain::services::auth::{AuthService, AuthUser};
use crate::domain::services::drag_coordinator::{
    DragCoordinator, DragPreview, DragState, DropOutcome, Point, Rect, Size,
};
use crate::domain::services::result_store::ResultStore;
use crate::domain::services::settings_store::SettingsStore;
use crate::infrastructure::search::paginated_fetcher::PaginatedFetcher;
use crate::presentation::detail::DetailView;
use crate::presentation::errors::ErrorView;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// 当前搜索所处阶段
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(ErrorView),
}

/// 一次搜索的代号，完成时用来识别过期的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// 画廊会话
///
/// 一个会话持有结果存储、设置存储、拖拽协调器和轮播状态，并负责搜索的生命周期。
/// 所有修改都在 `&mut self` 上同步完成。
pub struct GallerySession {
    fetcher: Arc<PaginatedFetcher>,
    auth: Arc<dyn AuthService>,
    settings: SettingsStore,
    results: ResultStore,
    drag: DragCoordinator,
    carousel: Carousel,
    phase: SearchPhase,
    generation: u64,
    last_request: Option<SearchRequestDto>,
    detail: Option<String>,
    failed_images: HashSet<String>,
}

impl GallerySession {
    pub fn new(
        fetcher: Arc<PaginatedFetcher>,
        auth: Arc<dyn AuthService>,
        settings: SettingsStore,
        viewport: Size,
    ) -> Self {
        Self {
            fetcher,
            auth,
            settings,
            results: ResultStore::new(),
            drag: DragCoordinator::new(viewport),
            carousel: Carousel::default(),
            phase: SearchPhase::Idle,
            generation: 0,
            last_request: None,
            detail: None,
            failed_images: HashSet::new(),
        }
    }

    pub fn fetcher(&self) -> Arc<PaginatedFetcher> {
        Arc::clone(&self.fetcher)
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn results(&self) -> &[SearchResult] {
        self.results.as_slice()
    }

    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.settings.layout_mode()
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.auth.current_user()
    }

    // ---- search lifecycle ----

    /// 校验请求并开始一次新的搜索
    ///
    /// 之前尚未完成的搜索从此刻起视为过期。
    pub fn begin_search(&mut self, request: SearchRequestDto) -> Result<SearchTicket, SessionError> {
        request.validate()?;
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        self.last_request = Some(request);
        debug!(generation = self.generation, "Search started");
        Ok(SearchTicket {
            generation: self.generation,
        })
    }

    /// 应用一次搜索的结果；过期的结果被丢弃并返回 `false`
    pub fn apply_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            info!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding results from a superseded search"
            );
            return false;
        }

        self.drag.reset();
        self.detail = None;
        self.failed_images.clear();
        self.carousel = Carousel::default();

        match outcome {
            Ok(results) => {
                info!("Search completed with {} results", results.len());
                self.results.replace_all(results);
                self.phase = SearchPhase::Ready;
            }
            Err(e) => {
                warn!(kind = e.kind(), "Search failed: {}", e);
                self.results.replace_all(Vec::new());
                self.phase = SearchPhase::Failed(ErrorView::from(&e));
            }
        }
        true
    }

    /// 校验、抓取并应用一次搜索
    pub async fn run_search(
        &mut self,
        request: SearchRequestDto,
    ) -> Result<&SearchPhase, SessionError> {
        let ticket = self.begin_search(request.clone())?;
        let outcome = self
            .fetcher
            .fetch(&request.keywords, &request.selections())
            .await;
        self.apply_search(ticket, outcome);
        Ok(&self.phase)
    }

    /// 重新发起上一次搜索（错误页上的"重试"）
    pub async fn retry(&mut self) -> Result<&SearchPhase, SessionError> {
        match self.last_request.clone() {
            Some(request) => self.run_search(request).await,
            None => Ok(&self.phase),
        }
    }

    // ---- result mutation ----

    pub fn delete_at(&mut self, index: usize) -> Option<SearchResult> {
        let removed = self.results.delete_at(index)?;
        if self.detail.as_deref() == Some(removed.link.as_str()) {
            self.detail = None;
        }
        if self.drag.active_id() == Some(removed.link.as_str()) {
            self.drag.reset();
        }
        self.failed_images.remove(&removed.link);
        Some(removed)
    }

    pub fn pointer_down(&mut self, id: &str, at: Point, card_rect: Rect) {
        if self.results.index_of(id).is_some() {
            self.drag.pointer_down(id, at, card_rect);
        }
    }

    pub fn pointer_move(&mut self, to: Point) -> bool {
        self.drag.pointer_move(to)
    }

    pub fn drop_on(&mut self, target: Option<&str>) -> DropOutcome {
        self.drag.drop_on(target, &mut self.results)
    }

    pub fn cancel_drag(&mut self) -> DropOutcome {
        self.drag.cancel()
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.drag.set_viewport(viewport);
    }

    pub fn drag_preview(&self) -> Option<DragPreview> {
        self.drag.preview()
    }

    // ---- settings ----

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<&Settings, SessionError> {
        Ok(self.settings.update(patch)?)
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> Result<(), SessionError> {
        self.drag.reset();
        Ok(self.settings.set_layout_mode(mode)?)
    }

    pub fn reset_settings(&mut self) -> Result<(), SessionError> {
        Ok(self.settings.clear()?)
    }

    // ---- carousel ----

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn scroll_to(&mut self, progress: f64) {
        self.carousel.scroll_to(progress);
    }

    pub fn scroll_next(&mut self) {
        self.carousel.scroll_next(self.results.len());
    }

    pub fn scroll_prev(&mut self) {
        self.carousel.scroll_prev(self.results.len());
    }

    // ---- detail modal & images ----

    /// 打开详情（卡片上的"编辑"操作）；id 不存在时返回 `false`
    pub fn open_detail(&mut self, id: &str) -> bool {
        if self.results.get(id).is_none() {
            return false;
        }
        self.detail = Some(id.to_string());
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        let result = self.results.get(self.detail.as_deref()?)?;
        Some(DetailView::new(
            result,
            self.settings.settings(),
            &self.render_context(),
        ))
    }

    /// 记录图片加载失败，之后该结果显示占位图
    pub fn report_image_error(&mut self, id: &str) {
        if self.results.get(id).is_some() && self.failed_images.insert(id.to_string()) {
            debug!(id, "Image failed to load, using placeholder");
        }
    }

    // ---- rendering ----

    fn strategy(&self) -> Box<dyn LayoutStrategy> {
        match self.settings.layout_mode() {
            LayoutMode::Basic => Box::new(GridLayout),
            LayoutMode::Masonry => Box::new(MasonryLayout),
            LayoutMode::Coverflow => Box::new(CoverflowLayout::new(self.carousel)),
        }
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(self.drag.active_id(), &self.failed_images)
    }

    pub fn render(&self) -> LayoutView<'_> {
        self.strategy().render(
            self.results.as_slice(),
            self.settings.settings(),
            &self.render_context(),
        )
    }

    pub async fn sign_out(&self) -> bool {
        self.auth.sign_out().await
    }
}
