// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::layout::{
    CardSizing, CardStyle, ContainerStyle, LayoutStrategy, LayoutView, PageStyle, RenderContext,
};
use crate::domain::models::search_result::SearchResult;
use crate::domain::models::settings::{LayoutMode, Settings};

const MAX_ROTATION_DEG: f64 = 45.0;
const ROTATION_PER_SLIDE: f64 = 50.0;
const FADE_PER_SLIDE: f64 = 0.5;
const SHRINK_PER_SLIDE: f64 = 0.2;
const SLIDE_BASIS_PERCENT: u32 = 70;

/// 封面流中一张卡片的 3D 变换
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CardTransform {
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateY({:.2}deg) scale({:.3})",
            self.rotate_y_deg, self.scale
        )
    }
}

/// 由卡片到中心的距离（以卡片数计）计算变换
///
/// 中心卡片完全不旋转、不缩放、不透明；越远旋转越大（上限 45°）、越小、越淡。
/// 中心左侧（距离为负）的卡片向内转为正角度。
pub fn visual_transform(distance: f64) -> CardTransform {
    let magnitude = distance.abs();
    let rotation = (magnitude * ROTATION_PER_SLIDE).min(MAX_ROTATION_DEG);
    CardTransform {
        rotate_y_deg: if distance < 0.0 { rotation } else { -rotation },
        scale: (1.0 - magnitude * SHRINK_PER_SLIDE).max(0.0),
        opacity: (1.0 - magnitude * FADE_PER_SLIDE).clamp(0.0, 1.0),
    }
}

/// 循环轮播的滚动状态
///
/// `progress` 在 `[0, 1)` 内，`index / count` 处的卡片居中。越过最后一张会回到第一张。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Carousel {
    progress: f64,
}

impl Carousel {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn scroll_to(&mut self, progress: f64) {
        self.progress = if progress.is_finite() {
            progress.rem_euclid(1.0)
        } else {
            0.0
        };
    }

    pub fn scroll_next(&mut self, count: usize) {
        if count > 0 {
            self.scroll_to(self.snapped(count) + 1.0 / count as f64);
        }
    }

    pub fn scroll_prev(&mut self, count: usize) {
        if count > 0 {
            self.scroll_to(self.snapped(count) - 1.0 / count as f64);
        }
    }

    /// Index of the card nearest the center.
    pub fn selected_index(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        ((self.progress * count as f64).round() as usize) % count
    }

    /// Signed distance of card `index` from the center, wrapped to the shorter way round.
    pub fn distance(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let n = count as f64;
        let raw = self.progress * n - index as f64;
        let half = n / 2.0;
        (raw + half).rem_euclid(n) - half
    }

    fn snapped(&self, count: usize) -> f64 {
        self.selected_index(count) as f64 / count as f64
    }
}

/// 封面流布局
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverflowLayout {
    carousel: Carousel,
}

impl CoverflowLayout {
    pub fn new(carousel: Carousel) -> Self {
        Self { carousel }
    }
}

impl LayoutStrategy for CoverflowLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Coverflow
    }

    fn render<'a>(
        &self,
        results: &'a [SearchResult],
        settings: &'a Settings,
        ctx: &RenderContext<'_>,
    ) -> LayoutView<'a> {
        let count = results.len();
        let cards = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let mut card = ctx.card(index, result);
                card.transform = Some(visual_transform(self.carousel.distance(index, count)));
                card
            })
            .collect();

        LayoutView {
            mode: self.mode(),
            page: PageStyle::from_settings(settings),
            container: ContainerStyle::Carousel {
                slide_basis_percent: SLIDE_BASIS_PERCENT,
                looping: true,
                selected: self.carousel.selected_index(count),
            },
            card_style: CardStyle::from_settings(
                &settings.card,
                CardSizing::Fixed {
                    height: settings.card.height,
                },
            ),
            cards,
        }
    }
}
