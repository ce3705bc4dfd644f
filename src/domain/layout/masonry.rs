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

/// 瀑布流布局
///
/// 多列排版，卡片高度随图片比例变化，因此各列长度不一。
#[derive(Debug, Clone, Copy, Default)]
pub struct MasonryLayout;

impl LayoutStrategy for MasonryLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Masonry
    }

    fn render<'a>(
        &self,
        results: &'a [SearchResult],
        settings: &'a Settings,
        ctx: &RenderContext<'_>,
    ) -> LayoutView<'a> {
        LayoutView {
            mode: self.mode(),
            page: PageStyle::from_settings(settings),
            container: ContainerStyle::Columns {
                count: settings.layout.column_count,
                gap: settings.layout.grid_gap,
            },
            card_style: CardStyle::from_settings(
                &settings.card,
                CardSizing::Intrinsic {
                    max_height: settings.card.height,
                },
            ),
            cards: results
                .iter()
                .enumerate()
                .map(|(index, result)| ctx.card(index, result))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasonryPlacement {
    pub column: usize,
    pub top: f64,
}

/// 按测量到的卡片高度放置卡片，每张放进当前最短的一列（并列时取最左）
pub fn pack_columns(heights: &[f64], columns: u32, gap: f64) -> Vec<MasonryPlacement> {
    let columns = columns.max(1) as usize;
    let mut column_heights = vec![0.0_f64; columns];

    heights
        .iter()
        .map(|&height| {
            let mut column = 0;
            for (i, &h) in column_heights.iter().enumerate() {
                if h < column_heights[column] {
                    column = i;
                }
            }
            let top = column_heights[column];
            column_heights[column] = top + height.max(0.0) + gap;
            MasonryPlacement { column, top }
        })
        .collect()
}
