// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::layout::{
    CardSizing, CardStyle, ContainerStyle, GridSlot, LayoutStrategy, LayoutView, PageStyle,
    RenderContext,
};
use crate::domain::models::search_result::SearchResult;
use crate::domain::models::settings::{LayoutMode, Settings};

/// 基础网格布局
///
/// 固定 N 列，所有卡片等高，按行优先排列。
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl GridLayout {
    pub fn slot(index: usize, columns: u32) -> GridSlot {
        let columns = columns.max(1) as usize;
        GridSlot {
            row: index / columns,
            column: index % columns,
        }
    }
}

impl LayoutStrategy for GridLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Basic
    }

    fn render<'a>(
        &self,
        results: &'a [SearchResult],
        settings: &'a Settings,
        ctx: &RenderContext<'_>,
    ) -> LayoutView<'a> {
        let columns = settings.layout.column_count;
        let cards = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let mut card = ctx.card(index, result);
                card.slot = Some(Self::slot(index, columns));
                card
            })
            .collect();

        LayoutView {
            mode: self.mode(),
            page: PageStyle::from_settings(settings),
            container: ContainerStyle::Grid {
                columns,
                gap: settings.layout.grid_gap,
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
