// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use footprint::domain::layout::{
    pack_columns, visual_transform, Carousel, CoverflowLayout, GridLayout, LayoutStrategy,
    MasonryLayout, RenderContext,
};
use footprint::domain::models::search_result::SearchResult;
use footprint::domain::models::settings::Settings;

fn results(n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| SearchResult {
            title: format!("Card {}", i),
            description: String::new(),
            link: format!("https://example.org/{}", i),
            image: Some(format!("https://img.example.org/{}.webp", i)),
            favicon: String::new(),
            source: "example.org".to_string(),
            date: None,
        })
        .collect()
}

#[test]
fn test_transform_decreases_monotonically_with_distance() {
    let mut previous = visual_transform(0.0);
    for step in 1..=20 {
        let current = visual_transform(step as f64 * 0.1);
        assert!(current.scale <= previous.scale);
        assert!(current.opacity <= previous.opacity);
        assert!(current.rotate_y_deg.abs() >= previous.rotate_y_deg.abs());
        assert!(current.rotate_y_deg.abs() <= 45.0);
        previous = current;
    }
}

#[test]
fn test_strategies_render_same_order() {
    let results = results(6);
    let settings = Settings::default();
    let failed = HashSet::new();
    let ctx = RenderContext::new(None, &failed);

    let strategies: [&dyn LayoutStrategy; 3] = [
        &GridLayout,
        &MasonryLayout,
        &CoverflowLayout::new(Carousel::default()),
    ];
    for strategy in strategies {
        let view = strategy.render(&results, &settings, &ctx);
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id).collect();
        let expected: Vec<&str> = results.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(ids, expected);
        assert!(view.cards.iter().all(|c| c.actions.edit && c.actions.delete && c.actions.drag));
    }
}

#[test]
fn test_masonry_packing_fills_shortest_column() {
    let placements = pack_columns(&[120.0, 80.0, 60.0, 200.0, 40.0], 3, 0.0);
    let columns: Vec<usize> = placements.iter().map(|p| p.column).collect();
    assert_eq!(columns, vec![0, 1, 2, 2, 1]);
    assert_eq!(placements[3].top, 60.0);
    assert_eq!(placements[4].top, 80.0);
}
