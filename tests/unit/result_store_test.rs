// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use footprint::domain::models::search_result::SearchResult;
use footprint::domain::services::result_store::ResultStore;

fn store(n: usize) -> ResultStore {
    let mut store = ResultStore::new();
    store.replace_all(
        (0..n)
            .map(|i| SearchResult {
                title: format!("{}", i),
                description: String::new(),
                link: format!("https://example.net/{}", i),
                image: None,
                favicon: String::new(),
                source: "example.net".to_string(),
                date: None,
            })
            .collect(),
    );
    store
}

fn titles(store: &ResultStore) -> Vec<String> {
    store.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn test_delete_third_of_five() {
    let mut store = store(5);
    let removed = store.delete_at(2).unwrap();
    assert_eq!(removed.title, "2");
    assert_eq!(titles(&store), vec!["0", "1", "3", "4"]);
}

#[test]
fn test_noops_leave_store_unchanged() {
    let mut store = store(4);
    let before = titles(&store);
    let revision = store.revision();

    assert!(store.delete_at(4).is_none());
    assert!(store
        .move_to("https://example.net/1", "https://example.net/1")
        .is_none());
    assert!(store
        .move_to("https://example.net/1", "https://example.net/missing")
        .is_none());

    assert_eq!(titles(&store), before);
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_adjacent_move_round_trip() {
    let mut store = store(5);
    let before = titles(&store);
    store.move_to("https://example.net/2", "https://example.net/3");
    assert_eq!(titles(&store), vec!["0", "1", "3", "2", "4"]);
    store.move_to("https://example.net/3", "https://example.net/2");
    assert_eq!(titles(&store), before);
}
