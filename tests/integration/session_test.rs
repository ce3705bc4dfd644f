// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use footprint::application::dto::search_request::SearchRequestDto;
use footprint::application::session::{GallerySession, SearchPhase};
use footprint::domain::models::settings::LayoutMode;
use footprint::domain::services::drag_coordinator::{DropOutcome, Point, Rect, Size};
use footprint::domain::services::settings_store::SettingsStore;
use footprint::infrastructure::auth::LocalAuth;
use footprint::infrastructure::storage::InMemoryStorage;
use footprint::presentation::page::{PageContent, PageView};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{fetcher, page_body, SEARCH_PATH};

fn session(server: &MockServer) -> GallerySession {
    GallerySession::new(
        Arc::new(fetcher(server)),
        Arc::new(LocalAuth::signed_in(Some("jane@example.com".to_string()))),
        SettingsStore::load(Arc::new(InMemoryStorage::new())),
        Size::new(1024.0, 768.0),
    )
}

async fn mount_all_pages(server: &MockServer, query: &str) {
    for start in [1u32, 11, 21, 31] {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("q", query))
            .and(query_param("start", start.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(start, 0)))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_search_then_interact() {
    let server = MockServer::start().await;
    mount_all_pages(&server, "sunset").await;
    let mut session = session(&server);

    session
        .run_search(SearchRequestDto::new("sunset"))
        .await
        .unwrap();
    assert_eq!(session.phase(), &SearchPhase::Ready);
    assert_eq!(session.results().len(), 30);

    // delete the third card
    let removed = session.delete_at(2).unwrap();
    assert_eq!(removed.title, "Photo 3");
    assert_eq!(session.results().len(), 29);
    assert_eq!(session.results()[2].title, "Photo 4");

    // a 3px wiggle is a click, not a drag
    let first = session.results()[0].link.clone();
    let third = session.results()[2].link.clone();
    let card = Rect::new(0.0, 0.0, 200.0, 300.0);
    session.pointer_down(&first, Point::new(50.0, 50.0), card);
    assert!(!session.pointer_move(Point::new(53.0, 50.0)));
    assert_eq!(session.drop_on(Some(third.as_str())), DropOutcome::Ignored);

    // a 10px move starts the drag
    session.pointer_down(&first, Point::new(50.0, 50.0), card);
    assert!(session.pointer_move(Point::new(60.0, 50.0)));
    assert!(session.drag_preview().is_some());
    assert_eq!(
        session.drop_on(Some(third.as_str())),
        DropOutcome::Moved { from: 0, to: 2 }
    );
    assert_eq!(session.results()[2].link, first);

    // page view carries the gallery and the nav avatar
    session.set_layout_mode(LayoutMode::Masonry).unwrap();
    session.open_detail(&first);
    let page = PageView::from_session(&session);
    assert_eq!(page.nav.avatar_initial, 'J');
    match &page.content {
        PageContent::Gallery(view) => {
            assert_eq!(view.mode, LayoutMode::Masonry);
            assert_eq!(view.cards.len(), 29);
        }
        other => panic!("expected gallery, got {:?}", other),
    }
    let detail = page.detail.as_ref().unwrap();
    assert_eq!(detail.published.as_deref(), Some("Published: 5/1/2024"));

    let encoded = serde_json::to_value(&page).unwrap();
    assert_eq!(encoded["content"]["state"], json!("gallery"));
    assert_eq!(encoded["detail"]["linkTarget"], json!("_blank"));
}

#[tokio::test]
async fn test_failed_search_then_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "error": { "message": "quota exceeded" } })),
        )
        .up_to_n_times(4)
        .mount(&server)
        .await;
    mount_all_pages(&server, "sunset").await;

    let mut session = session(&server);
    session
        .run_search(SearchRequestDto::new("sunset"))
        .await
        .unwrap();
    match session.phase() {
        SearchPhase::Failed(view) => {
            assert_eq!(view.message, "quota exceeded");
            assert_eq!(view.retry_label, "Try Again");
        }
        other => panic!("expected failure, got {:?}", other),
    }

    session.retry().await.unwrap();
    assert_eq!(session.phase(), &SearchPhase::Ready);
    assert_eq!(session.results().len(), 30);
}

#[tokio::test]
async fn test_slow_stale_search_does_not_overwrite_newer_one() {
    let server = MockServer::start().await;
    mount_all_pages(&server, "old").await;
    mount_all_pages(&server, "new").await;
    let mut session = session(&server);
    let fetcher = session.fetcher();

    let old = session.begin_search(SearchRequestDto::new("old")).unwrap();
    let old_outcome = fetcher.fetch("old", &[]).await;

    let new = session.begin_search(SearchRequestDto::new("new")).unwrap();
    let mut new_outcome = fetcher.fetch("new", &[]).await;
    if let Ok(results) = new_outcome.as_mut() {
        results.truncate(5);
    }

    // newer search lands first, then the old one resolves late
    assert!(session.apply_search(new, new_outcome));
    assert!(!session.apply_search(old, old_outcome));
    assert_eq!(session.results().len(), 5);
    assert_eq!(session.phase(), &SearchPhase::Ready);
}
