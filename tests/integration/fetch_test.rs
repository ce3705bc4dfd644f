// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use footprint::domain::models::search_result::PlatformSelection;
use footprint::domain::search::engine::{SearchError, GENERIC_PROVIDER_ERROR};
use footprint::domain::services::normalizer::ResultNormalizer;
use footprint::infrastructure::search::{GoogleImageSearch, PaginatedFetcher};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{fetcher, page_body, FAVICONS, SEARCH_PATH};

async fn mount_page(server: &MockServer, start: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", start.to_string()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_forty_items_filter_to_thirty_two_and_truncate_to_thirty() {
    let server = MockServer::start().await;
    for start in [1, 11, 21, 31] {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "test-cx"))
            .and(query_param("q", "sunset"))
            .and(query_param("searchType", "image"))
            .and(query_param("num", "10"))
            .and(query_param("start", start.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(start, 2)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let results = fetcher(&server).fetch("sunset", &[]).await.unwrap();

    assert_eq!(results.len(), 30);
    assert!(results.iter().all(|r| r.image.as_deref().unwrap().ends_with(".jpg")));

    // filtered concatenation order: 8 per page, the last page cut after 6
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles[0], "Photo 1");
    assert_eq!(titles[8], "Photo 11");
    assert_eq!(titles[16], "Photo 21");
    assert_eq!(titles[24], "Photo 31");
    assert_eq!(titles[29], "Photo 36");

    let first = &results[0];
    assert_eq!(first.link, "https://blog.example.com/posts/1");
    assert_eq!(first.source, "blog.example.com");
    assert_eq!(
        first.favicon,
        "https://www.google.com/s2/favicons?domain=blog.example.com&sz=128"
    );
    assert_eq!(first.date.as_deref(), Some("2024-05-01T10:00:00Z"));
}

#[tokio::test]
async fn test_failing_page_fails_whole_fetch_with_provider_message() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(200).set_body_json(page_body(1, 0))).await;
    mount_page(&server, 11, ResponseTemplate::new(200).set_body_json(page_body(11, 0))).await;
    mount_page(
        &server,
        21,
        ResponseTemplate::new(403)
            .set_body_json(json!({ "error": { "code": 403, "message": "quota exceeded" } })),
    )
    .await;
    mount_page(&server, 31, ResponseTemplate::new(200).set_body_json(page_body(31, 0))).await;

    let err = fetcher(&server).fetch("sunset", &[]).await.unwrap_err();
    assert_eq!(err, SearchError::Provider("quota exceeded".to_string()));
    assert_eq!(err.to_string(), "quota exceeded");
}

#[tokio::test]
async fn test_unstructured_error_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = fetcher(&server).fetch("sunset", &[]).await.unwrap_err();
    assert_eq!(err, SearchError::Provider(GENERIC_PROVIDER_ERROR.to_string()));
}

#[tokio::test]
async fn test_missing_credentials_make_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 0)))
        .expect(0)
        .mount(&server)
        .await;

    let provider = GoogleImageSearch::new(
        format!("{}{}", server.uri(), SEARCH_PATH),
        Some("test-key".to_string()),
        None,
    );
    let fetcher = PaginatedFetcher::new(Arc::new(provider), ResultNormalizer::new(FAVICONS));

    let err = fetcher.fetch("sunset", &[]).await.unwrap_err();
    assert!(matches!(err, SearchError::Configuration(_)));
    server.verify().await;
}

#[tokio::test]
async fn test_pages_without_items_are_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "kind": "customsearch#search" })),
        )
        .expect(4)
        .mount(&server)
        .await;

    let err = fetcher(&server).fetch("nothing here", &[]).await.unwrap_err();
    assert_eq!(err, SearchError::EmptyResult);
}

#[tokio::test]
async fn test_platform_clauses_are_sent_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param(
            "q",
            "jane site:instagram.com jane.doe OR site:soundcloud.com janedoe",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 0)))
        .expect(4)
        .mount(&server)
        .await;

    let platforms = vec![
        PlatformSelection::selected("Instagram", "jane.doe"),
        PlatformSelection::new("Reddit"),
        PlatformSelection::selected("SoundCloud", "janedoe"),
    ];
    let results = fetcher(&server).fetch("jane", &platforms).await.unwrap();

    // every page served the same ten items; duplicates collapse to the first occurrence
    assert_eq!(results.len(), 10);
}
