// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use footprint::infrastructure::search::{GoogleImageSearch, PaginatedFetcher};
use footprint::domain::services::normalizer::ResultNormalizer;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/customsearch/v1";
pub const FAVICONS: &str = "https://www.google.com/s2/favicons";

pub fn provider(server: &MockServer) -> GoogleImageSearch {
    GoogleImageSearch::new(
        format!("{}{}", server.uri(), SEARCH_PATH),
        Some("test-key".to_string()),
        Some("test-cx".to_string()),
    )
}

pub fn fetcher(server: &MockServer) -> PaginatedFetcher {
    PaginatedFetcher::new(Arc::new(provider(server)), ResultNormalizer::new(FAVICONS))
}

/// Ten items for the page at `start`; the last `non_images` of them point at SVGs.
pub fn page_body(start: u32, non_images: usize) -> Value {
    let items: Vec<Value> = (0..10usize)
        .map(|i| {
            let n = start as usize + i;
            let ext = if i >= 10 - non_images { "svg" } else { "jpg" };
            json!({
                "kind": "customsearch#result",
                "title": format!("Photo {}", n),
                "link": format!("https://cdn.example.com/photo-{}.{}", n, ext),
                "snippet": format!("Snippet {}", n),
                "displayLink": "cdn.example.com",
                "image": { "contextLink": format!("https://blog.example.com/posts/{}", n) },
                "pagemap": { "metatags": [ { "article:published_time": "2024-05-01T10:00:00Z" } ] }
            })
        })
        .collect();
    json!({ "kind": "customsearch#search", "items": items })
}
