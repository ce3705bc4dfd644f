// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::RawSearchItem;
use crate::utils::url_utils::{favicon_url, parse_web_url};

// Extension at the end of the path; a trailing query string or fragment is allowed.
static RASTER_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(?:jpg|jpeg|png|gif|webp)(?:[?#].*)?$").expect("image pattern is valid")
});

/// 判断 URL 是否指向常见的位图格式
pub fn is_raster_image(url: &str) -> bool {
    RASTER_IMAGE.is_match(url.trim())
}

/// 结果规范化器
///
/// 将提供方的原始条目映射为 [`SearchResult`]，过滤掉不是图片的条目。
/// 映射是纯函数：同一条目总是得到同一结果。
#[derive(Debug, Clone)]
pub struct ResultNormalizer {
    favicon_endpoint: String,
}

impl ResultNormalizer {
    pub fn new(favicon_endpoint: impl Into<String>) -> Self {
        Self {
            favicon_endpoint: favicon_endpoint.into(),
        }
    }

    pub fn normalize(&self, item: &RawSearchItem) -> Option<SearchResult> {
        let media = item.link.as_deref().map(str::trim)?;
        if !is_raster_image(media) {
            return None;
        }

        // contextLink, then displayLink, then the raw link
        let context = [
            item.image.as_ref().and_then(|i| i.context_link.as_deref()),
            item.display_link.as_deref(),
            Some(media),
        ]
        .into_iter()
        .flatten()
        .find_map(parse_web_url)?;

        let source = context.host_str()?.to_string();

        Some(SearchResult {
            title: item.title.clone().unwrap_or_default(),
            description: item.snippet.clone().unwrap_or_default(),
            link: context.as_str().to_string(),
            image: Some(media.to_string()),
            favicon: favicon_url(&self.favicon_endpoint, &source),
            source,
            date: item.published_time().map(str::to_string),
        })
    }

    /// Normalize in order, dropping excluded items.
    pub fn normalize_all(&self, items: &[RawSearchItem]) -> Vec<SearchResult> {
        items.iter().filter_map(|item| self.normalize(item)).collect()
    }
}

/// 按 `link` 去重，保留第一次出现的结果
pub fn dedupe_by_link(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.link.clone()))
        .collect()
}
