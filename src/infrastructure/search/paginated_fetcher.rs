// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::settings::ProviderConfig;
use crate::domain::models::search_result::{PlatformSelection, SearchResult};
use crate::domain::search::engine::{ImageSearchProvider, SearchError};
use crate::domain::services::normalizer::{dedupe_by_link, ResultNormalizer};

/// 分页抓取器
///
/// 对一次查询并发请求固定数量的页面，全部完成后按页序拼接、规范化、去重并截断。
/// 任意一页失败则整次抓取失败，不返回部分结果。
pub struct PaginatedFetcher {
    provider: Arc<dyn ImageSearchProvider>,
    normalizer: ResultNormalizer,
    page_count: u32,
    page_size: u32,
    max_results: usize,
}

impl PaginatedFetcher {
    pub fn new(provider: Arc<dyn ImageSearchProvider>, normalizer: ResultNormalizer) -> Self {
        Self {
            provider,
            normalizer,
            page_count: 4,
            page_size: 10,
            max_results: 30,
        }
    }

    pub fn from_config(provider: Arc<dyn ImageSearchProvider>, config: &ProviderConfig) -> Self {
        Self {
            provider,
            normalizer: ResultNormalizer::new(config.favicon_endpoint.clone()),
            page_count: config.page_count.max(1),
            page_size: config.page_size.max(1),
            max_results: config.max_results,
        }
    }

    /// 构造查询串：关键词后接所有站点子句，以 ` OR ` 连接
    pub fn build_query(keywords: &str, platforms: &[PlatformSelection]) -> String {
        let clauses: Vec<String> = platforms.iter().filter_map(|p| p.site_clause()).collect();
        format!("{} {}", keywords, clauses.join(" OR "))
            .trim()
            .to_string()
    }

    /// 1-based offsets of every page requested for one query.
    pub fn page_offsets(&self) -> Vec<u32> {
        (0..self.page_count)
            .map(|page| page.saturating_mul(self.page_size).saturating_add(1))
            .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    pub async fn fetch(
        &self,
        keywords: &str,
        platforms: &[PlatformSelection],
    ) -> Result<Vec<SearchResult>, SearchError> {
        if !self.provider.is_configured() {
            warn!(
                "Image search provider '{}' is missing credentials",
                self.provider.name()
            );
            return Err(SearchError::missing_credentials());
        }

        let query = Self::build_query(keywords, platforms);
        let offsets = self.page_offsets();
        info!(
            "Fetching {} pages from '{}' for query: {}",
            offsets.len(),
            self.provider.name(),
            query
        );

        let requests = offsets
            .iter()
            .map(|&start| self.provider.fetch_page(&query, start, self.page_size));
        let pages = join_all(requests).await;

        // Results come back in page order, so the first error is the lowest-offset failure.
        let mut raw_items = Vec::new();
        for page in pages {
            raw_items.extend(page?.into_items());
        }

        if raw_items.is_empty() {
            info!("Image search returned no items for query: {}", query);
            return Err(SearchError::EmptyResult);
        }

        let normalized = self.normalizer.normalize_all(&raw_items);
        let filtered = normalized.len();
        let mut results = dedupe_by_link(normalized);
        results.truncate(self.max_results);

        debug!(
            raw = raw_items.len(),
            filtered,
            kept = results.len(),
            "Image search results normalized"
        );
        Ok(results)
    }
}
