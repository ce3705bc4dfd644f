// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when the provider fails without a structured error body.
pub const GENERIC_PROVIDER_ERROR: &str = "Failed to fetch search results";

/// Message used when the concatenated pages carry no items at all.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Provider credentials are missing; no request was attempted.
    #[error("{0}")]
    Configuration(String),
    /// A page request failed.
    #[error("{0}")]
    Provider(String),
    #[error("No results found")]
    EmptyResult,
}

impl SearchError {
    pub fn missing_credentials() -> Self {
        SearchError::Configuration(
            "Google API configuration is missing. Please check your environment variables."
                .to_string(),
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Configuration(_) => "configuration",
            SearchError::Provider(_) => "provider",
            SearchError::EmptyResult => "empty_result",
        }
    }
}

/// 搜索提供方返回的单页结果
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Option<Vec<RawSearchItem>>,
}

impl SearchPage {
    pub fn into_items(self) -> Vec<RawSearchItem> {
        self.items.unwrap_or_default()
    }
}

/// 原始图片搜索条目
///
/// 字段全部可选，缺失时由 Normalizer 决定如何处理。
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchItem {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub display_link: Option<String>,
    #[serde(default)]
    pub image: Option<RawImageInfo>,
    #[serde(default)]
    pub pagemap: Option<RawPagemap>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawImageInfo {
    #[serde(default)]
    pub context_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawPagemap {
    #[serde(default)]
    pub metatags: Option<Vec<Map<String, Value>>>,
}

impl RawSearchItem {
    /// `pagemap.metatags[0]['article:published_time']`
    pub fn published_time(&self) -> Option<&str> {
        self.pagemap
            .as_ref()?
            .metatags
            .as_ref()?
            .first()?
            .get("article:published_time")?
            .as_str()
    }
}

/// 图片搜索提供方
#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// Whether credentials are present. Fetching must not start when this is false.
    fn is_configured(&self) -> bool;

    /// Fetch one page. `start` is the provider's 1-based offset.
    async fn fetch_page(&self, query: &str, start: u32, num: u32)
        -> Result<SearchPage, SearchError>;

    /// Get the name of the provider
    fn name(&self) -> &'static str;
}
