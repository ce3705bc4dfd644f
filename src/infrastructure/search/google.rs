// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::settings::ProviderConfig;
use crate::domain::search::engine::{
    ImageSearchProvider, SearchError, SearchPage, GENERIC_PROVIDER_ERROR,
};

/// Google 自定义搜索错误响应体 `{ "error": { "message": ... } }`
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: Option<GoogleErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: Option<String>,
}

/// Google Custom Search 图片搜索客户端
pub struct GoogleImageSearch {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    search_engine_id: Option<String>,
}

impl GoogleImageSearch {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        search_engine_id: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: non_blank(api_key),
            search_engine_id: non_blank(search_engine_id),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.search_engine_id.clone(),
        )
    }

    fn credentials(&self) -> Result<(&str, &str), SearchError> {
        match (self.api_key.as_deref(), self.search_engine_id.as_deref()) {
            (Some(key), Some(cx)) => Ok((key, cx)),
            _ => Err(SearchError::missing_credentials()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Pull `error.message` out of a failed response body, falling back to the generic message.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<GoogleErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_PROVIDER_ERROR.to_string())
}

#[async_trait]
impl ImageSearchProvider for GoogleImageSearch {
    fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    async fn fetch_page(
        &self,
        query: &str,
        start: u32,
        num: u32,
    ) -> Result<SearchPage, SearchError> {
        let (key, cx) = self.credentials()?;

        debug!("Requesting image page start={} num={}", start, num);
        let num_param = num.to_string();
        let start_param = start.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", key),
                ("cx", cx),
                ("q", query),
                ("searchType", "image"),
                ("num", num_param.as_str()),
                ("start", start_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Image search request failed at start={}: {}", start, e);
                SearchError::Provider(GENERIC_PROVIDER_ERROR.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_message(&body);
            warn!(
                "Image search returned {} at start={}: {}",
                status, start, message
            );
            return Err(SearchError::Provider(message));
        }

        let page: SearchPage = response.json().await.map_err(|e| {
            warn!("Image search response at start={} was not valid: {}", start, e);
            SearchError::Provider(GENERIC_PROVIDER_ERROR.to_string())
        })?;

        debug!(
            "Image page start={} returned {} items",
            start,
            page.items.as_ref().map_or(0, Vec::len)
        );
        Ok(page)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
