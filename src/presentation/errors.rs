// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::search::engine::SearchError;

pub const ERROR_TITLE: &str = "Error";
pub const RETRY_LABEL: &str = "Try Again";

/// 阻塞整页的错误视图
///
/// 三类搜索错误使用同一种呈现：标题、消息和一个重新加载视图的"重试"操作。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorView {
    pub title: &'static str,
    pub message: String,
    pub kind: &'static str,
    pub retry_label: &'static str,
}

impl From<&SearchError> for ErrorView {
    fn from(error: &SearchError) -> Self {
        Self {
            title: ERROR_TITLE,
            message: error.to_string(),
            kind: error.kind(),
            retry_label: RETRY_LABEL,
        }
    }
}

impl From<SearchError> for ErrorView {
    fn from(error: SearchError) -> Self {
        Self::from(&error)
    }
}
