// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::layout::{RenderContext, Typography};
use crate::domain::models::search_result::SearchResult;
use crate::domain::models::settings::Settings;

/// 外链在新的浏览上下文中打开
pub const LINK_TARGET: &str = "_blank";

/// 单个结果的只读详情视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    pub image: &'a str,
    pub favicon: &'a str,
    pub source: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub link: &'a str,
    pub link_target: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    pub typography: Typography,
}

impl<'a> DetailView<'a> {
    pub fn new(result: &'a SearchResult, settings: &Settings, ctx: &RenderContext<'_>) -> Self {
        Self {
            image: ctx.image_for(result),
            favicon: &result.favicon,
            source: &result.source,
            title: &result.title,
            description: &result.description,
            link: &result.link,
            link_target: LINK_TARGET,
            published: result.date.as_deref().and_then(format_published),
            typography: Typography::from_card(&settings.card),
        }
    }
}

/// 将 ISO 日期格式化为 `Published: M/D/YYYY`，无法解析时返回 `None`
pub fn format_published(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(format!("Published: {}", date.format("%-m/%-d/%Y")))
}
