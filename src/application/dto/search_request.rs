// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::search_result::PlatformSelection;

/// 一次搜索请求：关键词加上平台用户名
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_has_query"))]
pub struct SearchRequestDto {
    #[serde(default)]
    #[validate(length(max = 512, message = "Keywords are too long"))]
    pub keywords: String,
    #[serde(default)]
    #[validate(nested)]
    pub platforms: Vec<PlatformSelectionDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSelectionDto {
    #[validate(length(min = 1, max = 64, message = "Platform name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Username is too long"))]
    pub username: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

impl SearchRequestDto {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            platforms: Vec::new(),
        }
    }

    pub fn with_platform(mut self, name: impl Into<String>, username: impl Into<String>) -> Self {
        self.platforms.push(PlatformSelectionDto {
            name: name.into(),
            username: Some(username.into()),
            is_selected: true,
        });
        self
    }

    pub fn selections(&self) -> Vec<PlatformSelection> {
        self.platforms
            .iter()
            .map(|p| PlatformSelection {
                name: p.name.clone(),
                username: p.username.clone(),
                is_selected: p.is_selected,
            })
            .collect()
    }
}

fn validate_has_query(dto: &SearchRequestDto) -> Result<(), ValidationError> {
    let has_site_clause = dto.selections().iter().any(|p| p.site_clause().is_some());
    if dto.keywords.trim().is_empty() && !has_site_clause {
        let mut error = ValidationError::new("empty_query");
        error.message = Some("Enter keywords or at least one platform username".into());
        return Err(error);
    }
    Ok(())
}
