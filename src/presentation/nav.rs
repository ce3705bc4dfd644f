// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::models::settings::LayoutMode;
use crate::domain::services::auth::AuthUser;

const FALLBACK_INITIAL: char = 'U';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOption {
    pub mode: LayoutMode,
    pub title: &'static str,
    pub description: &'static str,
    pub active: bool,
}

/// 导航栏视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavView {
    pub signed_in: bool,
    pub email: Option<String>,
    pub avatar_initial: char,
    pub layouts: Vec<LayoutOption>,
}

impl NavView {
    pub fn new(user: Option<&AuthUser>, active: LayoutMode) -> Self {
        let email = user.and_then(|u| u.email.clone());
        Self {
            signed_in: user.is_some(),
            avatar_initial: avatar_initial(email.as_deref()),
            email,
            layouts: LayoutMode::ALL
                .iter()
                .map(|&mode| {
                    let (title, description) = mode.label();
                    LayoutOption {
                        mode,
                        title,
                        description,
                        active: mode == active,
                    }
                })
                .collect(),
        }
    }
}

/// Upper-cased first character of the email, `U` when there is none.
pub fn avatar_initial(email: Option<&str>) -> char {
    email
        .and_then(|e| e.trim().chars().next())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(FALLBACK_INITIAL)
}
