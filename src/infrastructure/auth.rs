// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use crate::config::settings::AuthConfig;
use crate::domain::services::auth::{AuthService, AuthUser};

/// 本地单用户认证
///
/// 用户来自配置；登出后会话中不再有当前用户。
#[derive(Debug, Default)]
pub struct LocalAuth {
    user: RwLock<Option<AuthUser>>,
}

impl LocalAuth {
    pub fn signed_in(email: Option<String>) -> Self {
        Self {
            user: RwLock::new(Some(AuthUser { email })),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::signed_in(config.email.clone())
    }
}

#[async_trait]
impl AuthService for LocalAuth {
    fn current_user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    async fn sign_out(&self) -> bool {
        if self.user.write().take().is_some() {
            info!("User signed out");
        }
        true
    }
}
