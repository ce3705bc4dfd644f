// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub email: Option<String>,
}

/// 认证协作方
///
/// 核心只需要"当前用户"和"登出"两个能力。
#[async_trait]
pub trait AuthService: Send + Sync {
    fn current_user(&self) -> Option<AuthUser>;

    /// Returns `false` when sign-out failed; the user stays signed in.
    async fn sign_out(&self) -> bool;
}
