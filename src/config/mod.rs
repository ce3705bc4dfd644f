// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置，包括搜索提供方凭据、存储路径和认证用户
pub mod settings;

pub use settings::{AppConfig, AuthConfig, ProviderConfig, StorageConfig};
