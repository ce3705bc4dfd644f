// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// 应用程序配置
///
/// 包含搜索提供方、持久化存储和认证三部分
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 搜索提供方配置
    pub provider: ProviderConfig,
    /// 存储配置
    pub storage: StorageConfig,
    /// 认证配置
    #[serde(default)]
    pub auth: AuthConfig,
}

/// 图片搜索提供方配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Google API 密钥，缺失或为空时不发起任何请求
    pub api_key: Option<String>,
    /// 自定义搜索引擎 ID（cx）
    pub search_engine_id: Option<String>,
    /// 搜索 API 端点
    pub endpoint: String,
    /// 网站图标服务端点
    pub favicon_endpoint: String,
    /// 每次查询请求的页数
    pub page_count: u32,
    /// 每页条目数
    pub page_size: u32,
    /// 保留的最大结果数
    pub max_results: usize,
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 本地存储路径，未设置时使用内存存储
    pub local_path: Option<String>,
}

/// 认证配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// 当前登录用户的邮箱
    pub email: Option<String>,
}

impl AppConfig {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值 → `config/default` → `config/{APP_ENVIRONMENT}` → `FOOTPRINT__*` 环境变量
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FOOTPRINT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load from built-in defaults overlaid with a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(
                "provider.endpoint",
                "https://www.googleapis.com/customsearch/v1",
            )?
            .set_default(
                "provider.favicon_endpoint",
                "https://www.google.com/s2/favicons",
            )?
            .set_default("provider.page_count", 4)?
            .set_default("provider.page_size", 10)?
            .set_default("provider.max_results", 30)?
            .set_default("storage.local_path", "./storage")
    }
}
