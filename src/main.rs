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

use std::sync::Arc;

use footprint::application::dto::search_request::SearchRequestDto;
use footprint::application::session::GallerySession;
use footprint::config::settings::AppConfig;
use footprint::domain::services::drag_coordinator::Size;
use footprint::domain::services::settings_store::SettingsStore;
use footprint::infrastructure::auth::LocalAuth;
use footprint::infrastructure::search::{GoogleImageSearch, PaginatedFetcher};
use footprint::infrastructure::storage::create_storage;
use footprint::presentation::page::PageView;
use footprint::utils::telemetry;
use tracing::info;

/// 解析命令行：`platform=username` 形式的参数是平台选择，其余拼成关键词
fn parse_args(args: impl IntoIterator<Item = String>) -> SearchRequestDto {
    let mut keywords = Vec::new();
    let mut request = SearchRequestDto::default();
    for arg in args {
        match arg.split_once('=') {
            Some((platform, username)) if !platform.is_empty() => {
                request = request.with_platform(platform, username);
            }
            _ => keywords.push(arg),
        }
    }
    request.keywords = keywords.join(" ");
    request
}

/// 主函数
///
/// 加载配置和持久化设置，执行一次搜索并以 JSON 输出结果页视图
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting footprint...");

    // 2. Load configuration
    let config = AppConfig::new()?;
    info!("Configuration loaded");

    // 3. Restore persisted presentation settings
    let storage = create_storage(&config.storage);
    let settings = SettingsStore::load(storage);

    // 4. Wire the provider, fetcher and auth collaborator
    let provider = Arc::new(GoogleImageSearch::from_config(&config.provider));
    let fetcher = Arc::new(PaginatedFetcher::from_config(provider, &config.provider));
    let auth = Arc::new(LocalAuth::from_config(&config.auth));

    let mut session = GallerySession::new(fetcher, auth, settings, Size::new(1280.0, 800.0));

    // 5. Run one search
    let request = parse_args(std::env::args().skip(1));
    session.run_search(request).await?;

    let page = PageView::from_session(&session);
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
