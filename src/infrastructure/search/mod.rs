// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供 Google 自定义搜索图片 API 的客户端，以及并发分页抓取器
pub mod google;
pub mod paginated_fetcher;

pub use google::GoogleImageSearch;
pub use paginated_fetcher::PaginatedFetcher;
