// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索结果（search_result）：规范化后的图片结果和平台选择
/// - 展示配置（settings）：布局、卡片、页面配置以及布局模式
pub mod search_result;
pub mod settings;

pub use search_result::{default_platforms, PlatformInfo, PlatformSelection, SearchResult, PLATFORM_CATALOG};
pub use settings::{FontFamily, LayoutMode, Settings, SettingsPatch};
