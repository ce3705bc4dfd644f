// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：搜索结果、平台选择和展示配置
/// - 仓库接口（repositories）：键值持久化抽象接口
/// - 搜索（search）：图片搜索提供方的接口和原始响应结构
/// - 服务（services）：结果存储、设置存储、拖拽协调等领域服务
/// - 布局（layout）：三种可互换的结果布局策略
///
/// 领域层不依赖于任何外部实现。
pub mod layout;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
