// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求校验和画廊会话
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务、布局策略和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，如搜索提供方、键值存储和认证
pub mod infrastructure;

/// 表示层模块
///
/// 把会话状态投影为可序列化的视图模型
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
