// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务。
///
/// 包含的服务：
/// - 认证（auth）：外部认证协作方的接口
/// - 拖拽协调（drag_coordinator）：指针拖拽重排的状态机
/// - 规范化（normalizer）：原始条目到搜索结果的过滤和映射
/// - 结果存储（result_store）：会话内有序、可变的结果序列
/// - 设置存储（settings_store）：展示配置的加载、合并和持久化
pub mod auth;
pub mod drag_coordinator;
pub mod normalizer;
pub mod result_store;
pub mod settings_store;

pub use drag_coordinator::{DragCoordinator, DragState, DropOutcome, Point, Rect, Size};
pub use normalizer::ResultNormalizer;
pub use result_store::ResultStore;
pub use settings_store::SettingsStore;
