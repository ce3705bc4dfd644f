// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 将会话状态投影为可序列化的视图模型：导航栏、结果页、详情弹窗和错误页。
/// 不生成任何标记，渲染由宿主完成。
pub mod detail;
pub mod errors;
pub mod nav;
pub mod page;

pub use detail::DetailView;
pub use errors::ErrorView;
pub use nav::NavView;
pub use page::{PageContent, PageView};
