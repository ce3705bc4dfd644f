// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义图片搜索提供方接口、原始条目结构和搜索错误分类
pub mod engine;

pub use engine::{ImageSearchProvider, RawSearchItem, SearchError, SearchPage};
