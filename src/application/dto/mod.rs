// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义进入应用层的请求结构及其校验规则
pub mod search_request;

pub use search_request::{PlatformSelectionDto, SearchRequestDto};
