// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 认证（auth）：本地单用户认证协作方
/// - 搜索（search）：图片搜索提供方客户端和分页抓取器
/// - 存储（storage）：文件和内存键值存储
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod auth;
pub mod search;
pub mod storage;
