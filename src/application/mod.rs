// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求 DTO 和把各领域服务串起来的画廊会话
pub mod dto;
pub mod session;

pub use session::{GallerySession, SearchPhase, SearchTicket, SessionError};
