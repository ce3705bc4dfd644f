// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 持久化键值存储
///
/// 同步接口：设置的写入在 `update` 返回前完成。
pub trait KeyValueStore: Send + Sync {
    /// 根据键读取值
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入键值，覆盖旧值
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除键，不存在时视为成功
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
