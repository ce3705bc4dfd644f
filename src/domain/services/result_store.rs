// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;

/// 结果存储
///
/// 会话内唯一拥有结果序列的地方。布局只借用引用，索引在每次变更后
/// 由消费方按当前顺序重新推导。
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    results: Vec<SearchResult>,
    revision: u64,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用一次完成的搜索替换全部结果
    pub fn replace_all(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.revision += 1;
    }

    /// 删除指定位置的结果，越界时不做任何事
    pub fn delete_at(&mut self, index: usize) -> Option<SearchResult> {
        if index >= self.results.len() {
            return None;
        }
        self.revision += 1;
        Some(self.results.remove(index))
    }

    /// 把 `source_id` 对应的结果移动到 `target_id` 当前所在的位置
    ///
    /// 中间的元素依次平移。任一 id 不存在或两者相同时不做任何事。
    /// 返回 `(from, to)`。
    pub fn move_to(&mut self, source_id: &str, target_id: &str) -> Option<(usize, usize)> {
        if source_id == target_id {
            return None;
        }
        let from = self.index_of(source_id)?;
        let to = self.index_of(target_id)?;

        let item = self.results.remove(from);
        self.results.insert(to, item);
        self.revision += 1;
        Some((from, to))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.results.iter().position(|result| result.link == id)
    }

    pub fn get(&self, id: &str) -> Option<&SearchResult> {
        self.results.iter().find(|result| result.link == id)
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
