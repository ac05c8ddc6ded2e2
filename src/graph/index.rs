//! 邻接索引
//!
//! 顶点到邻居集合的内存索引，是顶点集和边集的派生缓存。
//! 只由 `Graph` 的变更操作维护，不参与相等或子图比较。

use crate::graph::vertex::Vertex;
use indexmap::{IndexMap, IndexSet};

/// 邻接索引
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<V> {
    /// 顶点到邻居集合的映射（按插入顺序）
    neighbors: IndexMap<V, IndexSet<V>>,
}

impl<V: Vertex> AdjacencyIndex<V> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            neighbors: IndexMap::new(),
        }
    }

    /// 为顶点建立空的邻居集合，已存在时返回 `false`
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.neighbors.contains_key(&v) {
            return false;
        }
        self.neighbors.insert(v, IndexSet::new());
        true
    }

    /// 移除顶点的邻居集合
    ///
    /// 调用方负责先解除该顶点的所有边。
    pub fn remove_vertex(&mut self, v: &V) -> Option<IndexSet<V>> {
        self.neighbors.shift_remove(v)
    }

    /// 记录 u-v 相邻
    pub fn link(&mut self, u: &V, v: &V) {
        if let Some(set) = self.neighbors.get_mut(u) {
            set.insert(v.clone());
        }
        if let Some(set) = self.neighbors.get_mut(v) {
            set.insert(u.clone());
        }
    }

    /// 解除 u-v 相邻
    pub fn unlink(&mut self, u: &V, v: &V) {
        if let Some(set) = self.neighbors.get_mut(u) {
            set.shift_remove(v);
        }
        if let Some(set) = self.neighbors.get_mut(v) {
            set.shift_remove(u);
        }
    }

    /// 获取邻居集合；顶点不存在时返回 `None`
    pub fn neighbors(&self, v: &V) -> Option<&IndexSet<V>> {
        self.neighbors.get(v)
    }

    /// 获取度数；顶点不存在时为 0
    pub fn degree(&self, v: &V) -> usize {
        self.neighbors.get(v).map(|set| set.len()).unwrap_or(0)
    }

    /// u 与 v 是否相邻
    pub fn are_adjacent(&self, u: &V, v: &V) -> bool {
        self.neighbors
            .get(u)
            .map(|set| set.contains(v))
            .unwrap_or(false)
    }

    /// 是否有该顶点的条目
    pub fn contains(&self, v: &V) -> bool {
        self.neighbors.contains_key(v)
    }

    /// 条目数量
    pub fn entry_count(&self) -> usize {
        self.neighbors.len()
    }

    /// 所有邻接关系的数量（每条边计两次）
    pub fn incidence_count(&self) -> usize {
        self.neighbors.values().map(|set| set.len()).sum()
    }
}

impl<V: Vertex> Default for AdjacencyIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
