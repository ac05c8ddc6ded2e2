//! 图数据结构
//!
//! 无向简单图：顶点集、边集两个权威集合，加上派生的邻接索引。
//! 所有集合都按插入顺序迭代，删除保持其余元素的相对顺序。

use super::edge::Edge;
use super::index::AdjacencyIndex;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::cmp::Ordering;
use tracing::trace;

/// 无向简单图
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 顶点集
    vertices: IndexSet<V>,
    /// 边集（规范化的无序对）
    edges: IndexSet<Edge<V>>,
    /// 邻接索引（派生缓存）
    adjacency: AdjacencyIndex<V>,
}

impl<V: Vertex> Graph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    /// 由初始顶点集和边集创建图
    ///
    /// 边的端点会自动加入顶点集，自环和重复边被忽略。
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// 由规范化的边集创建图
    pub fn from_edges<E>(edges: E) -> Self
    where
        E: IntoIterator<Item = Edge<V>>,
    {
        let mut graph = Self::new();
        for e in edges {
            graph.insert_edge(e);
        }
        graph
    }

    // ==================== 查询 ====================

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> indexmap::set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// 顶点集
    pub fn vertex_set(&self) -> &IndexSet<V> {
        &self.vertices
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> indexmap::set::Iter<'_, Edge<V>> {
        self.edges.iter()
    }

    /// 边集
    pub fn edge_set(&self) -> &IndexSet<Edge<V>> {
        &self.edges
    }

    /// 阶（顶点数）
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// 规模（边数）
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 密度 `2m / (n(n-1))`
    ///
    /// 阶小于 2 时返回 [`Error::DensityUndefined`]。
    pub fn density(&self) -> Result<f64> {
        let n = self.order();
        if n < 2 {
            return Err(Error::DensityUndefined { order: n });
        }
        let m = self.size();
        Ok((2 * m) as f64 / (n * (n - 1)) as f64)
    }

    /// 是否存在边 u-v（与方向无关）
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency.are_adjacent(u, v)
    }

    /// 是否存在顶点
    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// `has_vertex` 的别名
    pub fn contains(&self, v: &V) -> bool {
        self.has_vertex(v)
    }

    /// 度数；顶点不存在时为 0，且不会创建该顶点
    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.degree(v)
    }

    /// 邻居集合
    ///
    /// 顶点不存在时返回 `None`，孤立顶点返回空集合。
    pub fn neighbors(&self, v: &V) -> Option<&IndexSet<V>> {
        self.adjacency.neighbors(v)
    }

    /// 最小度
    pub fn min_degree(&self) -> Option<usize> {
        self.vertices.iter().map(|v| self.degree(v)).min()
    }

    /// 最大度
    pub fn max_degree(&self) -> Option<usize> {
        self.vertices.iter().map(|v| self.degree(v)).max()
    }

    /// 是否为 `other` 的子图（顶点集与边集分别包含于 `other`）
    pub fn is_subgraph(&self, other: &Graph<V>) -> bool {
        self.vertices.is_subset(&other.vertices) && self.edges.is_subset(&other.edges)
    }

    /// 是否为 `other` 的母图
    pub fn is_supergraph(&self, other: &Graph<V>) -> bool {
        other.is_subgraph(self)
    }

    // ==================== 变更 ====================

    /// 添加顶点，已存在时不做任何事
    ///
    /// 返回是否新插入。
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.contains(&v) {
            return false;
        }
        self.adjacency.insert_vertex(v.clone());
        self.vertices.insert(v);
        true
    }

    /// 添加边 u-v
    ///
    /// 自环或已存在的边（任一方向）不做任何事，否则端点会被一并加入。
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        match Edge::new(u, v) {
            Some(e) => self.insert_edge(e),
            None => false,
        }
    }

    /// 插入规范化的边
    pub fn insert_edge(&mut self, e: Edge<V>) -> bool {
        if self.edges.contains(&e) {
            return false;
        }
        let (u, v) = e.endpoints();
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.adjacency.link(u, v);
        self.edges.insert(e);
        true
    }

    /// 删除边 u-v，顶点保留
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        if let Some(e) = Edge::new(u.clone(), v.clone()) {
            self.edges.shift_remove(&e);
        }
        self.adjacency.unlink(u, v);
        true
    }

    /// 删除顶点及其所有关联边
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.has_vertex(v) {
            return false;
        }
        self.isolate(v);
        self.adjacency.remove_vertex(v);
        self.vertices.shift_remove(v);
        true
    }

    /// 弹出任意一个顶点（按插入顺序的第一个）
    ///
    /// 与 [`pop_vertex_where`](Self::pop_vertex_where) 相同：只剥离关联边，顶点本身保留为孤立顶点。
    pub fn pop_vertex(&mut self) -> Option<V> {
        self.pop_vertex_where(|_, _| true)
    }

    /// 弹出第一个满足谓词的顶点
    ///
    /// 删除该顶点的所有关联边，但**不**从顶点集中删除它；此后读取它的邻居集合为空。
    /// 没有顶点满足谓词时返回 `None`，图保持不变。
    pub fn pop_vertex_where<F>(&mut self, mut pred: F) -> Option<V>
    where
        F: FnMut(&Graph<V>, &V) -> bool,
    {
        let chosen = self.vertices.iter().find(|v| pred(self, *v)).cloned()?;
        let stripped = self.isolate(&chosen);
        trace!(vertex = ?chosen, stripped, "pop vertex");
        Some(chosen)
    }

    /// 删除顶点的所有关联边，返回删除的边数
    fn isolate(&mut self, v: &V) -> usize {
        let neighbors: Vec<V> = match self.adjacency.neighbors(v) {
            Some(set) => set.iter().cloned().collect(),
            None => return 0,
        };
        for u in &neighbors {
            self.remove_edge(v, u);
        }
        neighbors.len()
    }

    /// 检查结构不变式
    ///
    /// 1. 边的端点都在顶点集中
    /// 2. 边与邻接索引一一对应
    /// 3. 没有自环
    /// 4. 每个顶点恰有一个邻接条目
    pub fn check_invariants(&self) -> bool {
        let endpoints_present = self.edges.iter().all(|e| {
            let (u, v) = e.endpoints();
            u != v && self.vertices.contains(u) && self.vertices.contains(v)
        });
        let edges_indexed = self.edges.iter().all(|e| {
            let (u, v) = e.endpoints();
            self.adjacency.are_adjacent(u, v) && self.adjacency.are_adjacent(v, u)
        });
        let entries_match = self.adjacency.entry_count() == self.vertices.len()
            && self.vertices.iter().all(|v| self.adjacency.contains(v));

        endpoints_present
            && edges_indexed
            && entries_match
            && self.adjacency.incidence_count() == 2 * self.edges.len()
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 相等只比较顶点集和边集，不比较插入顺序和邻接索引
impl<V: Vertex> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.edges.len() == other.edges.len()
            && self.is_subgraph(other)
    }
}

impl<V: Vertex> Eq for Graph<V> {}

/// 子图偏序：`Less` 表示真子图，`Greater` 表示真母图，不可比较时为 `None`
impl<V: Vertex> PartialOrd for Graph<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subgraph(other), other.is_subgraph(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<V: Vertex> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<T: IntoIterator<Item = (V, V)>>(iter: T) -> Self {
        Self::from_parts(std::iter::empty(), iter)
    }
}

impl<V: Vertex> Extend<(V, V)> for Graph<V> {
    fn extend<T: IntoIterator<Item = (V, V)>>(&mut self, iter: T) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<'a, V: Vertex> IntoIterator for &'a Graph<V> {
    type Item = &'a V;
    type IntoIter = indexmap::set::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: u32) -> Graph<u32> {
        (1..n).map(|i| (i - 1, i)).collect()
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();

        assert!(graph.add_vertex("a"));
        assert!(!graph.add_vertex("a"));
        assert!(graph.add_edge("a", "b"));
        assert!(!graph.add_edge("b", "a"));
        assert!(!graph.add_edge("c", "c"));

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert!(graph.has_edge(&"b", &"a"));
        assert!(!graph.has_vertex(&"c"));
        assert!(graph.check_invariants());
    }

    #[test]
    fn test_from_parts_implies_endpoints() {
        let graph = Graph::from_parts([1, 2], [(3, 4), (4, 4)]);

        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.degree(&1), 0);
        assert!(graph.check_invariants());
    }

    #[test]
    fn test_remove_edge_keeps_vertices() {
        let mut graph = path(3);

        assert!(graph.remove_edge(&1, &0));
        assert!(!graph.remove_edge(&1, &0));
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.degree(&0), 0);
        assert!(graph.check_invariants());
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = path(4);

        assert!(graph.remove_vertex(&1));
        assert!(!graph.remove_vertex(&1));
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 1);
        assert!(graph.neighbors(&1).is_none());
        assert_eq!(graph.degree(&0), 0);
        assert!(graph.check_invariants());
    }

    #[test]
    fn test_degree_of_absent_vertex() {
        let graph = path(3);

        assert_eq!(graph.degree(&99), 0);
        assert!(graph.neighbors(&99).is_none());
        assert!(!graph.has_vertex(&99));
    }

    #[test]
    fn test_density() {
        let triangle: Graph<u8> = [(0, 1), (1, 2), (0, 2)].into_iter().collect();
        assert_eq!(triangle.density().unwrap(), 1.0);

        let single = Graph::from_parts([7u8], []);
        assert!(matches!(
            single.density(),
            Err(Error::DensityUndefined { order: 1 })
        ));
    }

    #[test]
    fn test_pop_vertex_strips_edges_keeps_vertex() {
        let mut graph = path(3);

        let popped = graph.pop_vertex_where(|g, v| g.degree(v) > 1);

        assert_eq!(popped, Some(1));
        assert!(graph.has_vertex(&1));
        assert_eq!(graph.neighbors(&1).map(|s| s.len()), Some(0));
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 0);
        assert!(graph.check_invariants());
    }

    #[test]
    fn test_pop_vertex_no_match_is_noop() {
        let mut graph = path(3);
        let before = graph.clone();

        assert_eq!(graph.pop_vertex_where(|g, v| g.degree(v) > 5), None);
        assert_eq!(graph, before);

        let mut empty: Graph<u32> = Graph::new();
        assert_eq!(empty.pop_vertex(), None);
    }

    #[test]
    fn test_pop_until_empty() {
        let mut graph: Graph<u32> = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)].into_iter().collect();
        let order = graph.order();
        let mut popped = 0;

        while let Some(v) = graph.pop_vertex() {
            assert_eq!(graph.degree(&v), 0);
            assert!(graph.edges().all(|e| !e.is_incident(&v)));
            graph.remove_vertex(&v);
            popped += 1;
        }

        assert_eq!(popped, order);
        assert!(graph.is_empty());
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Graph::from_parts([1, 2, 3], [(1, 2)]);
        let b = Graph::from_parts([3, 2, 1], [(2, 1)]);
        let c = Graph::from_parts([1, 2, 3], [(2, 3)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_subgraph_order() {
        let small = path(2);
        let big = path(3);
        let other: Graph<u32> = [(5, 6)].into_iter().collect();

        assert!(small.is_subgraph(&big));
        assert!(big.is_supergraph(&small));
        assert!(small < big);
        assert!(big >= small);
        assert_eq!(small.partial_cmp(&other), None);
        assert_eq!(big.partial_cmp(&big.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut graph = Graph::from_parts(["c", "a", "b"], []);
        graph.remove_vertex(&"a");
        graph.add_vertex("d");

        let order: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(order, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_min_max_degree() {
        let star: Graph<u32> = (1..=4).map(|i| (0, i)).collect();

        assert_eq!(star.max_degree(), Some(4));
        assert_eq!(star.min_degree(), Some(1));
        assert_eq!(Graph::<u32>::new().max_degree(), None);
    }
}
