//! 派生图运算
//!
//! 补图、并、交、差、联接、诱导子图、闭包、线图、乘积。
//! 返回新图的运算不修改操作数；`*_with` 系列为原地版本。

use super::edge::Edge;
use super::graph::Graph;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::ops::{Add, BitAnd, BitOr, Mul, Sub};
use tracing::debug;

impl<V: Vertex> Graph<V> {
    // ==================== 集合运算 ====================

    /// 补图：顶点不变，边为所有不相邻的顶点对
    pub fn complement(&self) -> Graph<V> {
        let mut result = Graph::from_parts(self.vertices().cloned(), std::iter::empty());
        let vertices: Vec<&V> = self.vertices().collect();
        for (i, u) in vertices.iter().enumerate() {
            for v in &vertices[i + 1..] {
                if !self.has_edge(u, v) {
                    result.add_edge((*u).clone(), (*v).clone());
                }
            }
        }
        result
    }

    /// 并：顶点集、边集分别取并
    pub fn union(&self, other: &Graph<V>) -> Graph<V> {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// 原地并
    pub fn union_with(&mut self, other: &Graph<V>) {
        self.add_vertices(other.vertices().cloned());
        for e in other.edges() {
            self.insert_edge(e.clone());
        }
    }

    /// 交：顶点集、边集分别取交
    pub fn intersection(&self, other: &Graph<V>) -> Graph<V> {
        let vertices = self.vertices().filter(|v| other.has_vertex(v)).cloned();
        let mut result = Graph::from_parts(vertices, std::iter::empty());
        for e in self.edges().filter(|e| other.edge_set().contains(*e)) {
            result.insert_edge(e.clone());
        }
        result
    }

    /// 原地交
    pub fn intersect_with(&mut self, other: &Graph<V>) {
        let dropped_edges: Vec<Edge<V>> = self
            .edges()
            .filter(|e| !other.edge_set().contains(*e))
            .cloned()
            .collect();
        for e in dropped_edges {
            let (u, v) = e.endpoints();
            self.remove_edge(u, v);
        }
        let dropped_vertices: Vec<V> = self
            .vertices()
            .filter(|v| !other.has_vertex(v))
            .cloned()
            .collect();
        self.remove_vertices(dropped_vertices.iter());
    }

    /// 差：从副本中删除 `other` 的每个顶点（及关联边）
    ///
    /// `other` 中不属于本图的顶点被忽略。
    pub fn difference(&self, other: &Graph<V>) -> Graph<V> {
        self.without_vertices(other.vertices())
    }

    /// 删除一组顶点后的副本
    pub fn without_vertices<'a, I>(&self, vertices: I) -> Graph<V>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut result = self.clone();
        result.remove_vertices(vertices);
        result
    }

    /// 原地删除一组顶点
    pub fn remove_vertices<'a, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        for v in vertices {
            self.remove_vertex(v);
        }
    }

    /// 联接：并，再加上两图之间所有的跨图顶点对
    pub fn join(&self, other: &Graph<V>) -> Graph<V> {
        let mut result = self.clone();
        result.join_with(other);
        result
    }

    /// 原地联接
    pub fn join_with(&mut self, other: &Graph<V>) {
        let left: Vec<V> = self.vertices().cloned().collect();
        self.union_with(other);
        for u in &left {
            for v in other.vertices() {
                self.add_edge(u.clone(), v.clone());
            }
        }
    }

    /// 加入一组孤立顶点后的副本（右操作数不是图时的 `+`）
    pub fn with_vertices<I>(&self, vertices: I) -> Graph<V>
    where
        I: IntoIterator<Item = V>,
    {
        let mut result = self.clone();
        result.add_vertices(vertices);
        result
    }

    /// 原地加入一组顶点
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    // ==================== 子图 ====================

    /// 顶点诱导子图
    ///
    /// `vertices` 必须是本图顶点集的子集，否则返回 [`Error::VerticesNotSubset`]。
    pub fn induced_subgraph<I>(&self, vertices: I) -> Result<Graph<V>>
    where
        I: IntoIterator<Item = V>,
    {
        let keep: IndexSet<V> = vertices.into_iter().collect();
        let missing = keep.iter().filter(|v| !self.has_vertex(v)).count();
        if missing > 0 {
            return Err(Error::VerticesNotSubset { missing });
        }

        let mut result = Graph::from_parts(
            self.vertices().filter(|v| keep.contains(*v)).cloned(),
            std::iter::empty(),
        );
        for e in self.edges() {
            let (u, v) = e.endpoints();
            if keep.contains(u) && keep.contains(v) {
                result.insert_edge(e.clone());
            }
        }
        Ok(result)
    }

    /// 边诱导子图：给定的边及其全部端点
    ///
    /// `edges` 必须是本图边集的子集，否则返回 [`Error::EdgesNotSubset`]。
    pub fn edge_induced_subgraph<I>(&self, edges: I) -> Result<Graph<V>>
    where
        I: IntoIterator<Item = Edge<V>>,
    {
        let keep: IndexSet<Edge<V>> = edges.into_iter().collect();
        let missing = keep
            .iter()
            .filter(|e| !self.edge_set().contains(*e))
            .count();
        if missing > 0 {
            return Err(Error::EdgesNotSubset { missing });
        }
        Ok(Graph::from_edges(keep))
    }

    // ==================== 派生结构 ====================

    /// Bondy-Chvátal 闭包
    ///
    /// 反复连接度数之和不小于原图阶 `n` 的不相邻顶点对，直到不动点。
    /// 每轮严格增加边数，边数上界为 `C(n, 2)`，因此必然终止。
    pub fn closure(&self) -> Graph<V> {
        let n = self.order();
        let mut result = self.clone();
        let mut rounds = 0usize;

        loop {
            let vertices: Vec<&V> = result.vertices().collect();
            let mut pairs: Vec<(V, V)> = Vec::new();
            for (i, u) in vertices.iter().enumerate() {
                for v in &vertices[i + 1..] {
                    if !result.has_edge(u, v) && result.degree(u) + result.degree(v) >= n {
                        pairs.push(((*u).clone(), (*v).clone()));
                    }
                }
            }
            if pairs.is_empty() {
                break;
            }

            rounds += 1;
            for (u, v) in pairs {
                result.add_edge(u, v);
            }
        }

        debug!(
            order = n,
            rounds,
            added = result.size() - self.size(),
            "closure reached fixed point"
        );
        result
    }

    /// 线图：顶点为原图的边，两条边共享端点时相邻
    pub fn line_graph(&self) -> Graph<Edge<V>> {
        let mut result = Graph::from_parts(self.edges().cloned(), std::iter::empty());
        for v in self.vertices() {
            let incident: Vec<Edge<V>> = self
                .neighbors(v)
                .into_iter()
                .flatten()
                .filter_map(|u| Edge::new(v.clone(), u.clone()))
                .collect();
            for (i, e) in incident.iter().enumerate() {
                for f in &incident[i + 1..] {
                    result.add_edge(e.clone(), f.clone());
                }
            }
        }
        result
    }

    /// 笛卡尔积（每次只在一个因子中移动）
    ///
    /// `(u, v)` 与 `(x, y)` 相邻当且仅当 `u == x` 且 `other` 中 `v-y` 相邻，
    /// 或 `v == y` 且本图中 `u-x` 相邻。
    pub fn cartesian_branch_product<W: Vertex>(&self, other: &Graph<W>) -> Graph<(V, W)> {
        let mut result = Graph::new();
        for g in self.vertices() {
            for h in other.vertices() {
                result.add_vertex((g.clone(), h.clone()));
            }
        }
        for g in self.vertices() {
            for e in other.edges() {
                let (a, b) = e.endpoints();
                result.add_edge((g.clone(), a.clone()), (g.clone(), b.clone()));
            }
        }
        for h in other.vertices() {
            for e in self.edges() {
                let (a, b) = e.endpoints();
                result.add_edge((a.clone(), h.clone()), (b.clone(), h.clone()));
            }
        }
        result
    }
}

impl<V: Vertex> BitOr<&Graph<V>> for &Graph<V> {
    type Output = Graph<V>;

    fn bitor(self, rhs: &Graph<V>) -> Graph<V> {
        self.union(rhs)
    }
}

impl<V: Vertex> BitAnd<&Graph<V>> for &Graph<V> {
    type Output = Graph<V>;

    fn bitand(self, rhs: &Graph<V>) -> Graph<V> {
        self.intersection(rhs)
    }
}

impl<V: Vertex> Sub<&Graph<V>> for &Graph<V> {
    type Output = Graph<V>;

    fn sub(self, rhs: &Graph<V>) -> Graph<V> {
        self.difference(rhs)
    }
}

impl<V: Vertex> Add<&Graph<V>> for &Graph<V> {
    type Output = Graph<V>;

    fn add(self, rhs: &Graph<V>) -> Graph<V> {
        self.join(rhs)
    }
}

impl<V: Vertex, W: Vertex> Mul<&Graph<W>> for &Graph<V> {
    type Output = Graph<(V, W)>;

    fn mul(self, rhs: &Graph<W>) -> Graph<(V, W)> {
        self.cartesian_branch_product(rhs)
    }
}
