//! 边定义
//!
//! 无向边：两个不同顶点组成的无序对

use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边
///
/// 端点总是按 `(较小, 较大)` 存储，因此 `Edge::new(u, v) == Edge::new(v, u)`。
/// 反序列化同样经过 [`Edge::new`]：端点会被规范化，自环被拒绝。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    try_from = "RawEdge<V>",
    bound(deserialize = "V: Vertex + Deserialize<'de>")
)]
pub struct Edge<V> {
    /// 较小端点
    lo: V,
    /// 较大端点
    hi: V,
}

impl<V: Vertex> Edge<V> {
    /// 创建规范化的无向边
    ///
    /// 自环（`u == v`）不是合法的边，返回 `None`。
    pub fn new(u: V, v: V) -> Option<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Some(Self { lo: u, hi: v }),
            std::cmp::Ordering::Greater => Some(Self { lo: v, hi: u }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.lo, &self.hi)
    }

    /// 拆分为端点对
    pub fn into_endpoints(self) -> (V, V) {
        (self.lo, self.hi)
    }

    /// 是否以 `v` 为端点
    pub fn is_incident(&self, v: &V) -> bool {
        &self.lo == v || &self.hi == v
    }

    /// 获取 `v` 的另一端点
    pub fn other(&self, v: &V) -> Option<&V> {
        if &self.lo == v {
            Some(&self.hi)
        } else if &self.hi == v {
            Some(&self.lo)
        } else {
            None
        }
    }

    /// 两条边是否共享端点
    pub fn shares_endpoint(&self, other: &Edge<V>) -> bool {
        self.is_incident(&other.lo) || self.is_incident(&other.hi)
    }
}

/// 未经校验的端点对
#[derive(Deserialize)]
struct RawEdge<V> {
    lo: V,
    hi: V,
}

impl<V: Vertex> TryFrom<RawEdge<V>> for Edge<V> {
    type Error = String;

    fn try_from(raw: RawEdge<V>) -> Result<Self, Self::Error> {
        let repr = format!("{:?}", raw.lo);
        Edge::new(raw.lo, raw.hi).ok_or_else(|| format!("self-loop on vertex {}", repr))
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_orientation_independent() {
        let a = Edge::new(3, 1).unwrap();
        let b = Edge::new(1, 3).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.endpoints(), (&1, &3));
        assert_eq!(a.to_string(), "1-3");
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        assert!(Edge::new("a", "a").is_none());
    }

    #[test]
    fn test_edge_incidence() {
        let e = Edge::new('a', 'b').unwrap();
        let f = Edge::new('b', 'c').unwrap();
        let g = Edge::new('c', 'd').unwrap();

        assert_eq!(e.other(&'a'), Some(&'b'));
        assert_eq!(e.other(&'z'), None);
        assert!(e.shares_endpoint(&f));
        assert!(!e.shares_endpoint(&g));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let e: Edge<u32> = serde_json::from_str(r#"{"lo":2,"hi":1}"#).unwrap();

        assert_eq!(e, Edge::new(1, 2).unwrap());
        assert_eq!(e.endpoints(), (&1, &2));
    }

    #[test]
    fn test_deserialize_rejects_self_loop() {
        let result: Result<Edge<u32>, _> = serde_json::from_str(r#"{"lo":4,"hi":4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_edges_keep_graph_invariants() {
        use crate::graph::Graph;

        let mut graph: Graph<u32> = [(1, 2)].into_iter().collect();
        let reversed: Edge<u32> = serde_json::from_str(r#"{"lo":2,"hi":1}"#).unwrap();

        assert!(!graph.insert_edge(reversed));
        assert_eq!(graph.size(), 1);
        assert!(graph.check_invariants());
    }
}
