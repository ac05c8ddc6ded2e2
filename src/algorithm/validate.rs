//! 独立集校验

use crate::graph::{Graph, Vertex};
use indexmap::IndexSet;

/// 集合中的顶点都在图中，且两两不相邻
pub fn is_independent_set<V: Vertex>(graph: &Graph<V>, set: &IndexSet<V>) -> bool {
    set.iter().all(|v| {
        graph.has_vertex(v)
            && graph
                .neighbors(v)
                .map(|ns| ns.iter().all(|u| !set.contains(u)))
                .unwrap_or(true)
    })
}

/// 独立，且图中任何集合外的顶点都至少有一个邻居在集合中
pub fn is_maximal_independent_set<V: Vertex>(graph: &Graph<V>, set: &IndexSet<V>) -> bool {
    is_independent_set(graph, set)
        && graph.vertices().filter(|v| !set.contains(*v)).all(|v| {
            graph
                .neighbors(v)
                .map(|ns| ns.iter().any(|u| set.contains(u)))
                .unwrap_or(false)
        })
}
