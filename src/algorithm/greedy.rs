//! 贪心极大独立集
//!
//! 线性时间构造一个极大（不一定最大）独立集

use crate::graph::{Graph, Vertex};
use indexmap::IndexSet;

/// 按插入顺序遍历顶点构造极大独立集
///
/// 顶点 `v` 当且仅当已选集合中没有它的邻居时被选入。
/// 结果的大小依赖遍历顺序；这里固定为图的插入顺序，因此结果可复现。
pub fn greedy_mis<V: Vertex>(graph: &Graph<V>) -> IndexSet<V> {
    greedy_mis_in_order(graph, graph.vertices())
}

/// 先按 `key` 排序再贪心选取
///
/// 例如以度数为键得到"最小度优先"启发式，通常比插入顺序得到更大的集合。
/// 排序是稳定的，相同键的顶点保持插入顺序。
pub fn greedy_mis_by_key<V, K, F>(graph: &Graph<V>, mut key: F) -> IndexSet<V>
where
    V: Vertex,
    K: Ord,
    F: FnMut(&Graph<V>, &V) -> K,
{
    let mut order: Vec<&V> = graph.vertices().collect();
    order.sort_by_cached_key(|v| key(graph, *v));
    greedy_mis_in_order(graph, order)
}

fn greedy_mis_in_order<'a, V, I>(graph: &Graph<V>, order: I) -> IndexSet<V>
where
    V: Vertex + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut chosen = IndexSet::new();
    for v in order {
        let blocked = graph
            .neighbors(v)
            .map(|ns| ns.iter().any(|u| chosen.contains(u)))
            .unwrap_or(false);
        if !blocked {
            chosen.insert(v.clone());
        }
    }
    chosen
}
