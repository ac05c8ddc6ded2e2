//! 精确最大独立集
//!
//! 二分支归约搜索：任选度数大于 1 的顶点 v，
//! - 不选 v：剥离 v 的关联边并删除 v 后递归
//! - 选 v：删除 v 及其全部邻居后递归，结果加 1
//!
//! 取两支的较大值。最坏情况下运行时间随顶点数指数增长，只适用于小图或稀疏图；
//! 需要有界延迟时用 [`SolverConfig`] 设置深度或时间上限，此时结果是一个下界。

use super::greedy::greedy_mis;
use crate::graph::{Graph, Vertex};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 最大分支深度；超过后用贪心解作为该子问题的下界
    pub max_depth: Option<usize>,
    /// 时间上限（毫秒）；超时后剩余子问题用贪心解作为下界
    pub deadline_ms: Option<u64>,
    /// 并行求解时，前多少层分支交给 rayon 并行
    pub parallel_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            deadline_ms: None,
            parallel_depth: 8,
        }
    }
}

impl SolverConfig {
    /// 设置最大深度
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// 设置时间上限
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = Some(deadline.as_millis() as u64);
        self
    }

    /// 设置并行层数
    pub fn with_parallel_depth(mut self, depth: usize) -> Self {
        self.parallel_depth = depth;
        self
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

/// 搜索结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<V> {
    /// 找到的最大独立集大小（未完成时为下界）
    pub size: usize,
    /// 大小为 `size` 的独立集
    pub witness: IndexSet<V>,
    /// 是否搜索完整（没有触发任何截断）
    pub complete: bool,
    /// 访问的搜索节点数
    pub nodes: u64,
    /// 被截断的子问题数
    pub cutoffs: u64,
    /// 耗时（毫秒）
    pub duration_ms: u64,
}

/// 子问题的解
struct Partial<V> {
    size: usize,
    witness: IndexSet<V>,
}

impl<V: Vertex> Partial<V> {
    fn from_set(witness: IndexSet<V>) -> Self {
        Self {
            size: witness.len(),
            witness,
        }
    }
}

/// 单步归约的结果
enum Step<V> {
    /// 子问题已直接求出
    Solved(Partial<V>),
    /// 需要在 `vertex` 上分支
    Branch {
        vertex: V,
        exclude: Graph<V>,
        include: Graph<V>,
    },
}

/// 精确求解器
#[derive(Debug, Clone, Default)]
pub struct ExactSolver {
    config: SolverConfig,
}

impl ExactSolver {
    /// 创建求解器
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 单线程求解
    pub fn solve<V: Vertex>(&self, graph: &Graph<V>) -> SearchOutcome<V> {
        let search = Search::new(&self.config);
        info!(
            order = graph.order(),
            size = graph.size(),
            "exact search started"
        );
        let partial = search.run(graph.clone(), 0);
        search.finish(partial)
    }

    /// 并行求解
    ///
    /// 前 `parallel_depth` 层的两个分支各自持有图的副本，用 `rayon::join` 并行求解。
    pub fn solve_parallel<V>(&self, graph: &Graph<V>) -> SearchOutcome<V>
    where
        V: Vertex + Send + Sync,
    {
        let search = Search::new(&self.config);
        info!(
            order = graph.order(),
            size = graph.size(),
            parallel_depth = self.config.parallel_depth,
            "parallel exact search started"
        );
        let partial = search.run_parallel(graph.clone(), 0);
        search.finish(partial)
    }
}

/// 一次搜索的共享状态
struct Search<'c> {
    config: &'c SolverConfig,
    started: Instant,
    deadline: Option<Instant>,
    nodes: AtomicU64,
    cutoffs: AtomicU64,
}

impl<'c> Search<'c> {
    fn new(config: &'c SolverConfig) -> Self {
        let started = Instant::now();
        Self {
            config,
            started,
            deadline: config.deadline().and_then(|d| started.checked_add(d)),
            nodes: AtomicU64::new(0),
            cutoffs: AtomicU64::new(0),
        }
    }

    fn run<V: Vertex>(&self, graph: Graph<V>, depth: usize) -> Partial<V> {
        match self.step(graph, depth) {
            Step::Solved(partial) => partial,
            Step::Branch {
                vertex,
                exclude,
                include,
            } => {
                let without = self.run(exclude, depth + 1);
                let with = self.run(include, depth + 1);
                combine(vertex, without, with)
            }
        }
    }

    fn run_parallel<V>(&self, graph: Graph<V>, depth: usize) -> Partial<V>
    where
        V: Vertex + Send + Sync,
    {
        if depth >= self.config.parallel_depth {
            return self.run(graph, depth);
        }
        match self.step(graph, depth) {
            Step::Solved(partial) => partial,
            Step::Branch {
                vertex,
                exclude,
                include,
            } => {
                let (without, with) = rayon::join(
                    || self.run_parallel(exclude, depth + 1),
                    || self.run_parallel(include, depth + 1),
                );
                combine(vertex, without, with)
            }
        }
    }

    fn step<V: Vertex>(&self, mut graph: Graph<V>, depth: usize) -> Step<V> {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        // 无边：所有顶点都独立
        if graph.size() == 0 {
            let witness = graph.vertices().cloned().collect();
            return Step::Solved(Partial::from_set(witness));
        }

        let Some(vertex) = graph.vertices().find(|v| graph.degree(v) > 1).cloned() else {
            return Step::Solved(solve_matching(&graph));
        };

        if self.should_cut(depth) {
            self.cutoffs.fetch_add(1, Ordering::Relaxed);
            trace!(depth, order = graph.order(), "subproblem cut off");
            return Step::Solved(Partial::from_set(greedy_mis(&graph)));
        }

        // 必须在剥离边之前取邻居快照，之后 v 的邻居集合为空
        let neighbors = graph.neighbors(&vertex).cloned().unwrap_or_default();
        let popped = graph.pop_vertex_where(|g, v| g.degree(v) > 1);
        debug_assert_eq!(popped.as_ref(), Some(&vertex));
        // 剥离后 v 成为孤立顶点，不删除会被基例计入
        graph.remove_vertex(&vertex);

        let include = graph.without_vertices(neighbors.iter().chain(std::iter::once(&vertex)));
        Step::Branch {
            vertex,
            exclude: graph,
            include,
        }
    }

    fn should_cut(&self, depth: usize) -> bool {
        if let Some(max_depth) = self.config.max_depth {
            if depth >= max_depth {
                return true;
            }
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    fn finish<V: Vertex>(&self, partial: Partial<V>) -> SearchOutcome<V> {
        let nodes = self.nodes.load(Ordering::Relaxed);
        let cutoffs = self.cutoffs.load(Ordering::Relaxed);
        let duration_ms = self.started.elapsed().as_millis() as u64;

        if cutoffs > 0 {
            warn!(
                cutoffs,
                lower_bound = partial.size,
                "exact search was cut off, result is a lower bound"
            );
        }
        info!(
            size = partial.size,
            nodes,
            duration_ms,
            "exact search finished"
        );

        SearchOutcome {
            size: partial.size,
            witness: partial.witness,
            complete: cutoffs == 0,
            nodes,
            cutoffs,
            duration_ms,
        }
    }
}

/// 所有顶点度数不超过 1：图是若干条互不相交的边加孤立顶点
///
/// 每条边取一个端点，加上全部孤立顶点，大小为 `order - size`。
fn solve_matching<V: Vertex>(graph: &Graph<V>) -> Partial<V> {
    let dropped: IndexSet<&V> = graph.edges().map(|e| e.endpoints().1).collect();
    let witness: IndexSet<V> = graph
        .vertices()
        .filter(|v| !dropped.contains(v))
        .cloned()
        .collect();
    debug_assert_eq!(witness.len(), graph.order() - graph.size());
    debug!(
        edges = graph.size(),
        size = witness.len(),
        "matching reduced in closed form"
    );
    Partial::from_set(witness)
}

fn combine<V: Vertex>(vertex: V, without: Partial<V>, with: Partial<V>) -> Partial<V> {
    if with.size + 1 > without.size {
        let mut witness = with.witness;
        witness.insert(vertex);
        Partial {
            size: with.size + 1,
            witness,
        }
    } else {
        without
    }
}

/// 最大独立集的大小（完整搜索）
pub fn max_independent_set<V: Vertex>(graph: &Graph<V>) -> usize {
    ExactSolver::default().solve(graph).size
}

/// 一个最大独立集（完整搜索）
pub fn maximum_independent_set<V: Vertex>(graph: &Graph<V>) -> IndexSet<V> {
    ExactSolver::default().solve(graph).witness
}
