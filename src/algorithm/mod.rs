//! 图算法模块
//!
//! 包含贪心极大独立集和精确最大独立集搜索

mod exact;
mod greedy;
mod validate;

pub use exact::{
    max_independent_set, maximum_independent_set, ExactSolver, SearchOutcome, SolverConfig,
};
pub use greedy::{greedy_mis, greedy_mis_by_key};
pub use validate::{is_independent_set, is_maximal_independent_set};
