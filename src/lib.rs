//! IndependentSet - 无向简单图代数与独立集搜索
//!
//! 把无向简单图当作代数值处理，支持：
//! - 集合式组合：并、交、差、联接、补图、乘积、诱导子图
//! - 派生结构：Bondy-Chvátal 闭包、线图
//! - 贪心极大独立集（线性时间）
//! - 精确最大独立集（指数时间的二分支归约搜索，可设截断和并行）
//!
//! ```
//! use independentset::algorithm::{greedy_mis, max_independent_set};
//! use independentset::Graph;
//!
//! let path: Graph<char> = [('a', 'b'), ('b', 'c'), ('c', 'd')].into_iter().collect();
//! assert_eq!(max_independent_set(&path), 2);
//! assert_eq!(greedy_mis(&path).len(), 2);
//! ```

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{ExactSolver, SearchOutcome, SolverConfig};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use import::{EdgeListImporter, ImportStats, InputFormat};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
