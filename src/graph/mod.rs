//! 图核心模块
//!
//! 定义顶点约束、无向边、邻接索引和图代数

mod edge;
mod graph;
mod index;
mod ops;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use index::AdjacencyIndex;
pub use vertex::Vertex;
