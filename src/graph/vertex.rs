//! 顶点定义
//!
//! 顶点是不透明的标识符，只要求可比较、可哈希、可克隆

use std::fmt::Debug;
use std::hash::Hash;

/// 顶点标识符约束
///
/// `Ord` 用于把无向边规范化为 `(min, max)`，使边的相等与方向无关。
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}
