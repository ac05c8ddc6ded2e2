//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点集不是图的子集: {missing} 个顶点不在图中")]
    VerticesNotSubset { missing: usize },

    #[error("边集不是图的子集: {missing} 条边不在图中")]
    EdgesNotSubset { missing: usize },

    #[error("密度未定义: 图的阶为 {order}，至少需要 2 个顶点")]
    DensityUndefined { order: usize },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("无效配置: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
