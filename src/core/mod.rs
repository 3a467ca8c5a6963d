pub mod algorithm_kind;
pub mod error;

// 错误类型
pub use error::{AlgorithmError, GraphError, GraphResult, VertexRole};

// 算法标签
pub use algorithm_kind::AlgorithmKind;
