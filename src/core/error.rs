//! 统一错误处理 for GraphLab
//!
//! ## 设计理念
//!
//! 1. **算法错误是结果的一部分**：`AlgorithmError` 嵌入每个算法结果中，
//!    同时在 trace 中留下一行说明，算法边界上不会 panic 也不会返回 `Err`
//! 2. **图编辑错误走 `Result`**：`GraphError` 用于图的编辑与 JSON 读写，
//!    通过 `GraphResult<T>` 传播
//! 3. **区分"无结果"与"非法输入"**：找不到路径、图不连通等属于合法结果，
//!    不进入错误枚举

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::AlgorithmKind;

/// 算法参数中顶点所扮演的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexRole {
    /// 起始顶点
    Start,
    /// 目标顶点
    Goal,
    /// 旅行商问题的出发城市
    City,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Start => write!(f, "start"),
            VertexRole::Goal => write!(f, "goal"),
            VertexRole::City => write!(f, "starting city"),
        }
    }
}

/// 算法执行错误
///
/// 只表示非法输入；"没有路径" 之类的合法结果不属于这里
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmError {
    #[error("{role} vertex not found: {id}")]
    VertexNotFound { role: VertexRole, id: String },

    #[error("{algorithm} does not apply to this graph: {reason}")]
    NotApplicable {
        algorithm: AlgorithmKind,
        reason: String,
    },

    #[error("graph needs at least {required} vertices, found {found}")]
    TooFewVertices { required: usize, found: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl AlgorithmError {
    pub fn vertex_not_found(role: VertexRole, id: impl Into<String>) -> Self {
        AlgorithmError::VertexNotFound {
            role,
            id: id.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        AlgorithmError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// 算法不适用于有向图
    pub fn directed_not_supported(algorithm: AlgorithmKind) -> Self {
        AlgorithmError::NotApplicable {
            algorithm,
            reason: "only undirected graphs are supported".to_string(),
        }
    }

    /// 算法不适用于无向图
    pub fn undirected_not_supported(algorithm: AlgorithmKind) -> Self {
        AlgorithmError::NotApplicable {
            algorithm,
            reason: "only directed graphs are supported".to_string(),
        }
    }
}

/// 图编辑与读写错误
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("edge already exists: {origin} -> {destination}")]
    DuplicateEdge { origin: String, destination: String },

    #[error("edge not found: {origin} -> {destination}")]
    EdgeNotFound { origin: String, destination: String },

    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 图操作结果类型
pub type GraphResult<T> = Result<T, GraphError>;
