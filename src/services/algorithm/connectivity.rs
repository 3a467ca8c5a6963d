//! 连通性分析入口
//!
//! 根据图的方向和请求的模式，选择弱连通分量或 Tarjan 强连通分量

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::connected_components::ConnectedComponents;
use super::palette::{self, VertexColor};
use super::strongly_connected_components::StronglyConnectedComponents;
use super::trace::Trace;
use crate::core::{AlgorithmError, AlgorithmKind};
use crate::graph::Graph;

/// 连通性模式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityMode {
    /// 无向图用弱连通，有向图用强连通
    #[default]
    Auto,
    /// 忽略方向的连通分量
    Weak,
    /// 强连通分量（Tarjan）
    Strong,
}

impl ConnectivityMode {
    /// 将 `Auto` 解析为具体模式
    pub fn resolve(self, graph: &Graph) -> ConnectivityMode {
        match self {
            ConnectivityMode::Auto if graph.directed => ConnectivityMode::Strong,
            ConnectivityMode::Auto => ConnectivityMode::Weak,
            other => other,
        }
    }
}

impl fmt::Display for ConnectivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityMode::Auto => write!(f, "auto"),
            ConnectivityMode::Weak => write!(f, "weak"),
            ConnectivityMode::Strong => write!(f, "strong"),
        }
    }
}

/// 连通分量结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentsResult {
    /// 实际使用的模式（不会是 `Auto`）
    pub mode: ConnectivityMode,
    /// 每个分量的顶点，按发现顺序
    pub components: Vec<Vec<String>>,
    pub count: usize,
    /// Tarjan 的 index 值，仅强连通模式
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub index: HashMap<String, usize>,
    /// Tarjan 的 low-link 值，仅强连通模式
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub low_link: HashMap<String, usize>,
    pub coloring: Vec<VertexColor>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl ComponentsResult {
    pub(crate) fn failed(mode: ConnectivityMode, error: AlgorithmError) -> Self {
        Self {
            mode,
            trace: Trace::single(error.to_string()),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }

    /// 顶点所在分量的下标
    pub fn component_of(&self, id: &str) -> Option<usize> {
        self.components
            .iter()
            .position(|component| component.iter().any(|v| v == id))
    }

    /// 按分量下标为每个顶点分配调色板颜色
    pub(crate) fn assign_colors(&mut self) {
        self.coloring = self
            .components
            .iter()
            .enumerate()
            .flat_map(|(i, component)| {
                component
                    .iter()
                    .map(move |id| VertexColor::new(id.clone(), palette::cycled(i)))
            })
            .collect();
    }
}

/// 连通性分析
pub struct Connectivity;

impl Connectivity {
    /// 按模式计算连通分量
    ///
    /// 无向图上显式请求 `Strong` 返回 `NotApplicable`
    pub fn analyze(graph: &Graph, mode: ConnectivityMode) -> ComponentsResult {
        match mode.resolve(graph) {
            ConnectivityMode::Strong if !graph.directed => ComponentsResult::failed(
                ConnectivityMode::Strong,
                AlgorithmError::undirected_not_supported(AlgorithmKind::Components),
            ),
            ConnectivityMode::Strong => StronglyConnectedComponents::find(graph),
            _ => ConnectedComponents::find(graph),
        }
    }
}
