//! 算法调度
//!
//! 以带标签的请求/结果枚举统一调用所有算法

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::algorithm::{
    AStar, AStarResult, Bfs, ComponentsResult, Connectivity, ConnectivityMode, CutAnalysis,
    CutAnalysisResult, Dfs, DfsResult, GeneticConfig, GeneticResult, GeneticTsp, MstResult,
    Planarity, PlanarityReport, Prim, TraversalResult, VertexColor, WelshPowell,
};
use super::algorithm::{ColoringResult, Trace};
use crate::core::{AlgorithmError, AlgorithmKind};
use crate::graph::{Edge, Graph};

/// 构造请求时缺少参数
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("{algorithm} requires a {parameter} vertex")]
    MissingParameter {
        algorithm: AlgorithmKind,
        parameter: &'static str,
    },
}

/// 算法请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmRequest {
    Bfs {
        start: String,
    },
    Dfs {
        start: String,
    },
    Prim {
        start: String,
    },
    #[serde(rename = "astar")]
    AStar {
        start: String,
        goal: String,
    },
    Components {
        #[serde(default)]
        mode: ConnectivityMode,
    },
    CutAnalysis,
    Planarity,
    WelshPowell,
    Genetic {
        start: String,
        #[serde(default)]
        config: GeneticConfig,
    },
}

impl AlgorithmRequest {
    /// 由算法种类和可选参数组装请求
    ///
    /// 不需要的参数会被忽略
    pub fn from_parts(
        kind: AlgorithmKind,
        start: Option<String>,
        goal: Option<String>,
        mode: ConnectivityMode,
        genetic: GeneticConfig,
    ) -> Result<Self, RequestError> {
        let require = |value: Option<String>, parameter: &'static str| {
            value.ok_or(RequestError::MissingParameter {
                algorithm: kind,
                parameter,
            })
        };

        Ok(match kind {
            AlgorithmKind::Bfs => AlgorithmRequest::Bfs {
                start: require(start, "start")?,
            },
            AlgorithmKind::Dfs => AlgorithmRequest::Dfs {
                start: require(start, "start")?,
            },
            AlgorithmKind::Prim => AlgorithmRequest::Prim {
                start: require(start, "start")?,
            },
            AlgorithmKind::AStar => AlgorithmRequest::AStar {
                start: require(start, "start")?,
                goal: require(goal, "goal")?,
            },
            AlgorithmKind::Components => AlgorithmRequest::Components { mode },
            AlgorithmKind::CutAnalysis => AlgorithmRequest::CutAnalysis,
            AlgorithmKind::Planarity => AlgorithmRequest::Planarity,
            AlgorithmKind::WelshPowell => AlgorithmRequest::WelshPowell,
            AlgorithmKind::Genetic => AlgorithmRequest::Genetic {
                start: require(start, "start")?,
                config: genetic,
            },
        })
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmRequest::Bfs { .. } => AlgorithmKind::Bfs,
            AlgorithmRequest::Dfs { .. } => AlgorithmKind::Dfs,
            AlgorithmRequest::Prim { .. } => AlgorithmKind::Prim,
            AlgorithmRequest::AStar { .. } => AlgorithmKind::AStar,
            AlgorithmRequest::Components { .. } => AlgorithmKind::Components,
            AlgorithmRequest::CutAnalysis => AlgorithmKind::CutAnalysis,
            AlgorithmRequest::Planarity => AlgorithmKind::Planarity,
            AlgorithmRequest::WelshPowell => AlgorithmKind::WelshPowell,
            AlgorithmRequest::Genetic { .. } => AlgorithmKind::Genetic,
        }
    }
}

/// 算法结果
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmOutput {
    Bfs(TraversalResult),
    Dfs(DfsResult),
    Prim(MstResult),
    #[serde(rename = "astar")]
    AStar(AStarResult),
    Components(ComponentsResult),
    CutAnalysis(CutAnalysisResult),
    Planarity(PlanarityReport),
    WelshPowell(ColoringResult),
    Genetic(GeneticResult),
}

impl AlgorithmOutput {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmOutput::Bfs(_) => AlgorithmKind::Bfs,
            AlgorithmOutput::Dfs(_) => AlgorithmKind::Dfs,
            AlgorithmOutput::Prim(_) => AlgorithmKind::Prim,
            AlgorithmOutput::AStar(_) => AlgorithmKind::AStar,
            AlgorithmOutput::Components(_) => AlgorithmKind::Components,
            AlgorithmOutput::CutAnalysis(_) => AlgorithmKind::CutAnalysis,
            AlgorithmOutput::Planarity(_) => AlgorithmKind::Planarity,
            AlgorithmOutput::WelshPowell(_) => AlgorithmKind::WelshPowell,
            AlgorithmOutput::Genetic(_) => AlgorithmKind::Genetic,
        }
    }

    pub fn trace(&self) -> &Trace {
        match self {
            AlgorithmOutput::Bfs(r) => &r.trace,
            AlgorithmOutput::Dfs(r) => &r.traversal.trace,
            AlgorithmOutput::Prim(r) => &r.trace,
            AlgorithmOutput::AStar(r) => &r.trace,
            AlgorithmOutput::Components(r) => &r.trace,
            AlgorithmOutput::CutAnalysis(r) => &r.trace,
            AlgorithmOutput::Planarity(r) => &r.trace,
            AlgorithmOutput::WelshPowell(r) => &r.trace,
            AlgorithmOutput::Genetic(r) => &r.trace,
        }
    }

    pub fn error(&self) -> Option<&AlgorithmError> {
        match self {
            AlgorithmOutput::Bfs(r) => r.error.as_ref(),
            AlgorithmOutput::Dfs(r) => r.traversal.error.as_ref(),
            AlgorithmOutput::Prim(r) => r.error.as_ref(),
            AlgorithmOutput::AStar(r) => r.error.as_ref(),
            AlgorithmOutput::Components(r) => r.error.as_ref(),
            AlgorithmOutput::CutAnalysis(r) => r.error.as_ref(),
            AlgorithmOutput::Planarity(r) => r.error.as_ref(),
            AlgorithmOutput::WelshPowell(r) => r.error.as_ref(),
            AlgorithmOutput::Genetic(r) => r.error.as_ref(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }

    /// 需要高亮绘制的边：遍历树、生成树、路径、桥或最优路线
    pub fn highlighted_edges(&self) -> &[Edge] {
        match self {
            AlgorithmOutput::Bfs(r) => &r.tree_edges,
            AlgorithmOutput::Dfs(r) => &r.traversal.tree_edges,
            AlgorithmOutput::Prim(r) => &r.edges,
            AlgorithmOutput::AStar(r) => &r.path_edges,
            AlgorithmOutput::CutAnalysis(r) => &r.bridges,
            AlgorithmOutput::Genetic(r) => &r.route_edges,
            AlgorithmOutput::Components(_)
            | AlgorithmOutput::Planarity(_)
            | AlgorithmOutput::WelshPowell(_) => &[],
        }
    }

    /// 顶点着色；遍历类和 Prim 没有着色
    pub fn vertex_colors(&self) -> &[VertexColor] {
        match self {
            AlgorithmOutput::AStar(r) => &r.coloring,
            AlgorithmOutput::Components(r) => &r.coloring,
            AlgorithmOutput::CutAnalysis(r) => &r.coloring,
            AlgorithmOutput::Planarity(r) => &r.coloring,
            AlgorithmOutput::WelshPowell(r) => &r.coloring,
            AlgorithmOutput::Genetic(r) => &r.coloring,
            AlgorithmOutput::Bfs(_) | AlgorithmOutput::Dfs(_) | AlgorithmOutput::Prim(_) => &[],
        }
    }
}

/// 执行一个算法请求
pub fn run(graph: &Graph, request: &AlgorithmRequest) -> AlgorithmOutput {
    log::info!(
        "running {} on a {} graph with {} vertices",
        request.kind(),
        graph.orientation_label(),
        graph.vertex_count()
    );

    let output = match request {
        AlgorithmRequest::Bfs { start } => AlgorithmOutput::Bfs(Bfs::run(graph, start)),
        AlgorithmRequest::Dfs { start } => AlgorithmOutput::Dfs(Dfs::run(graph, start)),
        AlgorithmRequest::Prim { start } => AlgorithmOutput::Prim(Prim::run(graph, start)),
        AlgorithmRequest::AStar { start, goal } => {
            AlgorithmOutput::AStar(AStar::run(graph, start, goal))
        }
        AlgorithmRequest::Components { mode } => {
            AlgorithmOutput::Components(Connectivity::analyze(graph, *mode))
        }
        AlgorithmRequest::CutAnalysis => AlgorithmOutput::CutAnalysis(CutAnalysis::run(graph)),
        AlgorithmRequest::Planarity => AlgorithmOutput::Planarity(Planarity::check(graph)),
        AlgorithmRequest::WelshPowell => AlgorithmOutput::WelshPowell(WelshPowell::run(graph)),
        AlgorithmRequest::Genetic { start, config } => {
            AlgorithmOutput::Genetic(GeneticTsp::run(graph, start, config))
        }
    };

    if let Some(error) = output.error() {
        log::warn!("{} finished with an error: {}", request.kind(), error);
    }
    output
}
