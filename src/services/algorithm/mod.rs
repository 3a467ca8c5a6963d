//! 算法模块
//!
//! 包含图相关算法实现。每个算法都是纯函数，返回带有逐步 trace 的结果

pub mod astar;
pub mod bfs;
pub mod bridges;
pub mod connected_components;
pub mod connectivity;
pub mod dfs;
pub mod genetic;
pub mod palette;
pub mod planarity;
pub mod prim;
pub mod strongly_connected_components;
pub mod trace;
pub mod welsh_powell;

// 重新导出常用算法结构体
pub use astar::{AStar, AStarResult, SearchOutcome, VertexInfo};
pub use bfs::{Bfs, TraversalResult};
pub use bridges::{CutAnalysis, CutAnalysisResult};
pub use connected_components::ConnectedComponents;
pub use connectivity::{ComponentsResult, Connectivity, ConnectivityMode};
pub use dfs::{Dfs, DfsResult};
pub use genetic::{
    GenerationStats, GeneticConfig, GeneticResult, GeneticTsp, Individual, PENALTY,
};
pub use palette::VertexColor;
pub use planarity::{EulerCheck, Planarity, PlanarityReason, PlanarityReport};
pub use prim::{MstResult, Prim};
pub use strongly_connected_components::StronglyConnectedComponents;
pub use trace::Trace;
pub use welsh_powell::{ColoringResult, WelshPowell};
