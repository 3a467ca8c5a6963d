//! 算法种类
//!
//! 作为请求/结果的判别标签，同时供命令行解析使用

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 引擎支持的全部算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// 广度优先搜索
    Bfs,
    /// 深度优先搜索
    Dfs,
    /// Prim 最小生成树
    Prim,
    /// A* 启发式最短路径
    #[value(name = "astar")]
    #[serde(rename = "astar")]
    AStar,
    /// 连通分量 / 强连通分量
    Components,
    /// 桥与割点
    CutAnalysis,
    /// 平面性检测
    Planarity,
    /// Welsh-Powell 着色
    WelshPowell,
    /// 遗传算法求解旅行商问题
    Genetic,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 9] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Prim,
        AlgorithmKind::AStar,
        AlgorithmKind::Components,
        AlgorithmKind::CutAnalysis,
        AlgorithmKind::Planarity,
        AlgorithmKind::WelshPowell,
        AlgorithmKind::Genetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Prim => "prim",
            AlgorithmKind::AStar => "astar",
            AlgorithmKind::Components => "components",
            AlgorithmKind::CutAnalysis => "cut_analysis",
            AlgorithmKind::Planarity => "planarity",
            AlgorithmKind::WelshPowell => "welsh_powell",
            AlgorithmKind::Genetic => "genetic",
        }
    }

    /// 是否需要起始顶点参数
    pub fn needs_start(&self) -> bool {
        matches!(
            self,
            AlgorithmKind::Bfs
                | AlgorithmKind::Dfs
                | AlgorithmKind::Prim
                | AlgorithmKind::AStar
                | AlgorithmKind::Genetic
        )
    }

    /// 是否需要目标顶点参数
    pub fn needs_goal(&self) -> bool {
        matches!(self, AlgorithmKind::AStar)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
