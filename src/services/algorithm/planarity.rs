//! 平面性检测模块
//!
//! 依次做三项检查：顶点数不超过 4、欧拉上界 `E <= 3V - 6`、穷举 K5 与 K3,3 子图。
//! 属于教学用的启发式，只检测完全出现的 K5/K3,3，不检测其细分

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::palette::{self, VertexColor};
use super::trace::{braced, Trace};
use crate::core::{AlgorithmError, AlgorithmKind};
use crate::graph::Graph;

/// 判定依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanarityReason {
    /// 不超过 4 个顶点
    #[default]
    FewVertices,
    /// 边数超过欧拉上界
    EulerBound,
    ContainsK5,
    ContainsK33,
    /// 通过了全部检查
    AllChecksPassed,
}

impl fmt::Display for PlanarityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarityReason::FewVertices => write!(f, "at most 4 vertices"),
            PlanarityReason::EulerBound => write!(f, "exceeds the Euler bound"),
            PlanarityReason::ContainsK5 => write!(f, "contains K5"),
            PlanarityReason::ContainsK33 => write!(f, "contains K3,3"),
            PlanarityReason::AllChecksPassed => write!(f, "all checks passed"),
        }
    }
}

/// 欧拉公式相关的数值
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EulerCheck {
    pub vertices: usize,
    pub edges: usize,
    /// `2 + E - V`
    pub faces: i64,
    /// `3V - 6`
    pub bound: i64,
    pub passes: bool,
    pub formula: String,
}

impl EulerCheck {
    fn new(vertices: usize, edges: usize) -> Self {
        let (v, e) = (vertices as i64, edges as i64);
        let faces = 2 + e - v;
        let bound = 3 * v - 6;
        Self {
            vertices,
            edges,
            faces,
            bound,
            passes: vertices < 3 || e <= bound,
            formula: format!("{} - {} + F = 2, F = {}", v, e, faces),
        }
    }
}

/// 平面性报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanarityReport {
    pub planar: bool,
    pub euler: EulerCheck,
    /// 找到的 K5 顶点
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k5: Option<Vec<String>>,
    /// 找到的 K3,3 两组顶点
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k33: Option<(Vec<String>, Vec<String>)>,
    pub degrees: HashMap<String, usize>,
    pub reason: PlanarityReason,
    pub coloring: Vec<VertexColor>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl PlanarityReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 忽略方向的邻接矩阵，依据边表建立
struct AdjacencyMatrix {
    cells: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut cells = vec![vec![false; n]; n];
        for edge in &graph.edges {
            if let (Some(a), Some(b)) = (
                graph.index_of(&edge.origin),
                graph.index_of(&edge.destination),
            ) {
                cells[a][b] = true;
                cells[b][a] = true;
            }
        }
        Self { cells }
    }

    fn adjacent(&self, a: usize, b: usize) -> bool {
        self.cells[a][b]
    }

    fn is_complete(&self, set: &[usize]) -> bool {
        set.iter()
            .enumerate()
            .all(|(i, &a)| set[i + 1..].iter().all(|&b| self.adjacent(a, b)))
    }

    fn is_complete_bipartite(&self, left: &[usize], right: &[usize]) -> bool {
        left.iter()
            .all(|&a| right.iter().all(|&b| self.adjacent(a, b)))
    }
}

/// 平面性检测
pub struct Planarity;

impl Planarity {
    /// 检测无向图是否平面
    pub fn check(graph: &Graph) -> PlanarityReport {
        if graph.directed {
            let error = AlgorithmError::directed_not_supported(AlgorithmKind::Planarity);
            return PlanarityReport {
                trace: Trace::single(error.to_string()),
                error: Some(error),
                ..Default::default()
            };
        }

        let v = graph.vertex_count();
        let e = graph.edge_count();
        let mut report = PlanarityReport {
            euler: EulerCheck::new(v, e),
            degrees: graph
                .vertices
                .iter()
                .map(|vertex| (vertex.id.clone(), vertex.degree()))
                .collect(),
            ..Default::default()
        };

        let trace = &mut report.trace;
        trace.push("=== PLANARITY CHECK ===");
        trace.push(format!("Vertices: {}", v));
        trace.push(format!("Edges: {}", e));
        trace.blank();
        trace.push("Vertex degrees:");
        for vertex in &graph.vertices {
            trace.push(format!("   {}: degree {}", vertex.id, vertex.degree()));
        }
        trace.blank();

        report.planar = Self::decide(graph, &mut report);
        report.coloring = graph
            .vertices
            .iter()
            .map(|vertex| {
                let color = if report.planar { palette::GREEN } else { palette::RED };
                VertexColor::new(vertex.id.clone(), color)
            })
            .collect();

        report.trace.blank();
        report.trace.push(format!(
            "Result: {} ({})",
            if report.planar { "PLANAR" } else { "NOT PLANAR" },
            report.reason
        ));

        log::debug!("planarity: planar={} reason={}", report.planar, report.reason);
        report
    }

    fn decide(graph: &Graph, report: &mut PlanarityReport) -> bool {
        let v = graph.vertex_count();
        let trace = &mut report.trace;

        if v <= 4 {
            trace.push(format!("A graph with {} vertices is always planar", v));
            report.reason = PlanarityReason::FewVertices;
            return true;
        }

        let euler = &report.euler;
        trace.push("Euler's formula: V - E + F = 2");
        trace.push(format!("   V = {}, E = {}", euler.vertices, euler.edges));
        trace.push(format!(
            "   Maximum edges for a planar graph: E <= 3V - 6 = {}",
            euler.bound
        ));
        trace.push(format!(
            "   {} <= {}: {}",
            euler.edges,
            euler.bound,
            if euler.passes { "PASS" } else { "FAIL" }
        ));
        if !euler.passes {
            report.reason = PlanarityReason::EulerBound;
            return false;
        }

        let matrix = AdjacencyMatrix::new(graph);
        let ids = |set: &[usize]| -> Vec<String> {
            set.iter().map(|&i| graph.vertices[i].id.clone()).collect()
        };

        trace.blank();
        trace.push("Searching for K5 (five pairwise adjacent vertices)...");
        report.k5 = Self::find_k5(&matrix, v).map(|set| ids(&set));
        match &report.k5 {
            Some(set) => trace.push(format!("   K5 found: {}", braced(set))),
            None => trace.push("   no K5"),
        }

        trace.push("Searching for K3,3 (two triples, every cross pair adjacent)...");
        report.k33 = Self::find_k33(&matrix, v).map(|(left, right)| (ids(&left), ids(&right)));
        match &report.k33 {
            Some((left, right)) => {
                trace.push("   K3,3 found:");
                trace.push(format!("     Group 1: {}", braced(left)));
                trace.push(format!("     Group 2: {}", braced(right)));
            }
            None => trace.push("   no K3,3"),
        }

        if report.k5.is_some() {
            report.reason = PlanarityReason::ContainsK5;
            false
        } else if report.k33.is_some() {
            report.reason = PlanarityReason::ContainsK33;
            false
        } else {
            report.reason = PlanarityReason::AllChecksPassed;
            true
        }
    }

    fn find_k5(matrix: &AdjacencyMatrix, n: usize) -> Option<Vec<usize>> {
        let mut found = None;
        for_each_subset(n, 5, &mut |set| {
            if matrix.is_complete(set) {
                found = Some(set.to_vec());
                return true;
            }
            false
        });
        found
    }

    /// 每个 6 元子集按所有方式拆成两组三元组；第一个顶点固定在第一组以避免重复
    fn find_k33(matrix: &AdjacencyMatrix, n: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        let mut found = None;
        for_each_subset(n, 6, &mut |set| {
            for i in 1..6 {
                for j in i + 1..6 {
                    let left = [set[0], set[i], set[j]];
                    let right: Vec<usize> = set
                        .iter()
                        .enumerate()
                        .filter(|(k, _)| *k != 0 && *k != i && *k != j)
                        .map(|(_, &vertex)| vertex)
                        .collect();
                    if matrix.is_complete_bipartite(&left, &right) {
                        found = Some((left.to_vec(), right));
                        return true;
                    }
                }
            }
            false
        });
        found
    }
}

/// 按字典序枚举 `0..n` 的所有 `k` 元子集，回调返回 `true` 时停止
fn for_each_subset(n: usize, k: usize, visit: &mut dyn FnMut(&[usize]) -> bool) {
    if k == 0 || k > n {
        return;
    }
    let mut set: Vec<usize> = (0..k).collect();
    loop {
        if visit(&set) {
            return;
        }
        // 找到最右边还能增加的位置
        let Some(position) = (0..k).rev().find(|&i| set[i] < n - k + i) else {
            return;
        };
        set[position] += 1;
        for i in position + 1..k {
            set[i] = set[i - 1] + 1;
        }
    }
}
