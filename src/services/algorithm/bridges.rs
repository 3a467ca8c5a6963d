//! 桥与割点模块
//!
//! 基于 DFS 发现时间和 low 值的 Hopcroft-Tarjan 分析，仅适用于无向图。
//! 分析前先运行平面性检测，报告一并返回

use serde::Serialize;
use std::collections::HashMap;

use super::palette::{self, VertexColor};
use super::planarity::{Planarity, PlanarityReport};
use super::trace::Trace;
use crate::core::{AlgorithmError, AlgorithmKind};
use crate::graph::{Edge, Graph, Neighbor};

/// 桥与割点分析结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct CutAnalysisResult {
    pub bridges: Vec<Edge>,
    /// 割点，按被确认的先后顺序
    pub articulation_points: Vec<String>,
    pub discovery: HashMap<String, usize>,
    pub low: HashMap<String, usize>,
    pub planarity: PlanarityReport,
    /// 割点红色、桥端点琥珀色、其余绿色
    pub coloring: Vec<VertexColor>,
    /// 连通性总结
    pub summary: Vec<String>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl CutAnalysisResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_articulation(&self, id: &str) -> bool {
        self.articulation_points.iter().any(|v| v == id)
    }

    /// 没有桥也没有割点
    pub fn is_biconnected(&self) -> bool {
        self.bridges.is_empty() && self.articulation_points.is_empty()
    }
}

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    /// 从父节点到达本顶点所用的边
    via: Option<usize>,
    neighbors: Vec<Neighbor>,
    cursor: usize,
    children: usize,
}

/// 单次分析的状态
struct CutState {
    time: usize,
    discovery: Vec<Option<usize>>,
    low: Vec<usize>,
    bridges: Vec<usize>,
    articulation: Vec<usize>,
}

impl CutState {
    fn enter(
        &mut self,
        graph: &Graph,
        vertex: usize,
        parent: Option<usize>,
        via: Option<usize>,
        trace: &mut Trace,
    ) -> Frame {
        self.time += 1;
        self.discovery[vertex] = Some(self.time);
        self.low[vertex] = self.time;

        let id = &graph.vertices[vertex].id;
        trace.blank();
        trace.push(format!("Visiting vertex {} (time: {})", id, self.time));
        trace.push(format!("  disc[{}] = low[{}] = {}", id, id, self.time));

        Frame {
            vertex,
            parent,
            via,
            neighbors: graph.neighbors(vertex),
            cursor: 0,
            children: 0,
        }
    }

    fn disc(&self, vertex: usize) -> usize {
        self.discovery[vertex].unwrap_or(0)
    }

    fn mark_articulation(&mut self, vertex: usize) -> bool {
        if self.articulation.contains(&vertex) {
            return false;
        }
        self.articulation.push(vertex);
        true
    }
}

/// 桥与割点分析
pub struct CutAnalysis;

impl CutAnalysis {
    /// 计算无向图的桥与割点
    pub fn run(graph: &Graph) -> CutAnalysisResult {
        if graph.directed {
            let error = AlgorithmError::directed_not_supported(AlgorithmKind::CutAnalysis);
            return CutAnalysisResult {
                trace: Trace::single(error.to_string()),
                error: Some(error),
                ..Default::default()
            };
        }

        let mut result = CutAnalysisResult {
            planarity: Planarity::check(graph),
            ..Default::default()
        };
        let n = graph.vertex_count();
        let mut state = CutState {
            time: 0,
            discovery: vec![None; n],
            low: vec![0; n],
            bridges: Vec::new(),
            articulation: Vec::new(),
        };

        let trace = &mut result.trace;
        trace.push("=== BRIDGES AND ARTICULATION POINTS ===");
        trace.push("Bridge: an edge whose removal disconnects the graph");
        trace.push("Articulation point: a vertex whose removal disconnects the graph");
        trace.push(format!(
            "Planarity: {} ({})",
            if result.planarity.planar { "planar" } else { "not planar" },
            result.planarity.reason
        ));

        for root in 0..n {
            if state.discovery[root].is_some() {
                continue;
            }
            trace.blank();
            trace.push(format!(
                "Starting DFS at {} (new component)",
                graph.vertices[root].id
            ));

            let mut frames = vec![state.enter(graph, root, None, None, trace)];

            while let Some(frame) = frames.last_mut() {
                let u = frame.vertex;

                if let Some(&neighbor) = frame.neighbors.get(frame.cursor) {
                    frame.cursor += 1;
                    let v = neighbor.index;

                    if state.discovery[v].is_none() {
                        frame.children += 1;
                        trace.push(format!(
                            "  -> exploring {} (parent: {})",
                            graph.vertices[v].id, graph.vertices[u].id
                        ));
                        let child = state.enter(graph, v, Some(u), neighbor.edge, trace);
                        frames.push(child);
                    } else if Some(v) != frame.parent {
                        let before = state.low[u];
                        state.low[u] = before.min(state.disc(v));
                        if state.low[u] != before {
                            trace.push(format!(
                                "  back edge {} - {}: low[{}] = min({}, disc[{}]) = {}",
                                graph.vertices[u].id,
                                graph.vertices[v].id,
                                graph.vertices[u].id,
                                before,
                                graph.vertices[v].id,
                                state.low[u]
                            ));
                        }
                    }
                    continue;
                }

                // 顶点 u 处理完毕，回到父节点
                let Some(finished) = frames.pop() else {
                    break;
                };
                let Some(parent_frame) = frames.last() else {
                    continue;
                };
                let (p, v) = (parent_frame.vertex, finished.vertex);
                let parent_is_root = parent_frame.parent.is_none();
                let parent_children = parent_frame.children;

                let before = state.low[p];
                state.low[p] = before.min(state.low[v]);
                if state.low[p] != before {
                    trace.push(format!(
                        "  low[{}] = min({}, {}) = {}",
                        graph.vertices[p].id, before, state.low[v], state.low[p]
                    ));
                }

                if state.low[v] > state.disc(p) {
                    if let Some(edge) = finished.via {
                        state.bridges.push(edge);
                        trace.push(format!(
                            "    BRIDGE: {} - {} (low[{}] = {} > disc[{}] = {})",
                            graph.vertices[p].id,
                            graph.vertices[v].id,
                            graph.vertices[v].id,
                            state.low[v],
                            graph.vertices[p].id,
                            state.disc(p)
                        ));
                    }
                }

                if parent_is_root && parent_children > 1 {
                    if state.mark_articulation(p) {
                        trace.push(format!(
                            "    ARTICULATION (root): {} has {} children",
                            graph.vertices[p].id, parent_children
                        ));
                    }
                } else if !parent_is_root
                    && state.low[v] >= state.disc(p)
                    && state.mark_articulation(p)
                {
                    trace.push(format!(
                        "    ARTICULATION: {} (low[{}] = {} >= disc[{}] = {})",
                        graph.vertices[p].id,
                        graph.vertices[v].id,
                        state.low[v],
                        graph.vertices[p].id,
                        state.disc(p)
                    ));
                }
            }
        }

        result.bridges = state
            .bridges
            .iter()
            .map(|&i| graph.edges[i].clone())
            .collect();
        result.articulation_points = state
            .articulation
            .iter()
            .map(|&i| graph.vertices[i].id.clone())
            .collect();
        for (i, vertex) in graph.vertices.iter().enumerate() {
            if let Some(disc) = state.discovery[i] {
                result.discovery.insert(vertex.id.clone(), disc);
                result.low.insert(vertex.id.clone(), state.low[i]);
            }
        }

        Self::color(graph, &mut result);
        Self::summarize(graph, &mut result);

        log::debug!(
            "cut analysis: {} bridges, {} articulation points",
            result.bridges.len(),
            result.articulation_points.len()
        );
        result
    }

    fn color(graph: &Graph, result: &mut CutAnalysisResult) {
        result.coloring = graph
            .vertices
            .iter()
            .map(|vertex| {
                if result.is_articulation(&vertex.id) {
                    VertexColor::new(vertex.id.clone(), palette::RED).labeled("articulation")
                } else if result.bridges.iter().any(|e| e.touches(&vertex.id)) {
                    VertexColor::new(vertex.id.clone(), palette::AMBER).labeled("bridge endpoint")
                } else {
                    VertexColor::new(vertex.id.clone(), palette::EMERALD).labeled("normal")
                }
            })
            .collect();
    }

    fn summarize(graph: &Graph, result: &mut CutAnalysisResult) {
        let mut summary = Vec::new();
        if result.is_biconnected() {
            summary.push("The graph is 2-connected: no single removal disconnects it".to_string());
        }
        if !result.bridges.is_empty() {
            summary.push("The graph has bridges: removing one disconnects it".to_string());
        }
        if !result.articulation_points.is_empty() {
            summary.push(
                "The graph has articulation points: removing one disconnects it".to_string(),
            );
        }

        let trace = &mut result.trace;
        trace.blank();
        trace.push("=== RESULT ===");
        trace.push(format!("Vertices: {}", graph.vertex_count()));
        trace.push(format!("Edges: {}", graph.edge_count()));
        trace.push(format!("Bridges: {}", result.bridges.len()));
        for (i, bridge) in result.bridges.iter().enumerate() {
            trace.push(format!("   {}. {}", i + 1, bridge));
        }
        trace.push(format!(
            "Articulation points: {}",
            result.articulation_points.len()
        ));
        for (i, id) in result.articulation_points.iter().enumerate() {
            trace.push(format!("   {}. {}", i + 1, id));
        }

        trace.blank();
        trace.push("=== CONNECTIVITY ===");
        for line in &summary {
            trace.push(line.clone());
        }

        trace.blank();
        trace.push("=== DISCOVERY AND LOW ===");
        for vertex in &graph.vertices {
            trace.push(format!(
                "{}: disc={}, low={}",
                vertex.id,
                result.discovery.get(&vertex.id).copied().unwrap_or(0),
                result.low.get(&vertex.id).copied().unwrap_or(0)
            ));
        }

        result.summary = summary;
    }
}
