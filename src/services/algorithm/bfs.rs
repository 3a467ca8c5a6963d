//! BFS算法模块
//!
//! 广度优先遍历，记录访问顺序和遍历树

use serde::Serialize;
use std::collections::VecDeque;

use super::trace::{braced, joined, Trace};
use crate::core::{AlgorithmError, VertexRole};
use crate::graph::{Edge, Graph};

/// 遍历结果（BFS 与 DFS 共用）
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraversalResult {
    /// 顶点第一次被访问的顺序
    pub order: Vec<String>,
    /// 遍历树：发现每个新顶点时使用的边
    pub tree_edges: Vec<Edge>,
    /// 遍历树的总权重
    pub total_weight: f64,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl TraversalResult {
    pub(crate) fn missing_start(start: &str) -> Self {
        let error = AlgorithmError::vertex_not_found(VertexRole::Start, start);
        Self {
            trace: Trace::single(error.to_string()),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// 是否访问到了给定顶点
    pub fn reached(&self, id: &str) -> bool {
        self.order.iter().any(|v| v == id)
    }
}

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从 `start` 出发做广度优先遍历
    ///
    /// 邻居按 `Graph::neighbors` 的规则选取，只沿实际存在的边前进
    pub fn run(graph: &Graph, start: &str) -> TraversalResult {
        let Some(start_index) = graph.index_of(start) else {
            return TraversalResult::missing_start(start);
        };

        let mut visited = vec![false; graph.vertex_count()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut result = TraversalResult::default();
        let trace = &mut result.trace;

        visited[start_index] = true;
        queue.push_back(start_index);
        result.order.push(start.to_string());
        trace.push(format!("Starting breadth-first search from vertex {}", start));
        trace.push(format!("Initial queue: [{}]", start));

        while let Some(current) = queue.pop_front() {
            let current_id = &graph.vertices[current].id;
            trace.blank();
            trace.push(format!("--- Exploring vertex {} ---", current_id));
            trace.push(format!("Dequeued: {}", current_id));

            let neighbors = graph.neighbors(current);
            let neighbor_ids: Vec<&str> = neighbors
                .iter()
                .map(|n| graph.vertices[n.index].id.as_str())
                .collect();
            trace.push(format!(
                "Neighbors of {}: [{}]",
                current_id,
                joined(&neighbor_ids, ", ")
            ));

            for neighbor in neighbors {
                let Some(edge_index) = neighbor.edge else {
                    continue;
                };
                let edge = &graph.edges[edge_index];
                let neighbor_id = &graph.vertices[neighbor.index].id;

                if visited[neighbor.index] {
                    trace.push(format!("  -> {} already visited, ignored", neighbor_id));
                    continue;
                }

                visited[neighbor.index] = true;
                queue.push_back(neighbor.index);
                result.order.push(neighbor_id.clone());
                result.tree_edges.push(edge.clone());
                result.total_weight += edge.weight;
                trace.push(format!("  -> {} not visited, enqueued", neighbor_id));
                trace.push(format!("  -> tree edge {}", edge));
            }

            let queued: Vec<&str> = queue
                .iter()
                .map(|&i| graph.vertices[i].id.as_str())
                .collect();
            trace.push(format!("Queue: [{}]", joined(&queued, ", ")));
            trace.push(format!("Visited: {}", braced(&result.order)));
        }

        trace.blank();
        trace.push("=== SEARCH FINISHED ===");
        trace.push(format!("Visit order: {}", joined(&result.order, " -> ")));
        trace.push(format!("Vertices visited: {}", result.order.len()));
        trace.push(format!("Tree edges: {}", result.tree_edges.len()));
        trace.push(format!("Tree weight: {}", result.total_weight));

        log::debug!(
            "bfs from {} visited {}/{} vertices",
            start,
            result.order.len(),
            graph.vertex_count()
        );
        result
    }
}
