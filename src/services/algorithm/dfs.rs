//! DFS算法模块
//!
//! 深度优先遍历，记录访问顺序、遍历树以及每个顶点的发现/完成时间。
//! 使用显式栈帧代替递归

use serde::Serialize;
use std::collections::HashMap;

use super::bfs::TraversalResult;
use super::trace::joined;
use crate::graph::{Graph, Neighbor};

/// DFS 结果：遍历结果加上时间戳
#[derive(Debug, Clone, Default, Serialize)]
pub struct DfsResult {
    #[serde(flatten)]
    pub traversal: TraversalResult,
    /// 顶点 -> 发现时间
    pub discovery: HashMap<String, usize>,
    /// 顶点 -> 完成时间
    pub finish: HashMap<String, usize>,
}

impl DfsResult {
    pub fn is_success(&self) -> bool {
        self.traversal.is_success()
    }

    pub fn order(&self) -> &[String] {
        &self.traversal.order
    }
}

/// 栈帧：顶点及其下一个待检查邻居的位置
struct Frame {
    vertex: usize,
    neighbors: Vec<Neighbor>,
    cursor: usize,
}

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从 `start` 出发做深度优先遍历
    ///
    /// 计时器在进入和离开每个顶点时各加一
    pub fn run(graph: &Graph, start: &str) -> DfsResult {
        let Some(start_index) = graph.index_of(start) else {
            return DfsResult {
                traversal: TraversalResult::missing_start(start),
                ..Default::default()
            };
        };

        let mut result = DfsResult::default();
        let mut visited = vec![false; graph.vertex_count()];
        let mut time = 0usize;
        let mut stack: Vec<Frame> = Vec::new();

        result
            .traversal
            .trace
            .push(format!("Starting depth-first search from vertex {}", start));

        Self::enter(graph, start_index, &mut time, &mut visited, &mut result, &mut stack);

        while let Some(frame) = stack.last_mut() {
            if frame.cursor >= frame.neighbors.len() {
                let vertex = frame.vertex;
                stack.pop();
                time += 1;
                let id = &graph.vertices[vertex].id;
                result.finish.insert(id.clone(), time);
                result
                    .traversal
                    .trace
                    .push(format!("Finishing vertex {} (time: {})", id, time));
                continue;
            }

            let neighbor = frame.neighbors[frame.cursor];
            let current = frame.vertex;
            frame.cursor += 1;

            let Some(edge_index) = neighbor.edge else {
                continue;
            };
            let edge = &graph.edges[edge_index];
            let neighbor_id = &graph.vertices[neighbor.index].id;

            if visited[neighbor.index] {
                result.traversal.trace.push(format!(
                    "  -> {} already visited from {}, back edge",
                    neighbor_id, graph.vertices[current].id
                ));
                continue;
            }

            result.traversal.tree_edges.push(edge.clone());
            result.traversal.total_weight += edge.weight;
            result
                .traversal
                .trace
                .push(format!("  -> {} not visited, exploring", neighbor_id));
            result
                .traversal
                .trace
                .push(format!("  -> tree edge {}", edge));

            Self::enter(graph, neighbor.index, &mut time, &mut visited, &mut result, &mut stack);
        }

        let traversal = &mut result.traversal;
        traversal.trace.blank();
        traversal.trace.push("=== SEARCH FINISHED ===");
        traversal
            .trace
            .push(format!("Visit order: {}", joined(&traversal.order, " -> ")));
        traversal
            .trace
            .push(format!("Vertices visited: {}", traversal.order.len()));
        traversal
            .trace
            .push(format!("Tree edges: {}", traversal.tree_edges.len()));
        traversal
            .trace
            .push(format!("Tree weight: {}", traversal.total_weight));

        log::debug!(
            "dfs from {} visited {}/{} vertices",
            start,
            traversal.order.len(),
            graph.vertex_count()
        );
        result
    }

    fn enter(
        graph: &Graph,
        vertex: usize,
        time: &mut usize,
        visited: &mut [bool],
        result: &mut DfsResult,
        stack: &mut Vec<Frame>,
    ) {
        *time += 1;
        visited[vertex] = true;

        let id = &graph.vertices[vertex].id;
        result.discovery.insert(id.clone(), *time);
        result.traversal.order.push(id.clone());

        let neighbors = graph.neighbors(vertex);
        let neighbor_ids: Vec<&str> = neighbors
            .iter()
            .map(|n| graph.vertices[n.index].id.as_str())
            .collect();

        let trace = &mut result.traversal.trace;
        trace.blank();
        trace.push(format!("--- Visiting vertex {} (time: {}) ---", id, time));
        trace.push(format!(
            "Neighbors of {}: [{}]",
            id,
            joined(&neighbor_ids, ", ")
        ));

        stack.push(Frame {
            vertex,
            neighbors,
            cursor: 0,
        });
    }
}
