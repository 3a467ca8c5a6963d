//! Prim 最小生成树模块

use serde::Serialize;

use super::trace::{braced, Trace};
use crate::core::{AlgorithmError, AlgorithmKind, VertexRole};
use crate::graph::{Edge, Graph};

/// 最小生成树结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct MstResult {
    /// 按加入顺序排列的树边
    pub edges: Vec<Edge>,
    pub total_weight: f64,
    /// 是否覆盖了全部顶点
    pub spanning: bool,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl MstResult {
    fn failed(error: AlgorithmError) -> Self {
        Self {
            trace: Trace::single(error.to_string()),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 从 `start` 开始生成最小生成树
    ///
    /// 每一步扫描全部边，选出恰有一个端点在树内的最轻边；权重相同时保留最先找到的边。
    /// 图不连通时返回部分树并令 `spanning = false`
    pub fn run(graph: &Graph, start: &str) -> MstResult {
        if graph.directed {
            return MstResult::failed(AlgorithmError::directed_not_supported(AlgorithmKind::Prim));
        }
        let Some(start_index) = graph.index_of(start) else {
            return MstResult::failed(AlgorithmError::vertex_not_found(VertexRole::Start, start));
        };

        let mut in_tree = vec![false; graph.vertex_count()];
        let mut tree_ids: Vec<String> = Vec::new();
        let mut result = MstResult::default();
        let trace = &mut result.trace;

        in_tree[start_index] = true;
        tree_ids.push(start.to_string());
        trace.push(format!("Starting Prim's algorithm from vertex {}", start));
        trace.push(format!("Tree: {}", braced(&tree_ids)));

        while tree_ids.len() < graph.vertex_count() {
            let mut best: Option<(usize, usize)> = None;
            let mut best_weight = f64::INFINITY;

            for (edge_index, edge) in graph.edges.iter().enumerate() {
                let (Some(a), Some(b)) = (
                    graph.index_of(&edge.origin),
                    graph.index_of(&edge.destination),
                ) else {
                    continue;
                };
                if in_tree[a] == in_tree[b] {
                    continue;
                }
                if edge.weight < best_weight {
                    best_weight = edge.weight;
                    best = Some((edge_index, if in_tree[a] { b } else { a }));
                }
            }

            let Some((edge_index, added)) = best else {
                trace.blank();
                trace.push("No edge leaves the tree: the graph is disconnected");
                trace.push(format!(
                    "Partial tree covers {} of {} vertices",
                    tree_ids.len(),
                    graph.vertex_count()
                ));
                break;
            };

            let edge = &graph.edges[edge_index];
            in_tree[added] = true;
            tree_ids.push(graph.vertices[added].id.clone());
            result.edges.push(edge.clone());
            result.total_weight += edge.weight;

            trace.blank();
            trace.push(format!("--- Step {} ---", result.edges.len()));
            trace.push(format!("Lightest crossing edge: {}", edge));
            trace.push(format!("Added vertex {}", graph.vertices[added].id));
            trace.push(format!("Tree: {}", braced(&tree_ids)));
            trace.push(format!("Running weight: {}", result.total_weight));
        }

        result.spanning = tree_ids.len() == graph.vertex_count();

        trace.blank();
        trace.push("=== MINIMUM SPANNING TREE ===");
        for edge in &result.edges {
            trace.push(format!("  {}", edge));
        }
        trace.push(format!("Edges: {}", result.edges.len()));
        trace.push(format!("Total weight: {}", result.total_weight));

        log::debug!(
            "prim from {} selected {} edges, weight {}",
            start,
            result.edges.len(),
            result.total_weight
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::samples;

    #[test]
    fn test_connected_graph_spans() {
        let graph = samples::complex();
        let result = Prim::run(&graph, "A");

        assert!(result.is_success());
        assert!(result.spanning);
        assert_eq!(result.edges.len(), graph.vertex_count() - 1);
        // 1 + 2 + 3 + 2 + 1 + 6 + 3 + 2
        assert_eq!(result.total_weight, 20.0);
    }

    #[test]
    fn test_first_edge_is_lightest_at_start() {
        let graph = samples::complex();
        let result = Prim::run(&graph, "A");

        let first = &result.edges[0];
        assert_eq!((first.origin.as_str(), first.destination.as_str()), ("A", "C"));
    }

    #[test]
    fn test_tree_is_its_own_mst() {
        let graph = samples::tree();
        let result = Prim::run(&graph, "Root");

        let total: f64 = graph.edges.iter().map(|e| e.weight).sum();
        assert_eq!(result.total_weight, total);
        assert_eq!(result.edges.len(), graph.edge_count());
    }

    #[test]
    fn test_disconnected_returns_partial_tree() {
        let graph = samples::disconnected();
        let result = Prim::run(&graph, "A");

        assert!(result.is_success());
        assert!(!result.spanning);
        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.total_weight, 7.0);
        assert!(result.trace.mentions("disconnected"));
    }

    #[test]
    fn test_directed_graph_rejected() {
        let graph = samples::digraph();
        let result = Prim::run(&graph, "A");

        assert!(matches!(
            result.error,
            Some(AlgorithmError::NotApplicable {
                algorithm: AlgorithmKind::Prim,
                ..
            })
        ));
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_missing_start() {
        let graph = samples::complex();
        let result = Prim::run(&graph, "Z");

        assert_eq!(
            result.error,
            Some(AlgorithmError::vertex_not_found(VertexRole::Start, "Z"))
        );
    }
}
