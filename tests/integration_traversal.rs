//! 遍历与最短路径集成测试
//!
//! 测试范围：
//! - BFS/DFS 的遍历树
//! - Prim 最小生成树与穷举结果对比
//! - A* 在 A1..D5 网格上的路径

mod common;

use common::assertions::{assert_count, assert_tree};
use common::data_fixtures;
use common::{brute_force_mst_weight, reference_shortest_cost};
use graphlab::graph::samples;
use graphlab::services::{AStar, Bfs, Dfs, Prim, SearchOutcome};

// ==================== BFS / DFS ====================

#[test]
fn test_bfs_tree_spans_reachable_vertices() {
    for preset in samples::presets() {
        let Some(start) = preset.graph.vertices.first().map(|v| v.id.clone()) else {
            continue;
        };
        let result = Bfs::run(&preset.graph, &start);

        assert!(result.is_success());
        assert_eq!(result.tree_edges.len(), result.order.len() - 1, "{}", preset.key);
        if !preset.graph.directed {
            assert_tree(&preset.graph, &result.order, &result.tree_edges);
        }
    }
}

#[test]
fn test_dfs_tree_spans_reachable_vertices() {
    for preset in samples::presets() {
        let Some(start) = preset.graph.vertices.first().map(|v| v.id.clone()) else {
            continue;
        };
        let result = Dfs::run(&preset.graph, &start);

        assert_eq!(
            result.traversal.tree_edges.len(),
            result.order().len() - 1,
            "{}",
            preset.key
        );
        assert_eq!(result.discovery.len(), result.order().len());
        assert_eq!(result.finish.len(), result.order().len());
    }
}

#[test]
fn test_traversals_agree_on_reachable_set() {
    let graph = samples::disconnected();
    for start in ["A", "D", "G", "K"] {
        let mut bfs = Bfs::run(&graph, start).order;
        let mut dfs = Dfs::run(&graph, start).traversal.order;
        bfs.sort();
        dfs.sort();
        assert_eq!(bfs, dfs);
    }
}

#[test]
fn test_traversal_is_deterministic() {
    let graph = samples::complex();
    let first = Dfs::run(&graph, "D");
    let second = Dfs::run(&graph, "D");

    assert_eq!(first.order(), second.order());
    assert_eq!(first.traversal.trace.steps(), second.traversal.trace.steps());
}

// ==================== Prim ====================

#[test]
fn test_prim_matches_brute_force_on_k4() {
    let graph = data_fixtures::weighted_k4();
    let expected = brute_force_mst_weight(&graph).expect("K4 应该有生成树");

    for start in ["A", "B", "C", "D"] {
        let result = Prim::run(&graph, start);
        assert!(result.spanning);
        assert_count(&result.edges, 3, "生成树边");
        assert_eq!(result.total_weight, expected);
    }
    // 1 + 2 + 3
    assert_eq!(expected, 6.0);
}

#[test]
fn test_prim_matches_brute_force_on_dense_preset() {
    let graph = samples::dense();
    let expected = brute_force_mst_weight(&graph).expect("稠密图应该有生成树");
    let result = Prim::run(&graph, "A");

    assert_eq!(result.total_weight, expected);
    assert_eq!(result.edges.len(), graph.vertex_count() - 1);
}

// ==================== A* ====================

#[test]
fn test_astar_grid_path() {
    let graph = samples::grid_a1_d5();
    let result = AStar::run(&graph, "A1", "D5");

    assert_eq!(result.outcome, SearchOutcome::Found);
    assert_eq!(result.path.first().map(String::as_str), Some("A1"));
    assert_eq!(result.path.last().map(String::as_str), Some("D5"));

    let edge_sum: f64 = result.path_edges.iter().map(|e| e.weight).sum();
    assert_eq!(result.cost, edge_sum);

    let optimal = reference_shortest_cost(&graph, "A1", "D5").expect("网格应该连通");
    assert_eq!(result.cost, optimal);
}

#[test]
fn test_astar_optimal_on_every_grid_goal() {
    let graph = samples::grid_a1_d5();
    for goal in graph.vertex_ids() {
        let result = AStar::run(&graph, "A1", &goal);
        let optimal = reference_shortest_cost(&graph, "A1", &goal).expect("网格应该连通");
        assert_eq!(result.cost, optimal, "A1 -> {}", goal);
    }
}

#[test]
fn test_astar_info_marks_path() {
    let graph = samples::grid_a1_d5();
    let result = AStar::run(&graph, "A1", "D5");

    for id in &result.path {
        let info = result.info(id).expect("路径上的顶点应该有搜索信息");
        assert!(info.on_path);
        assert!(info.visited);
        assert!((info.f - (info.g + info.heuristic)).abs() < 1e-9);
    }
    assert_eq!(result.info("A1").map(|i| i.g), Some(0.0));
    assert_eq!(result.info("D5").map(|i| i.heuristic), Some(0.0));
}
