//! 连通性集成测试
//!
//! 测试范围：
//! - 弱连通分量与 Tarjan 强连通分量
//! - 桥与割点
//! - 平面性检测

mod common;

use common::assertions::assert_every_vertex_colored;
use common::data_fixtures;
use graphlab::core::AlgorithmError;
use graphlab::graph::samples;
use graphlab::services::{
    Connectivity, ConnectivityMode, CutAnalysis, Planarity, PlanarityReason,
    StronglyConnectedComponents,
};

// ==================== 分量 ====================

#[test]
fn test_components_partition_vertices() {
    for preset in samples::presets() {
        let result = Connectivity::analyze(&preset.graph, ConnectivityMode::Auto);
        assert!(result.is_success(), "{}", preset.key);

        let mut all: Vec<String> = result.components.iter().flatten().cloned().collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total, "{}: 顶点不应出现在多个分量中", preset.key);
        assert_eq!(total, preset.graph.vertex_count(), "{}", preset.key);
        assert_eq!(result.count, result.components.len());
    }
}

#[test]
fn test_directed_cycle_is_one_scc() {
    let graph = data_fixtures::directed_cycle(6);
    let result = StronglyConnectedComponents::find(&graph);

    assert_eq!(result.count, 1);
    assert_eq!(result.components[0].len(), 6);
}

#[test]
fn test_dag_sccs_are_singletons() {
    let graph = samples::digraph();
    let result = Connectivity::analyze(&graph, ConnectivityMode::Strong);

    assert_eq!(result.count, graph.vertex_count());
    assert!(result.components.iter().all(|c| c.len() == 1));
}

#[test]
fn test_weak_mode_on_directed_graph_warns() {
    let graph = data_fixtures::directed_cycle(4);
    let result = Connectivity::analyze(&graph, ConnectivityMode::Weak);

    assert_eq!(result.mode, ConnectivityMode::Weak);
    assert!(result.trace.mentions("Warning"));
    assert_eq!(result.count, 1);
    assert!(result.low_link.is_empty());
}

#[test]
fn test_components_deterministic() {
    let graph = samples::disconnected();
    let first = Connectivity::analyze(&graph, ConnectivityMode::Auto);
    let second = Connectivity::analyze(&graph, ConnectivityMode::Auto);

    assert_eq!(first.components, second.components);
    assert_eq!(first.coloring, second.coloring);
    assert_eq!(first.trace.steps(), second.trace.steps());
}

// ==================== 桥与割点 ====================

#[test]
fn test_cycle_has_no_bridges_or_articulations() {
    let result = CutAnalysis::run(&data_fixtures::cycle(6));

    assert!(result.bridges.is_empty());
    assert!(result.articulation_points.is_empty());
}

#[test]
fn test_path_bridges_and_inner_articulations() {
    let graph = data_fixtures::path(6);
    let result = CutAnalysis::run(&graph);

    assert_eq!(result.bridges.len(), graph.edge_count());
    let mut points = result.articulation_points.clone();
    points.sort();
    assert_eq!(points, vec!["P1", "P2", "P3", "P4"]);
    assert_every_vertex_colored(&graph, &result.coloring);
}

#[test]
fn test_cut_analysis_low_values() {
    let result = CutAnalysis::run(&data_fixtures::cycle(4));

    // 环上所有顶点都能通过回边回到根
    assert!(result.low.values().all(|&low| low == 1));
    assert_eq!(result.discovery["P0"], 1);
}

#[test]
fn test_cut_analysis_rejects_directed() {
    let result = CutAnalysis::run(&samples::digraph());
    assert!(matches!(result.error, Some(AlgorithmError::NotApplicable { .. })));
    assert!(result.bridges.is_empty());
}

// ==================== 平面性 ====================

#[test]
fn test_planarity_of_presets() {
    for key in ["complex", "disconnected", "tree", "grid3x3", "grid_a1_d5"] {
        let graph = samples::preset(key).expect("预置图应该存在");
        let report = Planarity::check(&graph);
        assert!(report.planar, "{} should be planar", key);
        assert_every_vertex_colored(&graph, &report.coloring);
    }
}

#[test]
fn test_k33_subgraph_found_in_larger_graph() {
    let graph = data_fixtures::with_edges(
        false,
        &["A", "B", "C", "X", "Y", "Z", "W"],
        &[
            ("A", "X", 1.0),
            ("A", "Y", 1.0),
            ("A", "Z", 1.0),
            ("B", "X", 1.0),
            ("B", "Y", 1.0),
            ("B", "Z", 1.0),
            ("C", "X", 1.0),
            ("C", "Y", 1.0),
            ("C", "Z", 1.0),
            ("W", "A", 1.0),
        ],
    );
    let report = Planarity::check(&graph);

    assert!(!report.planar);
    assert_eq!(report.reason, PlanarityReason::ContainsK33);
    assert!(report.euler.passes);
}

#[test]
fn test_k5_detected_when_euler_passes() {
    // K5 加上一条长路径，使边数不超过欧拉上界
    let mut edges: Vec<(&str, &str, f64)> = Vec::new();
    let core = ["A", "B", "C", "D", "E"];
    for i in 0..core.len() {
        for j in i + 1..core.len() {
            edges.push((core[i], core[j], 1.0));
        }
    }
    edges.extend([("E", "F", 1.0), ("F", "G", 1.0), ("G", "H", 1.0)]);
    let graph = data_fixtures::with_edges(
        false,
        &["A", "B", "C", "D", "E", "F", "G", "H"],
        &edges,
    );

    let report = Planarity::check(&graph);
    assert!(report.euler.passes);
    assert!(!report.planar);
    assert_eq!(report.reason, PlanarityReason::ContainsK5);
    assert_eq!(
        report.k5,
        Some(core.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    );
}
