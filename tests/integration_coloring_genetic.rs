//! 着色与遗传算法集成测试
//!
//! 测试范围：
//! - Welsh-Powell 着色的合法性
//! - 遗传算法路线、单调性与可复现性

mod common;

use common::assertions::assert_every_vertex_colored;
use common::data_fixtures;
use graphlab::graph::samples;
use graphlab::services::{GeneticConfig, GeneticTsp, WelshPowell, PENALTY};

// ==================== Welsh-Powell ====================

#[test]
fn test_triangle_three_colors() {
    let result = WelshPowell::run(&data_fixtures::triangle());
    assert_eq!(result.total_colors, 3);
    assert!(result.valid);
    assert!(result.conflicts.is_empty());
}

#[test]
fn test_edgeless_one_color() {
    let result = WelshPowell::run(&data_fixtures::vertices_only(false, &["A", "B", "C"]));
    assert_eq!(result.total_colors, 1);
}

#[test]
fn test_adjacent_vertices_differ_on_all_undirected_presets() {
    for preset in samples::presets() {
        if preset.graph.directed {
            continue;
        }
        let result = WelshPowell::run(&preset.graph);
        assert!(result.valid, "{}", preset.key);
        for edge in &preset.graph.edges {
            assert_ne!(
                result.color_of(&edge.origin),
                result.color_of(&edge.destination),
                "{}: {}",
                preset.key,
                edge
            );
        }
        assert_every_vertex_colored(&preset.graph, &result.coloring);
    }
}

#[test]
fn test_odd_cycle_needs_three_colors() {
    let result = WelshPowell::run(&data_fixtures::cycle(5));
    assert_eq!(result.total_colors, 3);

    let even = WelshPowell::run(&data_fixtures::cycle(6));
    assert!(even.total_colors <= 3);
    assert!(even.valid);
}

// ==================== 遗传算法 ====================

fn config(seed: u64) -> GeneticConfig {
    GeneticConfig {
        population_size: 40,
        generations: 30,
        elitism: 1,
        seed: Some(seed),
        ..GeneticConfig::default()
    }
}

#[test]
fn test_best_fitness_monotone_with_elitism() {
    let graph = samples::dense();
    for seed in [1, 2, 3] {
        let result = GeneticTsp::run(&graph, "A", &config(seed));
        for pair in result.history.windows(2) {
            assert!(pair[1].best <= pair[0].best, "seed {}", seed);
        }
        for stats in &result.history {
            assert!(stats.best <= stats.average);
            assert!(stats.average <= stats.worst);
        }
    }
}

#[test]
fn test_route_is_closed_permutation() {
    let graph = samples::complex();
    let result = GeneticTsp::run(&graph, "E", &config(11));

    let route = &result.best_route;
    assert_eq!(route.len(), graph.vertex_count() + 1);
    assert_eq!(route.first(), route.last());
    assert_eq!(route[0], "E");

    let mut inner: Vec<String> = route[1..route.len() - 1].to_vec();
    inner.sort();
    let mut expected: Vec<String> = graph
        .vertex_ids()
        .into_iter()
        .filter(|id| id != "E")
        .collect();
    expected.sort();
    assert_eq!(inner, expected);
}

#[test]
fn test_best_cost_matches_route_edges() {
    let graph = samples::dense();
    let result = GeneticTsp::run(&graph, "A", &config(5));

    let sum: f64 = result.route_edges.iter().map(|e| e.weight).sum();
    assert_eq!(result.best_cost, sum);
    // 稠密图中的最优路线不应使用缺失的边
    assert!(result.best_cost < PENALTY);
}

#[test]
fn test_missing_edges_penalize_every_route() {
    // 路径图上没有哈密顿回路，任何路线都要走缺失的边
    let graph = data_fixtures::path(4);
    let result = GeneticTsp::run(&graph, "P0", &config(21));

    assert!(result.is_success());
    assert!(!result.final_population.is_empty());
    for individual in &result.final_population {
        assert!(individual.real_cost.is_infinite(), "{:?}", individual.route);
        assert!(individual.fitness >= PENALTY);
    }
    assert!(result.best_cost >= PENALTY);
    assert!(result.trace.mentions("penalized"));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let graph = samples::complex();
    let first = GeneticTsp::run(&graph, "A", &config(99));
    let second = GeneticTsp::run(&graph, "A", &config(99));

    assert_eq!(first.best_route, second.best_route);
    assert_eq!(first.best_cost, second.best_cost);
    assert_eq!(first.history, second.history);
}

#[test]
fn test_final_population_sorted() {
    let graph = samples::dense();
    let result = GeneticTsp::run(&graph, "B", &config(8));

    assert_eq!(result.final_population.len(), 40);
    for pair in result.final_population.windows(2) {
        assert!(pair[0].fitness <= pair[1].fitness);
    }
    assert_eq!(result.final_population[0].full_route, result.best_route);
}
