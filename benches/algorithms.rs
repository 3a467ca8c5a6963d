//! 算法基准测试
//!
//! 在预置图和生成的网格上测量各算法的耗时

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphlab::graph::{samples, Graph, Vertex};
use graphlab::services::{
    AStar, Bfs, CutAnalysis, Dfs, GeneticConfig, GeneticTsp, Planarity, Prim,
    StronglyConnectedComponents, WelshPowell,
};

/// 生成 side x side 的无向网格，顶点 id 为 "行,列"
fn grid(side: usize) -> Graph {
    let mut graph = Graph::undirected();
    for row in 0..side {
        for col in 0..side {
            let vertex = Vertex::new(
                format!("{},{}", row, col),
                col as f64 * 40.0,
                row as f64 * 40.0,
            );
            graph.add_vertex(vertex).unwrap();
        }
    }
    for row in 0..side {
        for col in 0..side {
            let id = format!("{},{}", row, col);
            let weight = ((row * 7 + col * 3) % 5 + 1) as f64;
            if col + 1 < side {
                graph.add_edge(&id, &format!("{},{}", row, col + 1), weight).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(&id, &format!("{},{}", row + 1, col), weight).unwrap();
            }
        }
    }
    graph
}

/// 有向环加弦，用于强连通分量
fn directed_ring(n: usize) -> Graph {
    let mut graph = Graph::directed();
    for i in 0..n {
        graph
            .add_vertex(Vertex::new(format!("V{}", i), i as f64, 0.0))
            .unwrap();
    }
    for i in 0..n {
        graph
            .add_edge(&format!("V{}", i), &format!("V{}", (i + 1) % n), 1.0)
            .unwrap();
        if i % 3 == 0 {
            let _ = graph.add_edge(&format!("V{}", i), &format!("V{}", (i + n / 2) % n), 2.0);
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for side in [5, 10, 20] {
        let graph = grid(side);
        group.bench_with_input(BenchmarkId::new("bfs", side), &graph, |b, graph| {
            b.iter(|| black_box(Bfs::run(graph, "0,0")))
        });
        group.bench_with_input(BenchmarkId::new("dfs", side), &graph, |b, graph| {
            b.iter(|| black_box(Dfs::run(graph, "0,0")))
        });
        group.bench_with_input(BenchmarkId::new("prim", side), &graph, |b, graph| {
            b.iter(|| black_box(Prim::run(graph, "0,0")))
        });
    }

    group.finish();
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");

    let preset = samples::grid_a1_d5();
    group.bench_function("grid_a1_d5", |b| {
        b.iter(|| black_box(AStar::run(&preset, "A1", "D5")))
    });

    for side in [10, 20] {
        let graph = grid(side);
        let goal = format!("{},{}", side - 1, side - 1);
        group.bench_with_input(BenchmarkId::new("grid", side), &graph, |b, graph| {
            b.iter(|| black_box(AStar::run(graph, "0,0", &goal)))
        });
    }

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");

    let graph = grid(10);
    group.bench_function("cut_analysis", |b| {
        b.iter(|| black_box(CutAnalysis::run(&graph)))
    });
    group.bench_function("welsh_powell", |b| {
        b.iter(|| black_box(WelshPowell::run(&graph)))
    });

    // 子图搜索是组合级别的，只在小图上测
    let complex = samples::complex();
    group.bench_function("planarity_complex", |b| {
        b.iter(|| black_box(Planarity::check(&complex)))
    });

    for n in [50, 200] {
        let ring = directed_ring(n);
        group.bench_with_input(BenchmarkId::new("tarjan", n), &ring, |b, ring| {
            b.iter(|| black_box(StronglyConnectedComponents::find(ring)))
        });
    }

    group.finish();
}

fn bench_genetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic");
    group.sample_size(10);

    let graph = samples::dense();
    for population in [20, 100] {
        let config = GeneticConfig {
            population_size: population,
            generations: 20,
            seed: Some(7),
            ..GeneticConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("dense", population),
            &config,
            |b, config| b.iter(|| black_box(GeneticTsp::run(&graph, "A", config))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_astar,
    bench_structure,
    bench_genetic
);

criterion_main!(benches);
