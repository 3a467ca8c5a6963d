//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use graphlab::graph::Graph;
use std::collections::BinaryHeap;
use std::cmp::Reverse;

/// 用作参照的 Dijkstra 最短路径代价（忽略坐标）
///
/// 权重按整数处理，只适用于整数权重的测试图
pub fn reference_shortest_cost(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
    let start = graph.index_of(start)?;
    let goal = graph.index_of(goal)?;
    let mut dist = vec![u64::MAX; graph.vertex_count()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for neighbor in graph.neighbors(u) {
            let Some(edge) = neighbor.edge else {
                continue;
            };
            let next = d + graph.edges[edge].weight as u64;
            if next < dist[neighbor.index] {
                dist[neighbor.index] = next;
                heap.push(Reverse((next, neighbor.index)));
            }
        }
    }

    (dist[goal] != u64::MAX).then(|| dist[goal] as f64)
}

/// 穷举所有生成树，返回最小总权重
///
/// 只用于边数很少的图
pub fn brute_force_mst_weight(graph: &Graph) -> Option<f64> {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    let mut best: Option<f64> = None;

    for mask in 0u32..(1u32 << m) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut parent: Vec<usize> = (0..n).collect();
        let mut weight = 0.0;
        let mut acyclic = true;

        for (i, edge) in graph.edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (Some(a), Some(b)) = (
                graph.index_of(&edge.origin),
                graph.index_of(&edge.destination),
            ) else {
                acyclic = false;
                break;
            };
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            if ra == rb {
                acyclic = false;
                break;
            }
            parent[ra] = rb;
            weight += edge.weight;
        }

        if acyclic && best.map_or(true, |b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

fn find(parent: &mut [usize], x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    root
}
