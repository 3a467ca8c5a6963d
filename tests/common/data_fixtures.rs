//! 测试数据生成模块
//!
//! 提供各种测试图的生成函数

use graphlab::graph::{Graph, Vertex};

/// 按 id 列表创建只有顶点的图
pub fn vertices_only(directed: bool, ids: &[&str]) -> Graph {
    let mut graph = Graph::new(directed);
    for (i, id) in ids.iter().enumerate() {
        graph
            .add_vertex(Vertex::new(*id, 100.0 + i as f64 * 50.0, 100.0))
            .expect("顶点应该添加成功");
    }
    graph
}

/// 按边列表创建图
pub fn with_edges(directed: bool, ids: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = vertices_only(directed, ids);
    for (origin, destination, weight) in edges {
        graph
            .add_edge(origin, destination, *weight)
            .expect("边应该添加成功");
    }
    graph
}

/// 带权的 K4
pub fn weighted_k4() -> Graph {
    with_edges(
        false,
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 4.0),
            ("A", "C", 1.0),
            ("A", "D", 3.0),
            ("B", "C", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 6.0),
        ],
    )
}

/// 有向环 V0 -> V1 -> ... -> V(n-1) -> V0
pub fn directed_cycle(n: usize) -> Graph {
    let ids: Vec<String> = (0..n).map(|i| format!("V{}", i)).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut graph = vertices_only(true, &refs);
    for i in 0..n {
        graph
            .add_edge(&ids[i], &ids[(i + 1) % n], 1.0)
            .expect("边应该添加成功");
    }
    graph
}

/// 无向路径 P0 - P1 - ... - P(n-1)
pub fn path(n: usize) -> Graph {
    let ids: Vec<String> = (0..n).map(|i| format!("P{}", i)).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut graph = vertices_only(false, &refs);
    for i in 1..n {
        graph
            .add_edge(&ids[i - 1], &ids[i], 1.0)
            .expect("边应该添加成功");
    }
    graph
}

/// 无向环
pub fn cycle(n: usize) -> Graph {
    let mut graph = path(n);
    graph
        .add_edge(&format!("P{}", n - 1), "P0", 1.0)
        .expect("边应该添加成功");
    graph
}

/// 三角形
pub fn triangle() -> Graph {
    with_edges(
        false,
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)],
    )
}
