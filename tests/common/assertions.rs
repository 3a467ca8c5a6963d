//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphlab::graph::{Edge, Graph};
use graphlab::services::VertexColor;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言边集合构成一棵树：边数为顶点数减一且不含环
pub fn assert_tree(graph: &Graph, vertices: &[String], edges: &[Edge]) {
    assert_eq!(edges.len() + 1, vertices.len(), "树的边数应为顶点数减一");

    let index = |id: &str| {
        vertices
            .iter()
            .position(|v| v == id)
            .expect("树边的端点应该在顶点集合中")
    };
    let mut parent: Vec<usize> = (0..vertices.len()).collect();
    for edge in edges {
        assert!(
            graph.find_edge_any_direction(&edge.origin, &edge.destination).is_some(),
            "树边 {} 应该存在于图中",
            edge
        );
        let mut a = index(&edge.origin);
        let mut b = index(&edge.destination);
        while parent[a] != a {
            a = parent[a];
        }
        while parent[b] != b {
            b = parent[b];
        }
        assert_ne!(a, b, "树中不应有环: {}", edge);
        parent[a] = b;
    }
}

/// 断言每个顶点恰好着色一次
pub fn assert_every_vertex_colored(graph: &Graph, coloring: &[VertexColor]) {
    assert_count(coloring, graph.vertex_count(), "着色");
    for vertex in &graph.vertices {
        assert!(
            coloring.iter().any(|c| c.id == vertex.id),
            "顶点 {} 应该有颜色",
            vertex.id
        );
    }
}
