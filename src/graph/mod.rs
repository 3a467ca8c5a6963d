//! 图数据模型模块
//!
//! 所有算法共享的顶点、边与图的表示，以及只读查询和简单的编辑操作。
//! 算法只接收 `&Graph`，从不修改输入

pub mod samples;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::{GraphError, GraphResult};

/// 图中的顶点
///
/// 坐标只作为 A* 启发式的输入和渲染位置使用，对其他算法没有意义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// 相邻顶点的 id 列表；无向图中应当是对称的
    #[serde(default)]
    pub adjacency: Vec<String>,
}

impl Vertex {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            x,
            y,
            adjacency: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_adjacency<I, S>(mut self, adjacency: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjacency = adjacency.into_iter().map(Into::into).collect();
        self
    }

    /// 邻接表长度，即 Welsh-Powell 使用的度数
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_adjacent_to(&self, id: &str) -> bool {
        self.adjacency.iter().any(|n| n == id)
    }
}

/// 带权边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// 判断这条边是否连接 a 和 b
    ///
    /// 有向时只匹配 a -> b，无向时两个方向都匹配
    pub fn connects(&self, a: &str, b: &str, directed: bool) -> bool {
        (self.origin == a && self.destination == b)
            || (!directed && self.origin == b && self.destination == a)
    }

    pub fn touches(&self, id: &str) -> bool {
        self.origin == id || self.destination == id
    }

    /// 给定一个端点返回另一个端点
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.origin == id {
            Some(&self.destination)
        } else if self.destination == id {
            Some(&self.origin)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (weight: {})",
            self.origin, self.destination, self.weight
        )
    }
}

/// 遍历时的一个邻居：顶点下标以及连接它的边（如果存在）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub edge: Option<usize>,
}

/// 图：顶点、边以及整张图的方向标志
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub directed: bool,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn orientation_label(&self) -> &'static str {
        if self.directed {
            "directed"
        } else {
            "undirected"
        }
    }

    // ==================== 只读查询 ====================

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn vertex_ids(&self) -> Vec<String> {
        self.vertices.iter().map(|v| v.id.clone()).collect()
    }

    /// 查找连接 a、b 的第一条边的下标
    pub fn find_edge_index(&self, a: &str, b: &str) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.connects(a, b, self.directed))
    }

    /// 查找连接 a、b 的第一条边，遵循图的方向
    pub fn find_edge(&self, a: &str, b: &str) -> Option<&Edge> {
        self.find_edge_index(a, b).map(|i| &self.edges[i])
    }

    /// 忽略方向查找连接 a、b 的第一条边
    pub fn find_edge_any_direction(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b, false))
    }

    /// 遍历类算法使用的邻居规则
    ///
    /// - 有向图：以该顶点为起点的边，按边表顺序
    /// - 无向图：邻接表顺序，每个邻居附带两个方向任一匹配的边
    ///
    /// 邻接表中指向不存在顶点的 id 会被跳过
    pub fn neighbors(&self, index: usize) -> Vec<Neighbor> {
        let Some(vertex) = self.vertices.get(index) else {
            return Vec::new();
        };

        if self.directed {
            self.edges
                .iter()
                .enumerate()
                .filter(|(_, e)| e.origin == vertex.id)
                .filter_map(|(edge_index, e)| {
                    self.index_of(&e.destination).map(|target| Neighbor {
                        index: target,
                        edge: Some(edge_index),
                    })
                })
                .collect()
        } else {
            vertex
                .adjacency
                .iter()
                .filter_map(|neighbor_id| {
                    self.index_of(neighbor_id).map(|target| Neighbor {
                        index: target,
                        edge: self.find_edge_index(&vertex.id, neighbor_id),
                    })
                })
                .collect()
        }
    }

    /// 忽略方向的邻居下标：邻接表，加上有向图中指向该顶点的反向邻接
    pub fn weak_neighbors(&self, index: usize) -> Vec<usize> {
        let Some(vertex) = self.vertices.get(index) else {
            return Vec::new();
        };

        let mut result: Vec<usize> = vertex
            .adjacency
            .iter()
            .filter_map(|id| self.index_of(id))
            .collect();

        if self.directed {
            for (other_index, other) in self.vertices.iter().enumerate() {
                if other.is_adjacent_to(&vertex.id) && !result.contains(&other_index) {
                    result.push(other_index);
                }
            }
        }

        result
    }

    /// 邻接表长度
    pub fn degree(&self, index: usize) -> usize {
        self.vertices.get(index).map(Vertex::degree).unwrap_or(0)
    }

    /// 两个顶点的邻接表中是否互相出现（任一方向）
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.vertex(a).is_some_and(|v| v.is_adjacent_to(b))
            || self.vertex(b).is_some_and(|v| v.is_adjacent_to(a))
    }

    // ==================== 编辑操作 ====================

    /// 添加顶点，id 必须唯一
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<()> {
        if self.contains_vertex(&vertex.id) {
            return Err(GraphError::DuplicateVertex(vertex.id));
        }
        self.vertices.push(vertex);
        Ok(())
    }

    /// 删除顶点，以及所有关联的边和邻接表项
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<Vertex> {
        let index = self
            .index_of(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))?;
        let removed = self.vertices.remove(index);

        self.edges.retain(|e| !e.touches(id));
        for vertex in &mut self.vertices {
            vertex.adjacency.retain(|n| n != id);
        }

        Ok(removed)
    }

    /// 添加一条边并同步邻接表
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: f64) -> GraphResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let origin_index = self
            .index_of(origin)
            .ok_or_else(|| GraphError::VertexNotFound(origin.to_string()))?;
        let destination_index = self
            .index_of(destination)
            .ok_or_else(|| GraphError::VertexNotFound(destination.to_string()))?;

        if self.vertices[origin_index].is_adjacent_to(destination)
            || self.find_edge(origin, destination).is_some()
        {
            return Err(GraphError::DuplicateEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        self.vertices[origin_index]
            .adjacency
            .push(destination.to_string());
        if !self.directed && origin_index != destination_index {
            self.vertices[destination_index]
                .adjacency
                .push(origin.to_string());
        }
        self.edges.push(Edge::new(origin, destination, weight));
        Ok(())
    }

    /// 删除连接 a、b 的边（两个方向）并清理两侧邻接表
    pub fn remove_edge(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let before = self.edges.len();
        self.edges.retain(|e| !e.connects(a, b, false));
        if self.edges.len() == before {
            return Err(GraphError::EdgeNotFound {
                origin: a.to_string(),
                destination: b.to_string(),
            });
        }

        for vertex in &mut self.vertices {
            if vertex.id == a {
                vertex.adjacency.retain(|n| n != b);
            } else if vertex.id == b {
                vertex.adjacency.retain(|n| n != a);
            }
        }
        Ok(())
    }

    /// 切换方向标志，边和邻接表保持不变
    pub fn toggle_orientation(&mut self) {
        self.directed = !self.directed;
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    // ==================== JSON 读写 ====================

    pub fn from_json(content: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::undirected();
        for (id, x, y) in [("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 0.0, 1.0)] {
            graph
                .add_vertex(Vertex::new(id, x, y))
                .expect("Vertex insertion should succeed in test");
        }
        graph.add_edge("A", "B", 1.0).expect("Edge should be added in test");
        graph.add_edge("B", "C", 2.0).expect("Edge should be added in test");
        graph.add_edge("C", "A", 3.0).expect("Edge should be added in test");
        graph
    }

    #[test]
    fn test_add_edge_keeps_adjacency_symmetric() {
        let graph = triangle();
        for vertex in &graph.vertices {
            for neighbor in &vertex.adjacency {
                let other = graph.vertex(neighbor).expect("Neighbor should exist in test");
                assert!(other.is_adjacent_to(&vertex.id));
            }
        }
    }

    #[test]
    fn test_find_edge_respects_orientation() {
        let mut graph = triangle();
        assert!(graph.find_edge("B", "A").is_some());

        graph.toggle_orientation();
        assert!(graph.find_edge("A", "B").is_some());
        assert!(graph.find_edge("B", "A").is_none());
        assert!(graph.find_edge_any_direction("B", "A").is_some());
    }

    #[test]
    fn test_directed_neighbors_follow_edge_list() {
        let mut graph = Graph::directed();
        for id in ["A", "B", "C"] {
            graph
                .add_vertex(Vertex::new(id, 0.0, 0.0))
                .expect("Vertex insertion should succeed in test");
        }
        graph.add_edge("A", "C", 1.0).expect("Edge should be added in test");
        graph.add_edge("B", "A", 1.0).expect("Edge should be added in test");
        graph.add_edge("A", "B", 1.0).expect("Edge should be added in test");

        let neighbors: Vec<usize> = graph.neighbors(0).iter().map(|n| n.index).collect();
        assert_eq!(neighbors, vec![2, 1]);
        assert!(graph.vertices[2].adjacency.is_empty());

        assert_eq!(graph.weak_neighbors(0), vec![2, 1]);
        assert_eq!(graph.weak_neighbors(2), vec![0]);
    }

    #[test]
    fn test_duplicate_vertex_and_edge_rejected() {
        let mut graph = triangle();
        assert!(matches!(
            graph.add_vertex(Vertex::new("A", 5.0, 5.0)),
            Err(GraphError::DuplicateVertex(_))
        ));
        assert!(matches!(
            graph.add_edge("B", "A", 4.0),
            Err(GraphError::DuplicateEdge { .. })
        ));
        assert!(matches!(
            graph.add_edge("A", "Z", 4.0),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.add_edge("A", "B", -1.0),
            Err(GraphError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_remove_vertex_cleans_edges_and_adjacency() {
        let mut graph = triangle();
        graph.remove_vertex("B").expect("Removal should succeed in test");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.vertices.iter().all(|v| !v.is_adjacent_to("B")));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        graph.remove_edge("B", "A").expect("Removal should succeed in test");

        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.are_adjacent("A", "B"));
        assert!(matches!(
            graph.remove_edge("A", "B"),
            Err(GraphError::EdgeNotFound { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let graph = triangle();
        let json = graph.to_json().expect("Serialization should succeed in test");
        let parsed = Graph::from_json(&json).expect("Parsing should succeed in test");
        assert_eq!(graph, parsed);
    }
}
