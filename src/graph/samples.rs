//! 预置示例图
//!
//! 教学界面中可直接选择的图，以及 A* 使用的 `A1..D5` 网格

use super::{Edge, Graph, Vertex};

/// 一个预置图
#[derive(Debug, Clone)]
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub graph: Graph,
}

/// (id, x, y, 以空格分隔的邻接表)
type VertexSpec<'a> = (&'a str, f64, f64, &'a str);
type EdgeSpec<'a> = (&'a str, &'a str, f64);

/// 按给定的邻接表原样构建图，不经过编辑操作
fn build(directed: bool, vertices: &[VertexSpec<'_>], edges: &[EdgeSpec<'_>]) -> Graph {
    Graph {
        vertices: vertices
            .iter()
            .map(|(id, x, y, adjacency)| {
                Vertex::new(*id, *x, *y).with_adjacency(adjacency.split_whitespace())
            })
            .collect(),
        edges: edges
            .iter()
            .map(|(origin, destination, weight)| Edge::new(*origin, *destination, *weight))
            .collect(),
        directed,
    }
}

/// 9 个顶点的连通图
pub fn complex() -> Graph {
    build(
        false,
        &[
            ("A", 150.0, 100.0, "B C E"),
            ("B", 300.0, 80.0, "A C D F"),
            ("C", 200.0, 200.0, "A B D G"),
            ("D", 400.0, 150.0, "B C F H"),
            ("E", 100.0, 250.0, "A G I"),
            ("F", 450.0, 80.0, "B D H"),
            ("G", 150.0, 320.0, "C E I"),
            ("H", 500.0, 200.0, "D F"),
            ("I", 80.0, 380.0, "E G"),
        ],
        &[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("A", "E", 7.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("B", "F", 8.0),
            ("C", "D", 3.0),
            ("C", "G", 6.0),
            ("D", "F", 2.0),
            ("D", "H", 4.0),
            ("E", "G", 3.0),
            ("E", "I", 5.0),
            ("F", "H", 1.0),
            ("G", "I", 2.0),
        ],
    )
}

/// 三角形、路径、星形和一个孤立顶点
pub fn disconnected() -> Graph {
    build(
        false,
        &[
            ("A", 120.0, 100.0, "B C"),
            ("B", 200.0, 60.0, "A C"),
            ("C", 200.0, 140.0, "A B"),
            ("D", 320.0, 100.0, "E"),
            ("E", 400.0, 100.0, "D F"),
            ("F", 480.0, 100.0, "E"),
            ("G", 300.0, 250.0, "H I J"),
            ("H", 250.0, 200.0, "G"),
            ("I", 350.0, 200.0, "G"),
            ("J", 300.0, 300.0, "G"),
            ("K", 500.0, 250.0, ""),
        ],
        &[
            ("A", "B", 3.0),
            ("B", "C", 4.0),
            ("C", "A", 5.0),
            ("D", "E", 6.0),
            ("E", "F", 7.0),
            ("G", "H", 2.0),
            ("G", "I", 3.0),
            ("G", "J", 4.0),
        ],
    )
}

/// 6 个顶点的稠密图
pub fn dense() -> Graph {
    build(
        false,
        &[
            ("A", 200.0, 80.0, "B C D E"),
            ("B", 350.0, 120.0, "A C D F"),
            ("C", 400.0, 250.0, "A B E F"),
            ("D", 250.0, 300.0, "A B E F"),
            ("E", 100.0, 250.0, "A C D F"),
            ("F", 150.0, 150.0, "B C D E"),
        ],
        &[
            ("A", "B", 10.0),
            ("A", "C", 15.0),
            ("A", "D", 20.0),
            ("A", "E", 12.0),
            ("B", "C", 8.0),
            ("B", "D", 25.0),
            ("B", "F", 14.0),
            ("C", "E", 18.0),
            ("C", "F", 6.0),
            ("D", "E", 9.0),
            ("D", "F", 11.0),
            ("E", "F", 7.0),
        ],
    )
}

/// 无环的树
pub fn tree() -> Graph {
    build(
        false,
        &[
            ("Root", 300.0, 80.0, "A B"),
            ("A", 200.0, 150.0, "Root C D"),
            ("B", 400.0, 150.0, "Root E F"),
            ("C", 150.0, 220.0, "A G"),
            ("D", 250.0, 220.0, "A H"),
            ("E", 350.0, 220.0, "B"),
            ("F", 450.0, 220.0, "B I J"),
            ("G", 100.0, 290.0, "C"),
            ("H", 250.0, 290.0, "D"),
            ("I", 420.0, 290.0, "F"),
            ("J", 480.0, 290.0, "F"),
        ],
        &[
            ("Root", "A", 5.0),
            ("Root", "B", 3.0),
            ("A", "C", 4.0),
            ("A", "D", 6.0),
            ("B", "E", 2.0),
            ("B", "F", 7.0),
            ("C", "G", 3.0),
            ("D", "H", 4.0),
            ("F", "I", 1.0),
            ("F", "J", 2.0),
        ],
    )
}

/// 3x3 网格，所有边权为 1
pub fn grid3x3() -> Graph {
    build(
        false,
        &[
            ("1,1", 150.0, 100.0, "1,2 2,1"),
            ("1,2", 250.0, 100.0, "1,1 1,3 2,2"),
            ("1,3", 350.0, 100.0, "1,2 2,3"),
            ("2,1", 150.0, 200.0, "1,1 2,2 3,1"),
            ("2,2", 250.0, 200.0, "1,2 2,1 2,3 3,2"),
            ("2,3", 350.0, 200.0, "1,3 2,2 3,3"),
            ("3,1", 150.0, 300.0, "2,1 3,2"),
            ("3,2", 250.0, 300.0, "2,2 3,1 3,3"),
            ("3,3", 350.0, 300.0, "2,3 3,2"),
        ],
        &[
            ("1,1", "1,2", 1.0),
            ("1,2", "1,3", 1.0),
            ("2,1", "2,2", 1.0),
            ("2,2", "2,3", 1.0),
            ("3,1", "3,2", 1.0),
            ("3,2", "3,3", 1.0),
            ("1,1", "2,1", 1.0),
            ("1,2", "2,2", 1.0),
            ("1,3", "2,3", 1.0),
            ("2,1", "3,1", 1.0),
            ("2,2", "3,2", 1.0),
            ("2,3", "3,3", 1.0),
        ],
    )
}

/// 有向图示例（无环）
pub fn digraph() -> Graph {
    build(
        true,
        &[
            ("A", 150.0, 100.0, "B C"),
            ("B", 350.0, 100.0, "D"),
            ("C", 200.0, 200.0, "D E"),
            ("D", 400.0, 200.0, "E"),
            ("E", 300.0, 300.0, ""),
        ],
        &[
            ("A", "B", 5.0),
            ("A", "C", 3.0),
            ("B", "D", 2.0),
            ("C", "D", 4.0),
            ("C", "E", 6.0),
            ("D", "E", 1.0),
        ],
    )
}

/// 不连通的有向图
pub fn digraph_disconnected() -> Graph {
    build(
        true,
        &[
            ("A", 120.0, 100.0, "B"),
            ("B", 220.0, 100.0, "C"),
            ("C", 170.0, 180.0, ""),
            ("D", 350.0, 100.0, "E"),
            ("E", 450.0, 100.0, ""),
            ("F", 300.0, 250.0, ""),
        ],
        &[("A", "B", 2.0), ("B", "C", 3.0), ("D", "E", 1.0)],
    )
}

/// 4 行 5 列的网格 `A1..D5`
///
/// 相邻顶点的坐标相距 100，边权不小于 100，因此曼哈顿启发式是可采纳的
pub fn grid_a1_d5() -> Graph {
    const ROWS: [char; 4] = ['A', 'B', 'C', 'D'];
    const COLUMNS: usize = 5;
    const SPACING: f64 = 100.0;

    let id = |row: usize, column: usize| format!("{}{}", ROWS[row], column + 1);
    // 部分边的权重高于坐标距离
    let weight = |row: usize, column: usize, horizontal: bool| -> f64 {
        match (row + column) % 3 {
            0 if horizontal => 150.0,
            1 if !horizontal => 120.0,
            _ => 100.0,
        }
    };

    let mut graph = Graph::undirected();
    for row in 0..ROWS.len() {
        for column in 0..COLUMNS {
            graph.vertices.push(Vertex::new(
                id(row, column),
                (column as f64 + 1.0) * SPACING,
                (row as f64 + 1.0) * SPACING,
            ));
        }
    }

    for row in 0..ROWS.len() {
        for column in 0..COLUMNS {
            if column + 1 < COLUMNS {
                connect(
                    &mut graph,
                    row * COLUMNS + column,
                    row * COLUMNS + column + 1,
                    weight(row, column, true),
                );
            }
            if row + 1 < ROWS.len() {
                connect(
                    &mut graph,
                    row * COLUMNS + column,
                    (row + 1) * COLUMNS + column,
                    weight(row, column, false),
                );
            }
        }
    }

    graph
}

fn connect(graph: &mut Graph, a: usize, b: usize, weight: f64) {
    let a_id = graph.vertices[a].id.clone();
    let b_id = graph.vertices[b].id.clone();
    graph.vertices[a].adjacency.push(b_id.clone());
    graph.vertices[b].adjacency.push(a_id.clone());
    graph.edges.push(Edge::new(a_id, b_id, weight));
}

/// 全部预置图
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            key: "complex",
            name: "Connected graph (9 vertices)",
            graph: complex(),
        },
        Preset {
            key: "disconnected",
            name: "Disconnected graph (4 components)",
            graph: disconnected(),
        },
        Preset {
            key: "dense",
            name: "Dense graph (almost complete)",
            graph: dense(),
        },
        Preset {
            key: "tree",
            name: "Tree (no cycles)",
            graph: tree(),
        },
        Preset {
            key: "grid3x3",
            name: "3x3 grid",
            graph: grid3x3(),
        },
        Preset {
            key: "blank",
            name: "Blank graph",
            graph: Graph::undirected(),
        },
        Preset {
            key: "digraph",
            name: "Directed graph example",
            graph: digraph(),
        },
        Preset {
            key: "digraph_disconnected",
            name: "Disconnected directed graph",
            graph: digraph_disconnected(),
        },
        Preset {
            key: "grid_a1_d5",
            name: "A1..D5 grid (A* example)",
            graph: grid_a1_d5(),
        },
    ]
}

/// 按 key 查找预置图
pub fn preset(key: &str) -> Option<Graph> {
    presets()
        .into_iter()
        .find(|p| p.key == key)
        .map(|p| p.graph)
}
