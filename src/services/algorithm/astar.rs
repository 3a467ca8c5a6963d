//! A*算法模块
//!
//! 以顶点坐标的曼哈顿距离作为启发式的最短路径搜索。
//! 开放列表保持插入顺序，f 值相同时先加入的顶点优先

use serde::Serialize;

use super::palette::{self, VertexColor};
use super::trace::{braced, joined, Trace};
use crate::core::{AlgorithmError, VertexRole};
use crate::graph::{Edge, Graph};

/// 搜索结束的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found,
    #[default]
    NoPath,
    /// 扩展次数超过 2·|V|，搜索被放弃
    IterationLimit,
}

/// 单个顶点的搜索信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexInfo {
    pub id: String,
    pub heuristic: f64,
    pub g: f64,
    pub f: f64,
    /// 是否已被扩展（进入关闭集）
    pub visited: bool,
    pub on_path: bool,
}

/// A* 结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct AStarResult {
    pub outcome: SearchOutcome,
    pub path: Vec<String>,
    pub path_edges: Vec<Edge>,
    pub cost: f64,
    /// 扩展顺序
    pub expanded: Vec<String>,
    /// 搜索中获得过 g 值的顶点，按图中顺序
    pub vertices: Vec<VertexInfo>,
    pub unexpanded: usize,
    /// 未被扩展的顶点所占百分比
    pub efficiency: f64,
    pub coloring: Vec<VertexColor>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl AStarResult {
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

    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    pub fn info(&self, id: &str) -> Option<&VertexInfo> {
        self.vertices.iter().find(|v| v.id == id)
    }
}

/// 单次搜索的状态
struct SearchState {
    g: Vec<f64>,
    h: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    open: Vec<usize>,
    closed: Vec<bool>,
}

impl SearchState {
    fn new(graph: &Graph, goal: usize) -> Self {
        let n = graph.vertex_count();
        let target = &graph.vertices[goal];
        let h = graph
            .vertices
            .iter()
            .map(|v| (v.x - target.x).abs() + (v.y - target.y).abs())
            .collect();
        Self {
            g: vec![f64::INFINITY; n],
            h,
            predecessor: vec![None; n],
            open: Vec::new(),
            closed: vec![false; n],
        }
    }

    fn f(&self, index: usize) -> f64 {
        self.g[index] + self.h[index]
    }

    /// 取出 f 最小的开放顶点；相同 f 时取开放列表中靠前的
    fn pop_best(&mut self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (position, &vertex) in self.open.iter().enumerate() {
            let f = self.f(vertex);
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((position, f));
            }
        }
        best.map(|(position, _)| self.open.remove(position))
    }
}

/// A*算法结构体
pub struct AStar;

impl AStar {
    /// 查找从 `start` 到 `goal` 的路径
    ///
    /// # 参数
    /// - `graph`: 顶点带坐标的图
    /// - `start`: 起始顶点 id
    /// - `goal`: 目标顶点 id
    ///
    /// # 返回
    /// 路径、代价、扩展顺序和每个顶点的 g/h/f 值
    pub fn run(graph: &Graph, start: &str, goal: &str) -> AStarResult {
        let Some(start_index) = graph.index_of(start) else {
            return AStarResult::failed(AlgorithmError::vertex_not_found(VertexRole::Start, start));
        };
        let Some(goal_index) = graph.index_of(goal) else {
            return AStarResult::failed(AlgorithmError::vertex_not_found(VertexRole::Goal, goal));
        };

        let mut state = SearchState::new(graph, goal_index);
        let mut result = AStarResult::default();

        if start_index == goal_index {
            state.g[start_index] = 0.0;
            state.closed[start_index] = true;
            result.outcome = SearchOutcome::Found;
            result.path.push(start.to_string());
            result.expanded.push(start.to_string());
            result
                .trace
                .push(format!("Start and goal are the same vertex ({}); cost 0", start));
            Self::finish(graph, &state, start_index, goal_index, &mut result);
            return result;
        }

        if graph.directed {
            result.trace.push(
                "Warning: directed graph, the search only follows outgoing edges",
            );
        }

        state.g[start_index] = 0.0;
        state.open.push(start_index);

        let trace = &mut result.trace;
        trace.push(format!("Starting A* from {} to {}", start, goal));
        trace.push("Heuristic: Manhattan distance |x1 - x2| + |y1 - y2|");
        trace.push(format!(
            "h({}) = {}, f({}) = {}",
            start,
            state.h[start_index],
            start,
            state.f(start_index)
        ));

        let mut steps = 0usize;

        while let Some(current) = state.pop_best() {
            let current_id = &graph.vertices[current].id;
            state.closed[current] = true;
            result.expanded.push(current_id.clone());

            trace.blank();
            trace.push(format!(
                "--- Expanding {} (g = {}, h = {}, f = {}) ---",
                current_id,
                state.g[current],
                state.h[current],
                state.f(current)
            ));

            if current == goal_index {
                result.outcome = SearchOutcome::Found;
                trace.push(format!("Goal {} reached", goal));
                break;
            }

            for (neighbor, edge_index) in Self::successors(graph, current) {
                if state.closed[neighbor] {
                    continue;
                }
                let edge = &graph.edges[edge_index];
                let neighbor_id = &graph.vertices[neighbor].id;
                let tentative = state.g[current] + edge.weight;

                if tentative < state.g[neighbor] {
                    state.g[neighbor] = tentative;
                    state.predecessor[neighbor] = Some(current);
                    if !state.open.contains(&neighbor) {
                        state.open.push(neighbor);
                    }
                    trace.push(format!(
                        "  -> {}: g = {}, h = {}, f = {} (via {})",
                        neighbor_id,
                        tentative,
                        state.h[neighbor],
                        state.f(neighbor),
                        current_id
                    ));
                } else {
                    trace.push(format!(
                        "  -> {}: {} is not better than {}",
                        neighbor_id, tentative, state.g[neighbor]
                    ));
                }
            }

            let open_ids: Vec<&str> = state
                .open
                .iter()
                .map(|&i| graph.vertices[i].id.as_str())
                .collect();
            trace.push(format!("Open list: {}", braced(&open_ids)));

            steps += 1;
            if limit_reached(steps, graph.vertex_count()) {
                result.outcome = SearchOutcome::IterationLimit;
                trace.push(format!(
                    "Warning: iteration limit of {} reached, search abandoned",
                    steps
                ));
                break;
            }
        }

        if result.outcome == SearchOutcome::Found {
            let path = Self::reconstruct_path(&state, goal_index);
            for pair in path.windows(2) {
                let a = &graph.vertices[pair[0]].id;
                let b = &graph.vertices[pair[1]].id;
                if let Some(edge) = graph.find_edge(a, b) {
                    result.path_edges.push(edge.clone());
                }
            }
            result.path = path
                .iter()
                .map(|&i| graph.vertices[i].id.clone())
                .collect();
            result.cost = state.g[goal_index];
        } else if result.outcome == SearchOutcome::NoPath {
            trace.blank();
            trace.push(format!("Open list is empty: no path from {} to {}", start, goal));
        }

        Self::finish(graph, &state, start_index, goal_index, &mut result);

        log::debug!(
            "astar {} -> {}: {:?} after {} expansions",
            start,
            goal,
            result.outcome,
            result.expanded.len()
        );
        result
    }

    /// 可以从 `index` 走到的顶点及对应的边
    ///
    /// 有向图只沿出边；无向图使用邻接表，边可以按任意方向匹配
    fn successors(graph: &Graph, index: usize) -> Vec<(usize, usize)> {
        if graph.directed {
            return graph
                .neighbors(index)
                .into_iter()
                .filter_map(|n| n.edge.map(|edge| (n.index, edge)))
                .collect();
        }

        let id = &graph.vertices[index].id;
        graph
            .weak_neighbors(index)
            .into_iter()
            .filter_map(|neighbor| {
                graph
                    .find_edge_index(id, &graph.vertices[neighbor].id)
                    .map(|edge| (neighbor, edge))
            })
            .collect()
    }

    fn reconstruct_path(state: &SearchState, goal: usize) -> Vec<usize> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(previous) = state.predecessor[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    /// 填充顶点信息、着色、效率统计以及 trace 的总结部分
    fn finish(
        graph: &Graph,
        state: &SearchState,
        start: usize,
        goal: usize,
        result: &mut AStarResult,
    ) {
        let total = graph.vertex_count();

        result.vertices = graph
            .vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| state.g[*i].is_finite())
            .map(|(i, v)| VertexInfo {
                id: v.id.clone(),
                heuristic: state.h[i],
                g: state.g[i],
                f: state.f(i),
                visited: state.closed[i],
                on_path: result.path.contains(&v.id),
            })
            .collect();

        result.coloring = graph
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let color = if i == start {
                    palette::GREEN
                } else if i == goal {
                    palette::RED
                } else if result.path.contains(&v.id) {
                    palette::BLUE
                } else if state.closed[i] {
                    palette::AMBER
                } else {
                    palette::SLATE
                };
                VertexColor::new(v.id.clone(), color)
            })
            .collect();

        result.unexpanded = total - result.expanded.len().min(total);
        result.efficiency = if total == 0 {
            0.0
        } else {
            result.unexpanded as f64 / total as f64 * 100.0
        };

        let trace = &mut result.trace;
        trace.blank();
        trace.push("=== RESULT ===");
        if result.outcome == SearchOutcome::Found {
            trace.push(format!("Path: {}", joined(&result.path, " -> ")));
            trace.push(format!("Cost: {}", result.cost));
        } else {
            trace.push("No path found");
        }
        trace.push(format!("Expanded: {}", joined(&result.expanded, ", ")));
        trace.push(format!(
            "Vertices not expanded: {} of {} ({:.1}% saved)",
            result.unexpanded, total, result.efficiency
        ));
    }
}

/// 扩展次数达到 2|V| 时放弃搜索
fn limit_reached(steps: usize, vertex_count: usize) -> bool {
    steps >= 2 * vertex_count
}
