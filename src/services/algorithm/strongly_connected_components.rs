//! 强连通分量算法模块
//!
//! 有向图强连通分量检测（Tarjan算法），使用显式栈帧代替递归

use super::connectivity::{ComponentsResult, ConnectivityMode};
use super::trace::braced;
use crate::graph::Graph;

/// Tarjan 的栈帧
struct Frame {
    vertex: usize,
    successors: Vec<usize>,
    cursor: usize,
}

/// 单次运行的状态
struct TarjanState {
    counter: usize,
    index: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            counter: 0,
            index: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, graph: &Graph, vertex: usize) -> Frame {
        self.index[vertex] = Some(self.counter);
        self.low[vertex] = self.counter;
        self.counter += 1;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;

        let successors = graph
            .neighbors(vertex)
            .into_iter()
            .map(|n| n.index)
            .collect();
        Frame {
            vertex,
            successors,
            cursor: 0,
        }
    }
}

/// 强连通分量算法结构体
pub struct StronglyConnectedComponents;

impl StronglyConnectedComponents {
    /// 使用Tarjan算法查找有向图的所有强连通分量
    ///
    /// 分量按完成顺序输出，分量内的顶点按 index 升序
    pub fn find(graph: &Graph) -> ComponentsResult {
        let mut result = ComponentsResult {
            mode: ConnectivityMode::Strong,
            ..Default::default()
        };
        let mut state = TarjanState::new(graph.vertex_count());

        result.trace.push("=== TARJAN STRONGLY CONNECTED COMPONENTS ===");
        result
            .trace
            .push(format!("Vertices in the graph: {}", graph.vertex_count()));

        for root in 0..graph.vertex_count() {
            if state.index[root].is_some() {
                continue;
            }

            result.trace.blank();
            result
                .trace
                .push(format!("--- DFS from {} ---", graph.vertices[root].id));

            let mut frames = vec![state.enter(graph, root)];
            Self::log_entry(graph, &state, root, &mut result);

            while let Some(frame) = frames.last_mut() {
                let v = frame.vertex;

                if let Some(&w) = frame.successors.get(frame.cursor) {
                    frame.cursor += 1;
                    match state.index[w] {
                        None => {
                            frames.push(state.enter(graph, w));
                            Self::log_entry(graph, &state, w, &mut result);
                        }
                        Some(w_index) if state.on_stack[w] => {
                            state.low[v] = state.low[v].min(w_index);
                            let from = &graph.vertices[v].id;
                            result.trace.push(format!(
                                "  {} -> {} is on the stack: low({}) = {}",
                                from, graph.vertices[w].id, from, state.low[v]
                            ));
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                frames.pop();

                if Some(state.low[v]) == state.index[v] {
                    let mut component = Vec::new();
                    while let Some(top) = state.stack.pop() {
                        state.on_stack[top] = false;
                        component.push(top);
                        if top == v {
                            break;
                        }
                    }
                    component.reverse();
                    let ids: Vec<String> = component
                        .iter()
                        .map(|&i| graph.vertices[i].id.clone())
                        .collect();
                    result.trace.push(format!(
                        "  {} is a root (low = index = {}): component {}",
                        graph.vertices[v].id,
                        state.low[v],
                        braced(&ids)
                    ));
                    result.components.push(ids);
                }

                if let Some(parent) = frames.last() {
                    let p = parent.vertex;
                    state.low[p] = state.low[p].min(state.low[v]);
                }
            }
        }

        for (i, vertex) in graph.vertices.iter().enumerate() {
            if let Some(index) = state.index[i] {
                result.index.insert(vertex.id.clone(), index);
                result.low_link.insert(vertex.id.clone(), state.low[i]);
            }
        }

        result.count = result.components.len();
        let trace = &mut result.trace;
        trace.blank();
        trace.push("=== SEARCH FINISHED ===");
        for (i, component) in result.components.iter().enumerate() {
            trace.push(format!("SCC {}: {}", i + 1, braced(component)));
        }
        trace.push(format!("Strongly connected components: {}", result.count));
        if result.count == 1 {
            trace.push("The graph is STRONGLY CONNECTED");
        }

        result.assign_colors();
        log::debug!("found {} strongly connected components", result.count);
        result
    }

    fn log_entry(
        graph: &Graph,
        state: &TarjanState,
        vertex: usize,
        result: &mut ComponentsResult,
    ) {
        result.trace.push(format!(
            "Visiting {}: index = low = {}",
            graph.vertices[vertex].id,
            state.low[vertex]
        ));
    }
}
