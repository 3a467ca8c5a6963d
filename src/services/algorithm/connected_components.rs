//! 连通分量算法模块
//!
//! 忽略边的方向，从每个未访问顶点出发做一次深度优先搜索

use super::connectivity::{ComponentsResult, ConnectivityMode};
use super::trace::braced;
use crate::graph::Graph;

/// 连通分量算法结构体
pub struct ConnectedComponents;

impl ConnectedComponents {
    /// 查找所有（弱）连通分量
    ///
    /// 分量按其第一个顶点在图中的顺序排列，分量内按 DFS 先序排列。
    /// 有向图上会在 trace 中给出警告并忽略方向
    pub fn find(graph: &Graph) -> ComponentsResult {
        let mut result = ComponentsResult {
            mode: ConnectivityMode::Weak,
            ..Default::default()
        };
        let mut visited = vec![false; graph.vertex_count()];

        let trace = &mut result.trace;
        if graph.directed {
            trace.push("Warning: directed graph, edge direction is ignored (weak components)");
        }
        trace.push("=== SEARCHING CONNECTED COMPONENTS ===");
        trace.push(format!("Vertices in the graph: {}", graph.vertex_count()));

        for root in 0..graph.vertex_count() {
            if visited[root] {
                continue;
            }

            trace.blank();
            trace.push(format!(
                "--- New component starting at {} ---",
                graph.vertices[root].id
            ));

            let mut component: Vec<String> = Vec::new();
            // (顶点, 邻居列表, 下一个邻居位置)
            let mut stack: Vec<(usize, Vec<usize>, usize)> = Vec::new();

            visited[root] = true;
            component.push(graph.vertices[root].id.clone());
            trace.push(format!("  -> added {} to the component", graph.vertices[root].id));
            stack.push((root, graph.weak_neighbors(root), 0));

            while let Some((vertex, neighbors, cursor)) = stack.last_mut() {
                let Some(&next) = neighbors.get(*cursor) else {
                    stack.pop();
                    continue;
                };
                *cursor += 1;
                if visited[next] {
                    continue;
                }

                let from = &graph.vertices[*vertex].id;
                let id = &graph.vertices[next].id;
                trace.push(format!("    -> exploring neighbor {} of {}", id, from));
                visited[next] = true;
                component.push(id.clone());
                trace.push(format!("  -> added {} to the component", id));
                stack.push((next, graph.weak_neighbors(next), 0));
            }

            trace.push(format!(
                "Component {}: {}",
                result.components.len() + 1,
                braced(&component)
            ));
            result.components.push(component);
        }

        result.count = result.components.len();
        trace.blank();
        trace.push("=== SEARCH FINISHED ===");
        trace.push(format!("Connected components found: {}", result.count));
        if result.count == 1 {
            trace.push("The graph is CONNECTED (a single component)");
        } else {
            trace.push("The graph is DISCONNECTED (several components)");
        }

        result.assign_colors();
        log::debug!("found {} connected components", result.count);
        result
    }
}
