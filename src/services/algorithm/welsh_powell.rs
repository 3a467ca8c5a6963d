//! Welsh-Powell 着色模块
//!
//! 按度数降序贪心着色，仅适用于无向图

use serde::Serialize;
use std::collections::HashMap;

use super::palette::{self, VertexColor};
use super::trace::{braced, Trace};
use crate::core::{AlgorithmError, AlgorithmKind};
use crate::graph::Graph;

/// 着色结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColoringResult {
    /// 顶点 -> 颜色编号（从 1 开始）
    pub colors: HashMap<String, usize>,
    pub total_colors: usize,
    /// 按度数降序的处理顺序
    pub order: Vec<String>,
    /// 事后检查：相邻顶点颜色都不同
    pub valid: bool,
    /// 颜色相同的相邻顶点对
    pub conflicts: Vec<(String, String)>,
    pub coloring: Vec<VertexColor>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl ColoringResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn color_of(&self, id: &str) -> Option<usize> {
        self.colors.get(id).copied()
    }

    /// 使用颜色 `color` 的顶点，按图中顺序
    pub fn class(&self, graph: &Graph, color: usize) -> Vec<String> {
        graph
            .vertices
            .iter()
            .filter(|v| self.color_of(&v.id) == Some(color))
            .map(|v| v.id.clone())
            .collect()
    }
}

/// Welsh-Powell算法结构体
pub struct WelshPowell;

impl WelshPowell {
    /// 为无向图着色
    pub fn run(graph: &Graph) -> ColoringResult {
        if graph.directed {
            let error = AlgorithmError::directed_not_supported(AlgorithmKind::WelshPowell);
            return ColoringResult {
                trace: Trace::single(error.to_string()),
                error: Some(error),
                ..Default::default()
            };
        }

        let mut result = ColoringResult::default();
        let trace = &mut result.trace;

        trace.push("=== WELSH-POWELL GRAPH COLORING ===");
        trace.push(format!("Vertices: {}", graph.vertex_count()));
        trace.push("Goal: color the vertices with as few colors as possible");
        trace.blank();

        // sort_by 是稳定排序，度数相同的顶点保持图中顺序
        let mut sorted: Vec<usize> = (0..graph.vertex_count()).collect();
        sorted.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));
        result.order = sorted
            .iter()
            .map(|&i| graph.vertices[i].id.clone())
            .collect();

        trace.push("Step 1: vertices sorted by degree (descending)");
        for (position, &i) in sorted.iter().enumerate() {
            trace.push(format!(
                "   {}. {} (degree: {})",
                position + 1,
                graph.vertices[i].id,
                graph.degree(i)
            ));
        }
        trace.blank();
        trace.push("Step 2: coloring");

        let mut colors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let color_at = |colors: &[Option<usize>], id: &str| -> Option<usize> {
            graph.index_of(id).and_then(|i| colors[i])
        };
        let mut current = 0usize;

        for &seed in &sorted {
            if colors[seed].is_some() {
                continue;
            }
            current += 1;
            let seed_id = &graph.vertices[seed].id;
            colors[seed] = Some(current);
            trace.blank();
            trace.push(format!(
                "Using color {} ({})",
                current,
                palette::cycled(current - 1)
            ));
            trace.push(format!("   coloring {} with color {}", seed_id, current));

            for &other in &sorted {
                if colors[other].is_some() {
                    continue;
                }
                let vertex = &graph.vertices[other];
                let conflicting: Vec<&str> = vertex
                    .adjacency
                    .iter()
                    .filter(|n| color_at(&colors, n) == Some(current))
                    .map(String::as_str)
                    .collect();

                if !vertex.is_adjacent_to(seed_id) && conflicting.is_empty() {
                    colors[other] = Some(current);
                    trace.push(format!("   coloring {} with color {}", vertex.id, current));
                } else if !conflicting.is_empty() {
                    trace.push(format!(
                        "   {} cannot use color {} (conflict with: {})",
                        vertex.id,
                        current,
                        conflicting.join(", ")
                    ));
                } else {
                    trace.push(format!(
                        "   {} cannot use color {} (adjacent to {})",
                        vertex.id, current, seed_id
                    ));
                }
            }
        }

        result.total_colors = current;
        for (i, vertex) in graph.vertices.iter().enumerate() {
            if let Some(color) = colors[i] {
                result.colors.insert(vertex.id.clone(), color);
            }
        }

        trace.blank();
        trace.push("=== COLORING FINISHED ===");
        trace.push(format!("Colors used: {}", result.total_colors));
        for color in 1..=result.total_colors {
            let members: Vec<&str> = graph
                .vertices
                .iter()
                .enumerate()
                .filter(|(i, _)| colors[*i] == Some(color))
                .map(|(_, v)| v.id.as_str())
                .collect();
            trace.push(format!(
                "   Color {} ({}): {}",
                color,
                palette::cycled(color - 1),
                braced(&members)
            ));
        }

        for (i, vertex) in graph.vertices.iter().enumerate() {
            for neighbor in &vertex.adjacency {
                let Some(j) = graph.index_of(neighbor) else {
                    continue;
                };
                if i < j && colors[i].is_some() && colors[i] == colors[j] {
                    trace.push(format!(
                        "ERROR: {} and {} are adjacent and share color {}",
                        vertex.id,
                        neighbor,
                        colors[i].unwrap_or(0)
                    ));
                    result.conflicts.push((vertex.id.clone(), neighbor.clone()));
                }
            }
        }
        result.valid = result.conflicts.is_empty();
        if result.valid {
            trace.push("Valid coloring: adjacent vertices always have different colors");
        }

        result.coloring = graph
            .vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                colors[i].map(|color| {
                    VertexColor::new(v.id.clone(), palette::cycled(color - 1))
                        .labeled(format!("color {}", color))
                })
            })
            .collect();

        log::debug!("welsh-powell used {} colors", result.total_colors);
        result
    }
}
