//! 可视化配色
//!
//! 算法只输出颜色字符串，渲染层直接用作描边/填充色

use serde::Serialize;

/// 按编号循环使用的调色板（分量、着色）
pub const PALETTE: [&str; 10] = [
    "#ef4444", "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#f97316", "#06b6d4", "#84cc16",
    "#ec4899", "#6b7280",
];

pub const GREEN: &str = "#22c55e";
pub const RED: &str = "#ef4444";
pub const BLUE: &str = "#3b82f6";
pub const AMBER: &str = "#f59e0b";
pub const EMERALD: &str = "#10b981";
pub const SLATE: &str = "#94a3b8";

/// 第 index 个（从 0 开始）调色板颜色
pub fn cycled(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// 单个顶点的显示颜色
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexColor {
    pub id: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl VertexColor {
    pub fn new(id: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            label: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// 在着色列表中查找某个顶点的颜色
pub fn color_of<'a>(colors: &'a [VertexColor], id: &str) -> Option<&'a str> {
    colors
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.color.as_str())
}
