//! 算法执行轨迹
//!
//! 每个算法结果都带有一份按顺序记录的步骤说明，供界面逐步展示

use serde::Serialize;
use std::fmt;

/// 有序的步骤记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只有一行说明的轨迹，用于提前返回的结果
    pub fn single(step: impl Into<String>) -> Self {
        let mut trace = Self::new();
        trace.push(step);
        trace
    }

    pub fn push(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// 追加一个空行，用于分隔阶段
    pub fn blank(&mut self) {
        self.steps.push(String::new());
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 是否有任意一行包含给定片段
    pub fn mentions(&self, fragment: &str) -> bool {
        self.steps.iter().any(|s| s.contains(fragment))
    }

    pub fn last(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{:02}: {}", index + 1, step)?;
        }
        Ok(())
    }
}

/// 把 id 列表格式化为 `{A, B, C}`
pub(crate) fn braced<S: AsRef<str>>(items: &[S]) -> String {
    format!("{{{}}}", joined(items, ", "))
}

pub(crate) fn joined<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}
