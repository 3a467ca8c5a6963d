//! 服务层模块
//!
//! 算法实现以及统一的调度入口

pub mod algorithm;
pub mod runner;

// 重新导出常用服务
pub use algorithm::*;
pub use runner::{run, AlgorithmOutput, AlgorithmRequest};
