//! GraphLab - step-by-step classical graph algorithms
//!
//! Every algorithm is a pure function over a small in-memory graph and returns
//! a self-contained result with a human-readable trace of its steps.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
