// src/dag/mod.rs

//! Dependency graph and critical-path analysis.
//!
//! - [`graph`] holds the directed graph of visible tasks (dependency -> dependent).
//! - [`critical_path`] runs the longest-path pass and detects cycles.

pub mod critical_path;
pub mod graph;

pub use critical_path::{CriticalPath, critical_path_of, find_critical_path};
pub use graph::{DanglingDependency, DependencyGraph};
