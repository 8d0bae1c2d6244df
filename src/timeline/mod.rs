// src/timeline/mod.rs

//! Visible window and per-task bar layout.
//!
//! - [`window`] derives the date range the schedule view must cover.
//! - [`rows`] positions planned, baseline and actual bars inside that range.

pub mod rows;
pub mod window;

pub use rows::{BarSpan, TaskRow, build_rows};
pub use window::{TimelineWindow, compute_window};
