// src/engine/mod.rs

//! Timeline engine entry point.
//!
//! This module ties together, in order:
//! - the window calculator
//! - the row layout builder
//! - the dependency graph and critical-path finder
//! - the summarizer
//!
//! Everything here is a pure function of the task snapshot and
//! [`EngineOptions`]; nothing is cached between calls.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dag::{CriticalPath, DanglingDependency};
use crate::summary::Summary;
use crate::timeline::{TaskRow, TimelineWindow};

/// Default floor on the visible window length, in days.
pub const DEFAULT_MINIMUM_DAYS: u32 = 14;

/// Inputs that are not part of the task snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Minimum number of days the window must span.
    pub minimum_days: u32,
    /// Reference date for lateness and window placement.
    pub today: NaiveDate,
}

impl EngineOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            minimum_days: DEFAULT_MINIMUM_DAYS,
            today,
        }
    }

    pub fn with_minimum_days(mut self, minimum_days: u32) -> Self {
        self.minimum_days = minimum_days;
        self
    }
}

/// Everything the schedule view needs for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleReport {
    pub today: NaiveDate,
    pub window: TimelineWindow,
    pub rows: Vec<TaskRow>,
    pub critical_path: CriticalPath,
    pub summary: Summary,
    /// Dependencies that named tasks outside the snapshot.
    pub dangling: Vec<DanglingDependency>,
}

impl ScheduleReport {
    pub fn is_critical(&self, row: &TaskRow) -> bool {
        self.critical_path.contains(&row.id)
    }
}

pub mod pipeline;

pub use pipeline::compute_schedule;
