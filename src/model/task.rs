// src/model/task.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::dates::DateRange;
use crate::types::{TaskId, TaskStatus};

/// A task as handed to the engine by the persistence layer.
///
/// Only `planned` is mandatory. Baseline dates fall back to the plan and the
/// actual bar only exists once work has started.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: String,
    /// Display title; the snapshot loader defaults it to the id.
    pub name: String,
    pub planned: DateRange,
    pub baseline: Option<DateRange>,
    pub actual_start: Option<NaiveDate>,
    pub actual_due: Option<NaiveDate>,
    pub status: TaskStatus,
    /// Raw percent as entered; may be out of range.
    pub percent_complete: Option<i64>,
    /// Ids this task depends on. Ids outside the snapshot are ignored.
    pub dependencies: Vec<TaskId>,
    pub is_milestone: bool,
    pub assignee: Option<String>,
}

impl Task {
    /// Create a task with only planned dates set.
    pub fn new(id: impl Into<TaskId>, planned_start: NaiveDate, planned_due: NaiveDate) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            project_id: String::new(),
            planned: DateRange::new(planned_start, planned_due),
            baseline: None,
            actual_start: None,
            actual_due: None,
            status: TaskStatus::default(),
            percent_complete: None,
            dependencies: Vec::new(),
            is_milestone: false,
            assignee: None,
        }
    }

    /// Every date on this task that a timeline must be able to show.
    ///
    /// Baseline falls back to planned; actual dates are included when present,
    /// even when the actual pair is incomplete.
    pub fn scan_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let baseline = self.baseline.unwrap_or(self.planned);
        [
            Some(self.planned.start),
            Some(self.planned.end),
            Some(baseline.start),
            Some(baseline.end),
            self.actual_start,
            self.actual_due,
        ]
        .into_iter()
        .flatten()
    }

    /// Apply every fallback and correction rule once.
    pub fn resolve(&self) -> ResolvedTask {
        let planned = self.planned.normalized();
        let baseline = self.baseline.unwrap_or(self.planned).normalized();
        let actual = self
            .actual_start
            .map(|start| DateRange::new(start, self.actual_due.unwrap_or(start)).normalized());

        let percent_complete = match self.percent_complete {
            Some(p) => p.clamp(0, 100) as u8,
            None => self.status.derived_percent(),
        };

        let assignee_label = self
            .assignee
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNASSIGNED)
            .to_string();

        ResolvedTask {
            planned,
            baseline,
            actual,
            percent_complete,
            assignee_label,
        }
    }
}

/// Label used when a task has no usable assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Normalized view of a [`Task`]'s dates and display values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTask {
    pub planned: DateRange,
    pub baseline: DateRange,
    pub actual: Option<DateRange>,
    pub percent_complete: u8,
    pub assignee_label: String,
}
