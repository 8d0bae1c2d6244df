// src/timeline/rows.rs

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::model::{DateRange, Task};
use crate::timeline::window::TimelineWindow;
use crate::types::{TaskId, TaskStatus};

/// Position of one bar, in whole days from `window.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarSpan {
    pub offset: u32,
    pub span: u32,
}

impl BarSpan {
    /// Clamp `range` into `window`.
    ///
    /// A range entirely outside the window collapses to a one-day sliver at
    /// the nearest edge instead of disappearing.
    pub fn within(window: &TimelineWindow, range: DateRange) -> Self {
        let last = i64::from(window.day_count) - 1;
        let offset = window.offset_of(range.start).clamp(0, last);
        let end = window.offset_of(range.end).min(last);
        let span = (end - offset + 1).max(1);

        // Both values are bounded by `day_count`, which is a u32.
        Self {
            offset: offset as u32,
            span: span as u32,
        }
    }

    /// Last column covered by the bar (inclusive).
    pub fn last_column(&self) -> u32 {
        self.offset + self.span - 1
    }
}

/// Layout and display metrics for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub name: String,
    pub status: TaskStatus,
    pub planned_start: NaiveDate,
    pub planned_end: NaiveDate,
    pub planned: BarSpan,
    pub baseline: BarSpan,
    pub actual: Option<BarSpan>,
    pub planned_duration: i64,
    pub baseline_duration: i64,
    pub actual_duration: Option<i64>,
    pub percent_complete: u8,
    pub is_late: bool,
    pub is_milestone: bool,
    pub assignee_label: String,
    pub dependencies: Vec<TaskId>,
}

/// Lay out one row per task, ordered by planned start.
///
/// Tasks sharing a planned start keep their input order.
pub fn build_rows(tasks: &[Task], window: &TimelineWindow, today: NaiveDate) -> Vec<TaskRow> {
    let mut rows: Vec<TaskRow> = tasks.iter().map(|t| build_row(t, window, today)).collect();
    rows.sort_by_key(|r| r.planned_start);

    debug!(
        rows = rows.len(),
        late = rows.iter().filter(|r| r.is_late).count(),
        "built task rows"
    );
    rows
}

fn build_row(task: &Task, window: &TimelineWindow, today: NaiveDate) -> TaskRow {
    let resolved = task.resolve();

    let is_late = resolved.percent_complete < 100 && resolved.planned.end < today;

    TaskRow {
        id: task.id.clone(),
        name: task.name.clone(),
        status: task.status,
        planned_start: resolved.planned.start,
        planned_end: resolved.planned.end,
        planned: BarSpan::within(window, resolved.planned),
        baseline: BarSpan::within(window, resolved.baseline),
        actual: resolved.actual.map(|r| BarSpan::within(window, r)),
        planned_duration: resolved.planned.duration_days(),
        baseline_duration: resolved.baseline.duration_days(),
        actual_duration: resolved.actual.map(|r| r.duration_days()),
        percent_complete: resolved.percent_complete,
        is_late,
        is_milestone: task.is_milestone,
        assignee_label: resolved.assignee_label,
        dependencies: task.dependencies.clone(),
    }
}
