#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ganttline::config::{ConfigSection, RawSnapshotFile, RawTaskConfig, Snapshot};
use ganttline::model::{DateRange, Task};
use ganttline::types::{TaskId, TaskStatus};

/// Shorthand for a calendar date in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

/// Builder for engine-ready [`Task`]s.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, planned_start: NaiveDate, planned_due: NaiveDate) -> Self {
        Self {
            task: Task::new(id, planned_start, planned_due),
        }
    }

    /// Task starting on `start` and lasting `days` days (inclusive).
    pub fn lasting(id: &str, start: NaiveDate, days: i64) -> Self {
        let due = start + chrono::Duration::days(days - 1);
        Self::new(id, start, due)
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.task.project_id = project.to_string();
        self
    }

    pub fn baseline(mut self, start: NaiveDate, due: NaiveDate) -> Self {
        self.task.baseline = Some(DateRange::new(start, due));
        self
    }

    pub fn actual(mut self, start: NaiveDate, due: Option<NaiveDate>) -> Self {
        self.task.actual_start = Some(start);
        self.task.actual_due = due;
        self
    }

    pub fn actual_due_only(mut self, due: NaiveDate) -> Self {
        self.task.actual_start = None;
        self.task.actual_due = Some(due);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn percent(mut self, percent: i64) -> Self {
        self.task.percent_complete = Some(percent);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(TaskId::new(dep));
        self
    }

    pub fn milestone(mut self, val: bool) -> Self {
        self.task.is_milestone = val;
        self
    }

    pub fn assignee(mut self, who: &str) -> Self {
        self.task.assignee = Some(who.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for validated [`Snapshot`]s, going through the same conversion
/// as a TOML file.
pub struct SnapshotBuilder {
    raw: RawSnapshotFile,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawSnapshotFile {
                config: ConfigSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn project(mut self, project: &str) -> Self {
        self.raw.config.project = project.to_string();
        self
    }

    pub fn minimum_days(mut self, days: u32) -> Self {
        self.raw.config.minimum_days = days;
        self
    }

    /// Add a task with planned dates given as strings, exactly as they would
    /// appear in a snapshot file.
    pub fn with_task(mut self, id: &str, planned_start: &str, planned_due: &str) -> Self {
        self.raw.task.insert(
            id.to_string(),
            RawTaskConfig {
                planned_start: Some(planned_start.to_string()),
                planned_due: Some(planned_due.to_string()),
                ..RawTaskConfig::default()
            },
        );
        self
    }

    pub fn with_raw_task(mut self, id: &str, task: RawTaskConfig) -> Self {
        self.raw.task.insert(id.to_string(), task);
        self
    }

    pub fn raw(self) -> RawSnapshotFile {
        self.raw
    }

    pub fn build(self) -> Snapshot {
        Snapshot::try_from(self.raw).expect("Failed to build valid snapshot from builder")
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
