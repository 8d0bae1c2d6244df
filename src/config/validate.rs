// src/config/validate.rs

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::model::{RawSnapshotFile, RawTaskConfig, Snapshot};
use crate::errors::{GanttlineError, Result};
use crate::model::{DateRange, Task, parse_date};
use crate::types::TaskId;

impl TryFrom<RawSnapshotFile> for Snapshot {
    type Error = GanttlineError;

    fn try_from(raw: RawSnapshotFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_snapshot(&raw)?;

        let mut tasks = Vec::with_capacity(raw.task.len());
        let mut skipped = 0usize;
        for (id, task) in raw.task.iter() {
            match convert_task(&raw.config.project, id, task) {
                Some(t) => tasks.push(t),
                None => skipped += 1,
            }
        }

        warn_on_dependencies(&tasks);
        Ok(Snapshot::new_unchecked(raw.config, tasks, skipped))
    }
}

fn validate_raw_snapshot(raw: &RawSnapshotFile) -> Result<()> {
    if raw.config.minimum_days == 0 {
        return Err(GanttlineError::ConfigError(
            "[config].minimum_days must be >= 1 (got 0)".to_string(),
        ));
    }

    for (id, task) in raw.task.iter() {
        if id.trim().is_empty() {
            return Err(GanttlineError::ConfigError(
                "task ids must not be empty".to_string(),
            ));
        }
        if task.dependencies.iter().any(|d| d.trim().is_empty()) {
            return Err(GanttlineError::ConfigError(format!(
                "task '{}' has an empty id in `dependencies`",
                id
            )));
        }
    }
    Ok(())
}

/// Parse an optional date field, logging and dropping values that do not parse.
fn optional_date(task: &str, field: &str, value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        warn!(task, field, value = raw, "ignoring unparseable date");
    }
    parsed
}

fn convert_task(project: &str, id: &str, raw: &RawTaskConfig) -> Option<Task> {
    let planned_start = optional_date(id, "planned_start", raw.planned_start.as_deref());
    let planned_due = optional_date(id, "planned_due", raw.planned_due.as_deref());

    let planned = match (planned_start, planned_due) {
        (Some(s), Some(e)) => DateRange::new(s, e),
        (Some(d), None) | (None, Some(d)) => DateRange::new(d, d),
        (None, None) => {
            warn!(task = id, "skipping task without a usable planned date");
            return None;
        }
    };

    let baseline_start = optional_date(id, "baseline_start", raw.baseline_start.as_deref());
    let baseline_due = optional_date(id, "baseline_due", raw.baseline_due.as_deref());
    let baseline = if baseline_start.is_some() || baseline_due.is_some() {
        Some(DateRange::new(
            baseline_start.unwrap_or(planned.start),
            baseline_due.unwrap_or(planned.end),
        ))
    } else {
        None
    };

    let mut task = Task::new(id, planned.start, planned.end);
    task.project_id = project.to_string();
    if let Some(name) = raw.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        task.name = name.to_string();
    }
    task.baseline = baseline;
    task.actual_start = optional_date(id, "actual_start", raw.actual_start.as_deref());
    task.actual_due = optional_date(id, "actual_due", raw.actual_due.as_deref());
    task.status = raw.status;
    task.percent_complete = raw.percent_complete;
    task.dependencies = raw
        .dependencies
        .iter()
        .map(|d| TaskId::new(d.trim()))
        .collect();
    task.is_milestone = raw.milestone;
    task.assignee = raw.assignee.clone();
    Some(task)
}

/// Self-dependencies and references to unknown tasks are kept (the engine
/// tolerates both) but worth a warning.
fn warn_on_dependencies(tasks: &[Task]) {
    let known: HashSet<&TaskId> = tasks.iter().map(|t| &t.id).collect();
    for task in tasks {
        for dep in &task.dependencies {
            if *dep == task.id {
                warn!(task = %task.id, "task depends on itself; this forms a cycle");
            } else if !known.contains(dep) {
                warn!(task = %task.id, dependency = %dep, "dependency on unknown task");
            }
        }
    }
}
