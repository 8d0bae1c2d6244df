// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::engine::DEFAULT_MINIMUM_DAYS;
use crate::model::Task;
use crate::types::TaskStatus;

/// Top-level snapshot file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// project = "harbor"
/// minimum_days = 14
///
/// [task.design]
/// planned_start = "2026-03-02"
/// planned_due = "2026-03-06"
/// status = "in-progress"
/// dependencies = ["kickoff"]
/// ```
///
/// All sections are optional. Dates stay as strings here so that a bad date
/// on one task does not reject the whole file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSnapshotFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<id>]`, keyed by task id.
    #[serde(default)]
    pub task: BTreeMap<String, RawTaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Owning project id, copied onto every task.
    #[serde(default)]
    pub project: String,

    /// Floor on the visible window length, in days.
    #[serde(default = "default_minimum_days")]
    pub minimum_days: u32,
}

fn default_minimum_days() -> u32 {
    DEFAULT_MINIMUM_DAYS
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            project: String::new(),
            minimum_days: default_minimum_days(),
        }
    }
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTaskConfig {
    /// Display title; defaults to the task id.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub planned_start: Option<String>,
    #[serde(default)]
    pub planned_due: Option<String>,

    /// Baseline dates fall back to the planned ones field by field.
    #[serde(default)]
    pub baseline_start: Option<String>,
    #[serde(default)]
    pub baseline_due: Option<String>,

    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_due: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    /// Explicit progress; clamped to 0..=100 by the engine.
    #[serde(default)]
    pub percent_complete: Option<i64>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub milestone: bool,

    #[serde(default)]
    pub assignee: Option<String>,
}

/// A validated snapshot: global settings plus engine-ready tasks.
///
/// Only constructed through `TryFrom<RawSnapshotFile>`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub config: ConfigSection,
    pub tasks: Vec<Task>,
    /// Number of `[task.*]` sections dropped for lack of usable planned dates.
    pub skipped: usize,
}

impl Snapshot {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<Task>, skipped: usize) -> Self {
        Self {
            config,
            tasks,
            skipped,
        }
    }
}
