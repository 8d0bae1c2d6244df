// src/engine/pipeline.rs

use tracing::{debug, warn};

use crate::dag::{DependencyGraph, critical_path_of};
use crate::engine::{EngineOptions, ScheduleReport};
use crate::model::Task;
use crate::summary::summarize;
use crate::timeline::{build_rows, compute_window};

/// Run the full pipeline over one project's task snapshot.
///
/// tasks -> window -> rows -> critical path -> summary. Dangling dependency
/// ids are logged here, at the caller boundary, and kept in the report.
pub fn compute_schedule(tasks: &[Task], options: &EngineOptions) -> ScheduleReport {
    let window = compute_window(tasks, options.minimum_days, options.today);
    let rows = build_rows(tasks, &window, options.today);

    let graph = DependencyGraph::from_rows(&rows);
    for d in graph.dangling() {
        warn!(task = %d.task, missing = %d.missing, "ignoring dependency on unknown task");
    }

    let critical_path = critical_path_of(&graph);
    let summary = summarize(&rows);

    debug!(
        tasks = tasks.len(),
        edges = graph.edge_count(),
        critical = critical_path.task_ids().len(),
        cycle = critical_path.is_cycle(),
        average_progress = summary.average_progress,
        "computed schedule"
    );

    ScheduleReport {
        today: options.today,
        window,
        rows,
        critical_path,
        summary,
        dangling: graph.dangling().to_vec(),
    }
}
