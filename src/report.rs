// src/report.rs

//! Plain-text and JSON rendering of a [`ScheduleReport`].
//!
//! The text form is meant for terminals: one line per row with a scaled
//! bar, `*` for tasks on the critical path and `!` for late tasks.

use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::dag::CriticalPath;
use crate::engine::ScheduleReport;
use crate::errors::Result;
use crate::timeline::BarSpan;
use crate::types::TaskId;

/// Widest bar drawn in the text report, in characters.
pub const MAX_BAR_WIDTH: u32 = 60;

pub fn render(report: &ScheduleReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &ScheduleReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render_text(report: &ScheduleReport) -> String {
    let window = &report.window;
    let width = window.day_count.min(MAX_BAR_WIDTH);
    let id_width = report
        .rows
        .iter()
        .map(|r| r.id.as_str().len())
        .max()
        .unwrap_or(0)
        .max(4);

    // Writing into a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(out, "ganttline schedule (today {})", report.today);
    let _ = writeln!(
        out,
        "  window: {} .. {} ({} days)",
        window.start, window.end, window.day_count
    );
    let _ = writeln!(out);

    for row in &report.rows {
        let critical = if report.is_critical(row) { '*' } else { ' ' };
        let late = if row.is_late { '!' } else { ' ' };
        let _ = writeln!(
            out,
            "{critical}{late} {:<id_width$} |{}| {:>3}% {}",
            row.id.as_str(),
            draw_bar(row.planned, window.day_count, width),
            row.percent_complete,
            row.assignee_label,
        );
    }
    if !report.rows.is_empty() {
        let _ = writeln!(out);
    }

    let s = &report.summary;
    let _ = writeln!(
        out,
        "progress {}% | tasks {} | done {} | late {} | milestones {}",
        s.average_progress, s.task_count, s.done_count, s.late_count, s.milestone_count
    );

    match &report.critical_path {
        CriticalPath::CycleDetected { involved } => {
            let _ = writeln!(
                out,
                "critical path: unavailable, dependency cycle among {}",
                join_ids(involved, ", ")
            );
        }
        CriticalPath::Path { tasks, length_days } if !tasks.is_empty() => {
            let _ = writeln!(
                out,
                "critical path: {} ({} days)",
                join_ids(tasks, " -> "),
                length_days
            );
        }
        CriticalPath::Path { .. } => {}
    }

    for d in &report.dangling {
        let _ = writeln!(out, "note: '{}' depends on unknown task '{}'", d.task, d.missing);
    }

    out
}

fn join_ids(ids: &[TaskId], sep: &str) -> String {
    ids.iter().map(TaskId::as_str).collect::<Vec<_>>().join(sep)
}

/// Draw `bar` scaled from `day_count` columns down to `width` characters.
///
/// A character is filled when any day it stands for is covered by the bar.
pub fn draw_bar(bar: BarSpan, day_count: u32, width: u32) -> String {
    let day_count = u64::from(day_count.max(1));
    let width = u64::from(width.max(1));
    let first = u64::from(bar.offset);
    let last = u64::from(bar.last_column());

    (0..width)
        .map(|c| {
            let from = c * day_count / width;
            let to = ((c + 1) * day_count / width).max(from + 1) - 1;
            if from <= last && to >= first { '#' } else { '.' }
        })
        .collect()
}
