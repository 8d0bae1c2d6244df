// src/summary.rs

//! Roll-up counters over laid-out rows.

use serde::Serialize;

use crate::timeline::TaskRow;
use crate::types::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Duration-weighted mean of percent complete, rounded half up.
    pub average_progress: u8,
    pub done_count: usize,
    pub late_count: usize,
    pub milestone_count: usize,
    pub task_count: usize,
}

pub fn summarize(rows: &[TaskRow]) -> Summary {
    let (weighted, total) = rows.iter().fold((0i128, 0i128), |(w, t), row| {
        let duration = i128::from(row.planned_duration.max(0));
        (w + duration * i128::from(row.percent_complete), t + duration)
    });

    let average_progress = if total == 0 {
        0
    } else {
        ((2 * weighted + total) / (2 * total)).clamp(0, 100) as u8
    };

    Summary {
        average_progress,
        done_count: rows
            .iter()
            .filter(|r| r.percent_complete >= 100 || r.status == TaskStatus::Done)
            .count(),
        late_count: rows.iter().filter(|r| r.is_late).count(),
        milestone_count: rows.iter().filter(|r| r.is_milestone).count(),
        task_count: rows.len(),
    }
}
