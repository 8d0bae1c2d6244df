// src/timeline/window.rs

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::model::{Task, add_days, days_between};

/// Visible date range of the schedule.
///
/// `day_count` may exceed `end - start + 1` when the content is shorter than
/// the requested minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub day_count: u32,
}

impl TimelineWindow {
    /// Whether `date` falls within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Zero-based column of `date`, unclamped.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        days_between(self.start, date)
    }
}

/// Derive the window covering every task date plus `today`.
///
/// One day of padding is added on each side and the length is floored at
/// `minimum_days` (a minimum of 0 is treated as 1).
pub fn compute_window(tasks: &[Task], minimum_days: u32, today: NaiveDate) -> TimelineWindow {
    let minimum_days = minimum_days.max(1);

    if tasks.is_empty() {
        let window = TimelineWindow {
            start: today,
            end: add_days(today, i64::from(minimum_days) - 1),
            day_count: minimum_days,
        };
        debug!(?window, "empty snapshot; using default window");
        return window;
    }

    let (min, max) = tasks
        .iter()
        .flat_map(|t| t.scan_dates())
        .fold((today, today), |(lo, hi), d| (lo.min(d), hi.max(d)));

    let start = add_days(min, -1);
    let end = add_days(max, 1);
    let span = days_between(start, end) + 1;
    let day_count = u32::try_from(span)
        .unwrap_or(u32::MAX)
        .max(minimum_days);

    let window = TimelineWindow {
        start,
        end,
        day_count,
    };
    debug!(tasks = tasks.len(), ?window, "computed timeline window");
    window
}
