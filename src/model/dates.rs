// src/model/dates.rs

//! Day-granularity date helpers shared by the timeline components.

use chrono::NaiveDate;
use serde::Serialize;

/// Formats accepted when reading dates from a snapshot file.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d.%m.%Y"];

/// Try parsing a date string with the accepted formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Shift a date by a signed number of days, saturating at chrono's range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let delta = chrono::Duration::days(days);
    date.checked_add_signed(delta).unwrap_or(if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// An inclusive start/end pair of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range whose end never precedes its start.
    ///
    /// An end before the start is moved forward onto the start, giving a
    /// one-day range.
    pub fn normalized(self) -> Self {
        Self {
            start: self.start,
            end: self.end.max(self.start),
        }
    }

    /// Inclusive length in days, never less than 1.
    pub fn duration_days(&self) -> i64 {
        (days_between(self.start, self.end) + 1).max(1)
    }
}
