// src/model/mod.rs

//! Input data model for the timeline engine.
//!
//! - [`task`] holds the externally owned [`Task`] record and its one-shot
//!   normalization into a [`ResolvedTask`].
//! - [`dates`] provides day-granularity helpers and [`DateRange`].

pub mod dates;
pub mod task;

pub use dates::{DateRange, add_days, days_between, parse_date};
pub use task::{ResolvedTask, Task, UNASSIGNED};
