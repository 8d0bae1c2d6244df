// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod model;
pub mod report;
pub mod summary;
pub mod timeline;
pub mod types;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::Snapshot;
use crate::config::loader::load_and_validate_with;
use crate::engine::{EngineOptions, compute_schedule};
use crate::fs::{FileSystem, RealFileSystem};

pub use crate::dag::{CriticalPath, find_critical_path};
pub use crate::engine::ScheduleReport;
pub use crate::model::Task;
pub use crate::summary::{Summary, summarize};
pub use crate::timeline::{TaskRow, TimelineWindow, build_rows, compute_window};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - snapshot loading
/// - the timeline engine
/// - report rendering and output
pub fn run(args: CliArgs) -> Result<()> {
    run_with_fs(args, &RealFileSystem)
}

/// Same as [`run`], reading and writing through the given filesystem.
pub fn run_with_fs(args: CliArgs, fs: &dyn FileSystem) -> Result<()> {
    let snapshot_path = PathBuf::from(&args.snapshot);
    let snapshot = load_and_validate_with(fs, &snapshot_path)?;

    info!(
        path = %snapshot_path.display(),
        project = %snapshot.config.project,
        tasks = snapshot.tasks.len(),
        skipped = snapshot.skipped,
        "loaded task snapshot"
    );

    if args.dry_run {
        print_dry_run(&snapshot);
        return Ok(());
    }

    let options = engine_options(&args, &snapshot);
    let report = compute_schedule(&snapshot.tasks, &options);
    let rendered = report::render(&report, args.format)?;

    match args.output.as_deref() {
        Some(path) => {
            fs.write(Path::new(path), rendered.as_bytes())?;
            info!(path, "wrote schedule report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Resolve `today` and `minimum_days`: CLI flags win over the snapshot.
pub fn engine_options(args: &CliArgs, snapshot: &Snapshot) -> EngineOptions {
    let today = args.today.unwrap_or_else(local_today);
    let minimum_days = args.minimum_days.unwrap_or(snapshot.config.minimum_days);
    EngineOptions::new(today).with_minimum_days(minimum_days)
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Simple dry-run output: print tasks, dates and dependencies.
fn print_dry_run(snapshot: &Snapshot) {
    println!("ganttline dry-run");
    println!("  config.project = {:?}", snapshot.config.project);
    println!("  config.minimum_days = {}", snapshot.config.minimum_days);
    println!();

    println!("tasks ({}):", snapshot.tasks.len());
    for task in &snapshot.tasks {
        println!("  - {}", task.id);
        if task.name != task.id.as_str() {
            println!("      name: {}", task.name);
        }
        println!("      planned: {} .. {}", task.planned.start, task.planned.end);
        if let Some(baseline) = task.baseline {
            println!("      baseline: {} .. {}", baseline.start, baseline.end);
        }
        if let Some(start) = task.actual_start {
            match task.actual_due {
                Some(due) => println!("      actual: {start} .. {due}"),
                None => println!("      actual: {start} .."),
            }
        }
        println!("      status: {}", task.status);
        if let Some(p) = task.percent_complete {
            println!("      percent_complete: {p}");
        }
        if !task.dependencies.is_empty() {
            let deps: Vec<&str> = task.dependencies.iter().map(|d| d.as_str()).collect();
            println!("      dependencies: {:?}", deps);
        }
        if task.is_milestone {
            println!("      milestone: true");
        }
        if let Some(ref assignee) = task.assignee {
            println!("      assignee: {assignee}");
        }
    }
    if snapshot.skipped > 0 {
        println!();
        println!("skipped {} task(s) without usable planned dates", snapshot.skipped);
    }

    debug!("dry-run complete (no analysis)");
}
