// src/config/mod.rs

//! Snapshot file loading and validation for ganttline.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a snapshot file through the `fs` abstraction (`loader.rs`).
//! - Validate global settings and convert raw tasks (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    load_and_validate, load_and_validate_with, load_from_fs, load_from_path, parse_raw,
};
pub use model::{ConfigSection, RawSnapshotFile, RawTaskConfig, Snapshot};
