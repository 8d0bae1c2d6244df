// src/config/loader.rs

use std::path::Path;

use crate::config::model::{RawSnapshotFile, Snapshot};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a snapshot file from disk and return the raw `RawSnapshotFile`.
///
/// This only performs TOML deserialization; it does **not** convert dates or
/// check global settings. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSnapshotFile> {
    load_from_fs(&RealFileSystem, path.as_ref())
}

/// Same as [`load_from_path`], reading through the given filesystem.
pub fn load_from_fs(fs: &dyn FileSystem, path: &Path) -> Result<RawSnapshotFile> {
    let contents = fs.read_to_string(path)?;
    parse_raw(&contents)
}

/// Deserialize snapshot TOML without validation.
pub fn parse_raw(contents: &str) -> Result<RawSnapshotFile> {
    let raw: RawSnapshotFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a snapshot file from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects a zero `minimum_days` and empty ids.
/// - Parses dates, dropping (with a warning) those that do not parse.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Snapshot> {
    load_and_validate_with(&RealFileSystem, path.as_ref())
}

/// Same as [`load_and_validate`], reading through the given filesystem.
pub fn load_and_validate_with(fs: &dyn FileSystem, path: &Path) -> Result<Snapshot> {
    let raw = load_from_fs(fs, path)?;
    Snapshot::try_from(raw)
}
