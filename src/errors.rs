// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The timeline engine itself never fails; these errors only come from the
//! snapshot loader, the CLI and report output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GanttlineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GanttlineError>;
