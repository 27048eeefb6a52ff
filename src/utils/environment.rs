use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable naming the directory that holds the snapshot and report
pub const DATA_DIR_ENV: &str = "FILE_SEARCH_DATA_DIR";

/// Resolve the data directory
///
/// An explicit directory wins, then [`DATA_DIR_ENV`], then the current
/// working directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => env::current_dir().context("Failed to determine current working directory"),
    }
}
