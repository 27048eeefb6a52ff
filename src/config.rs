//! Engine configuration: where the index snapshot and results report live

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::utils::resolve_data_dir;

pub const INDEX_FILENAME: &str = "file_index.jsonl";
pub const RESULTS_FILENAME: &str = "search_results.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub index_path: PathBuf,
    pub results_path: PathBuf,
}

impl EngineConfig {
    /// Place both files under `data_dir` with their default names
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            index_path: data_dir.join(INDEX_FILENAME),
            results_path: data_dir.join(RESULTS_FILENAME),
        }
    }

    /// Resolve the data directory (explicit, environment, working directory)
    pub fn resolve(explicit_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self::in_dir(resolve_data_dir(explicit_dir)?))
    }

    /// Directory the results report is written to
    pub fn results_dir(&self) -> &Path {
        self.results_path.parent().unwrap_or_else(|| Path::new("."))
    }
}
