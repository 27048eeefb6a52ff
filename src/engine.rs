//! Search engine instance tying the index, matcher and on-disk state together

use std::path::Path;

use anyhow::Result;

use crate::config::EngineConfig;
use crate::index_storage::{AbsentReason, SnapshotLoad, load_snapshot, save_snapshot, write_report};
use crate::indexer::build_index;
use crate::matcher;
use crate::models::{FileIndex, IndexStats, MatchMode, SearchResult};

/// Owns one in-memory index and the result of its most recent search
///
/// Independent instances with different [`EngineConfig`]s never share state.
#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    file_index: FileIndex,
    last_result: Option<SearchResult>,
}

impl SearchEngine {
    /// Create an engine with an empty index; call [`load_index`](Self::load_index)
    /// to restore the persisted one
    pub fn new(config: EngineConfig) -> Self {
        Self { config, file_index: FileIndex::new(), last_result: None }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn file_index(&self) -> &FileIndex {
        &self.file_index
    }

    /// Directory and file totals of the in-memory index
    pub fn stats(&self) -> IndexStats {
        self.file_index.stats()
    }

    /// Result of the latest [`search`](Self::search), kept even if writing
    /// its report failed
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Re-index `root` and overwrite the snapshot
    ///
    /// The in-memory index is replaced before the snapshot is written, so it
    /// stays usable when the returned error reports a failed write.
    pub fn build_index(&mut self, root: impl AsRef<Path>) -> Result<&FileIndex> {
        self.file_index = build_index(root);
        save_snapshot(&self.config.index_path, &self.file_index)?;
        Ok(&self.file_index)
    }

    /// Restore the index from the snapshot
    ///
    /// Falls back to an empty index when the snapshot is missing or broken and
    /// returns the reason, so the caller can decide how loudly to report it.
    pub fn load_index(&mut self) -> Option<AbsentReason> {
        match load_snapshot(&self.config.index_path) {
            SnapshotLoad::Loaded(index) => {
                tracing::debug!(
                    path = %self.config.index_path.display(),
                    directories = index.len(),
                    "Index snapshot loaded"
                );
                self.file_index = index;
                None
            }
            SnapshotLoad::Absent(reason) => {
                tracing::debug!(
                    path = %self.config.index_path.display(),
                    reason = %reason,
                    "Starting with an empty index"
                );
                self.file_index = FileIndex::new();
                Some(reason)
            }
        }
    }

    /// Search the in-memory index and overwrite the results report
    ///
    /// A failed report write is returned as an error; the fresh result is
    /// still available through [`last_result`](Self::last_result).
    pub fn search(&mut self, term: &str, mode: MatchMode) -> Result<&SearchResult> {
        let result = matcher::search(term, mode, &self.file_index);
        tracing::debug!(
            term,
            mode = %mode,
            records = result.records_scanned,
            matches = result.matches_found(),
            "Search finished"
        );
        let result = self.last_result.insert(result);
        write_report(&self.config.results_path, &result.matches)?;
        Ok(&*result)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs").join("README.txt"), b"").unwrap();
        fs::write(tmp.path().join("docs").join("notes.md"), b"").unwrap();
        fs::write(tmp.path().join("top.txt"), b"").unwrap();
        tmp
    }

    #[test]
    fn test_build_then_load_in_new_instance() {
        let root = tree();
        let data = TempDir::new().unwrap();

        let mut engine = SearchEngine::new(EngineConfig::in_dir(data.path()));
        let built = engine.build_index(root.path()).unwrap().clone();

        let mut fresh = SearchEngine::new(EngineConfig::in_dir(data.path()));
        assert_eq!(fresh.load_index(), None);
        assert_eq!(fresh.file_index(), &built);
    }

    #[test]
    fn test_stats_follow_in_memory_index() {
        let root = tree();
        let data = TempDir::new().unwrap();
        let mut engine = SearchEngine::new(EngineConfig::in_dir(data.path()));
        assert_eq!(engine.stats(), IndexStats::default());

        engine.build_index(root.path()).unwrap();
        assert_eq!(engine.stats(), IndexStats { directories: 2, files: 3 });

        // Reloading from a missing snapshot resets the totals
        let mut other = SearchEngine::new(EngineConfig::in_dir(data.path().join("elsewhere")));
        other.load_index();
        assert_eq!(other.stats(), IndexStats { directories: 0, files: 0 });
    }

    #[test]
    fn test_load_without_snapshot_is_empty() {
        let data = TempDir::new().unwrap();
        let mut engine = SearchEngine::new(EngineConfig::in_dir(data.path()));

        assert_eq!(engine.load_index(), Some(AbsentReason::Missing));
        assert!(engine.file_index().is_empty());
    }

    #[test]
    fn test_search_writes_report() {
        let root = tree();
        let data = TempDir::new().unwrap();
        let mut engine = SearchEngine::new(EngineConfig::in_dir(data.path()));
        engine.build_index(root.path()).unwrap();

        let result = engine.search(".txt", MatchMode::EndsWith).unwrap().clone();

        assert_eq!(result.records_scanned, 3);
        assert_eq!(result.matches_found(), 2);
        let report = fs::read_to_string(&engine.config().results_path).unwrap();
        assert_eq!(report.lines().collect::<Vec<_>>(), result.matches);
    }

    #[test]
    fn test_report_failure_keeps_result() {
        let root = tree();
        let data = TempDir::new().unwrap();
        let config = EngineConfig {
            index_path: data.path().join("file_index.jsonl"),
            results_path: data.path().join("no-such-dir").join("search_results.txt"),
        };
        let mut engine = SearchEngine::new(config);
        engine.build_index(root.path()).unwrap();

        assert!(engine.search("readme", MatchMode::Contains).is_err());

        let kept = engine.last_result().unwrap();
        assert_eq!(kept.matches_found(), 1);
        assert!(kept.matches[0].ends_with("docs/README.txt"));
    }

    #[test]
    fn test_search_replaces_previous_result() {
        let root = tree();
        let data = TempDir::new().unwrap();
        let mut engine = SearchEngine::new(EngineConfig::in_dir(data.path()));
        engine.build_index(root.path()).unwrap();

        engine.search("", MatchMode::Contains).unwrap();
        engine.search("notes", MatchMode::StartsWith).unwrap();

        assert_eq!(engine.last_result().unwrap().matches_found(), 1);
    }

    #[test]
    fn test_snapshot_failure_keeps_built_index() {
        let root = tree();
        let data = TempDir::new().unwrap();
        // A directory where the snapshot file should go makes the rename fail
        let index_path = data.path().join("file_index.jsonl");
        fs::create_dir(&index_path).unwrap();
        fs::write(index_path.join("occupied"), b"").unwrap();
        let config = EngineConfig { index_path, results_path: data.path().join("r.txt") };
        let mut engine = SearchEngine::new(config);

        assert!(engine.build_index(root.path()).is_err());
        assert_eq!(engine.file_index().file_count(), 3);
    }
}
