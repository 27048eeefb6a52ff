//! File Search Engine - index a directory tree and search it by file name
//!
//! The engine walks a root directory, records which files each directory
//! directly contains, and persists that listing as a snapshot. Searches then
//! run against the loaded snapshot without touching the filesystem tree:
//!
//! - Building an index of every directory that holds at least one file
//! - Persisting and restoring the index as newline-delimited JSON
//! - Case-insensitive contains / starts-with / ends-with file name matching
//! - Writing the matched paths of each search to a plain-text report
//!
//! # Example
//!
//! ```no_run
//! use file_search_engine::{EngineConfig, MatchMode, SearchEngine};
//!
//! let mut engine = SearchEngine::new(EngineConfig::in_dir("/tmp/file-search"));
//! engine.build_index("/home/alice/Documents")?;
//!
//! let result = engine.search("report", MatchMode::Contains)?;
//! println!("{} of {} files matched", result.matches_found(), result.records_scanned);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod index_storage;
pub mod indexer;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use index_storage::{AbsentReason, SnapshotLoad, load_snapshot, save_snapshot};
pub use indexer::build_index;
pub use models::{FileIndex, IndexEntry, IndexStats, MatchMode, SearchResult};
pub use utils::paths::{format_count, join_result_path, normalize_separators};
