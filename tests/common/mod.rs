//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use file_search_engine::{FileIndex, IndexEntry};
use tempfile::TempDir;

/// Builder for directory trees to index
pub struct TreeBuilder {
    temp_dir: TempDir,
}

impl TreeBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an empty file at `relative`, creating parent directories as needed
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, b"").expect("Failed to create file");
        self
    }

    /// Add several files at once
    pub fn with_files(self, relatives: &[&str]) -> Self {
        relatives.iter().fold(self, |builder, rel| builder.with_file(rel))
    }

    /// Add an empty directory
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory string as the indexer records it
pub fn dir_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Full path as the matcher reports it
pub fn result_path(dir: &Path, file: &str) -> String {
    format!("{}/{}", dir_key(dir).replace('\\', "/"), file)
}

/// Build an in-memory index without touching the filesystem
pub fn index_of(entries: &[(&str, &[&str])]) -> FileIndex {
    entries
        .iter()
        .map(|(dir, files)| IndexEntry::new(*dir, files.iter().map(|f| f.to_string()).collect()))
        .collect()
}

/// A small realistic project tree
///
/// ```text
/// root/
///   README.txt
///   docs/report.pdf
///   docs/preview.txt
///   empty/
///   src/main.rs
///   src/lib.rs
///   src/nested/deep/readme.md
/// ```
pub fn realistic_tree() -> TempDir {
    TreeBuilder::new()
        .with_files(&[
            "README.txt",
            "docs/report.pdf",
            "docs/preview.txt",
            "src/main.rs",
            "src/lib.rs",
            "src/nested/deep/readme.md",
        ])
        .with_dir("empty")
        .build()
}

/// Fresh data directory for snapshot and report files
pub fn data_dir() -> TempDir {
    TempDir::new().expect("Failed to create data dir")
}

pub fn join(root: &Path, relative: &str) -> PathBuf {
    relative.split('/').fold(root.to_path_buf(), |p, part| p.join(part))
}
