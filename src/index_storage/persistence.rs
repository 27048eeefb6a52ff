//! Snapshot persistence: load/save with atomic writes
//!
//! The snapshot is newline-delimited JSON, one [`IndexEntry`] per line in
//! index order:
//!
//! ```text
//! {"directory":"/home/alice/docs","files":["notes.txt","report.pdf"]}
//! {"directory":"/home/alice/docs/old","files":["draft.txt"]}
//! ```

use std::fmt;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{FileIndex, IndexEntry};

/// Why no index could be restored from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    /// No snapshot file exists yet (first run)
    Missing,
    /// The file exists but could not be read
    Unreadable(String),
    /// The file was read but is not a valid snapshot
    Corrupt(String),
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::Missing => f.write_str("no index snapshot found"),
            AbsentReason::Unreadable(e) => write!(f, "index snapshot could not be read: {}", e),
            AbsentReason::Corrupt(e) => write!(f, "index snapshot is corrupt: {}", e),
        }
    }
}

/// Outcome of reading a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLoad {
    Loaded(FileIndex),
    Absent(AbsentReason),
}

impl SnapshotLoad {
    /// The loaded index, or an empty one when the snapshot was absent
    pub fn into_index(self) -> FileIndex {
        match self {
            SnapshotLoad::Loaded(index) => index,
            SnapshotLoad::Absent(_) => FileIndex::new(),
        }
    }
}

/// Load the snapshot at `path`
///
/// Never fails: a missing, unreadable or malformed snapshot is reported as
/// [`SnapshotLoad::Absent`] and the caller decides what to do about it.
pub fn load_snapshot(path: &Path) -> SnapshotLoad {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return SnapshotLoad::Absent(AbsentReason::Missing);
        }
        Err(e) => return SnapshotLoad::Absent(AbsentReason::Unreadable(e.to_string())),
    };

    match parse_snapshot(&content) {
        Ok(index) => SnapshotLoad::Loaded(index),
        Err(e) => SnapshotLoad::Absent(AbsentReason::Corrupt(format!("{:#}", e))),
    }
}

fn parse_snapshot(content: &str) -> Result<FileIndex> {
    let mut index = FileIndex::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let entry: IndexEntry = serde_json::from_str(line)
            .with_context(|| format!("Invalid record on line {}", line_num + 1))?;
        if entry.files.is_empty() {
            anyhow::bail!("Record on line {} lists no files", line_num + 1);
        }
        index.push(entry);
    }

    Ok(index)
}

/// Replace the snapshot at `path` with `index` (temp file + rename)
pub fn save_snapshot(path: &Path, index: &FileIndex) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    // A failed save leaves the previous snapshot and no temp file behind
    if let Err(e) = write_records(temp_path, index) {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(temp_path, path) {
        let _ = fs::remove_file(temp_path);
        return Err(e)
            .with_context(|| format!("Failed to replace index snapshot {}", path.display()));
    }

    tracing::debug!(path = %path.display(), directories = index.len(), "Index snapshot saved");
    Ok(())
}

fn write_records(temp_path: &Path, index: &FileIndex) -> Result<()> {
    let file = fs::File::create(temp_path)
        .with_context(|| format!("Failed to create snapshot temp file {}", temp_path.display()))?;
    let mut writer = BufWriter::new(file);
    for entry in index {
        serde_json::to_writer(&mut writer, entry).context("Failed to serialize index entry")?;
        writer.write_all(b"\n").context("Failed to write snapshot temp file")?;
    }
    writer.flush().context("Failed to write snapshot temp file")?;
    Ok(())
}
