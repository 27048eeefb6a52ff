//! Filesystem walk producing a [`FileIndex`].
//!
//! # Error Handling Strategy
//!
//! The walk is best-effort, matching what a plain recursive listing does:
//!
//! - **Missing or unreadable root**: yields an empty index, logged as a warning
//! - **Unreadable subdirectories**: skipped with a warning; the rest of the tree
//!   is still indexed
//! - **Summary reporting**: directory, file and skip counts are logged at the end
//!
//! Nothing here returns an error. Persisting the result is the caller's job.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::models::{FileIndex, IndexEntry};

/// Build a fresh index of every directory under `root` that directly contains files
///
/// Directories are visited depth-first with siblings sorted by name, so the
/// same tree always produces the same index. Entries keep the order in which
/// their directories were visited. Symbolic links are not followed: a link to
/// a directory is neither descended into nor listed, any other non-directory
/// entry counts as a file.
///
/// # Examples
///
/// ```no_run
/// use file_search_engine::build_index;
///
/// let index = build_index("/home/alice/Documents");
/// println!("{} directories, {} files", index.len(), index.file_count());
/// ```
pub fn build_index(root: impl AsRef<Path>) -> FileIndex {
    let root = root.as_ref();

    // Slots are created in visit order; files are filled in as they appear
    let mut slots: Vec<(PathBuf, Vec<String>)> = Vec::new();
    let mut slot_of: HashMap<PathBuf, usize> = HashMap::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped += 1;
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                tracing::warn!(path = %path, error = %e, "Skipping unreadable path");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            slot_of.insert(entry.path().to_path_buf(), slots.len());
            slots.push((entry.path().to_path_buf(), Vec::new()));
            continue;
        }

        // A symlinked directory is not a file and is not descended into
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }

        let Some(parent) = entry.path().parent() else {
            continue;
        };
        // The root itself being a file has no parent slot
        if let Some(&slot) = slot_of.get(parent) {
            slots[slot].1.push(lossy_name(entry.file_name(), entry.path()));
        }
    }

    let index: FileIndex = slots
        .into_iter()
        .map(|(dir, files)| IndexEntry::new(lossy_name(dir.as_os_str(), &dir), files))
        .collect();

    tracing::info!(
        root = %root.display(),
        directories = index.len(),
        files = index.file_count(),
        skipped,
        "Index built"
    );

    index
}

/// Convert a name to UTF-8, warning when invalid bytes become U+FFFD
fn lossy_name(name: &OsStr, path: &Path) -> String {
    match name.to_str() {
        Some(name) => name.to_owned(),
        None => {
            tracing::warn!(
                path = %path.display(),
                "Name is not valid UTF-8; it is recorded with replacement characters"
            );
            name.to_string_lossy().into_owned()
        }
    }
}
