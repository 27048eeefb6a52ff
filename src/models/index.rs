use serde::{Deserialize, Serialize};

/// One directory and the plain names of the files directly inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub directory: String,
    pub files: Vec<String>,
}

impl IndexEntry {
    pub fn new(directory: impl Into<String>, files: Vec<String>) -> Self {
        Self { directory: directory.into(), files }
    }
}

/// Directory and file totals of an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub directories: usize,
    pub files: usize,
}

/// Ordered listing of directories that contain at least one file
///
/// Entries keep directory-traversal order. Directories without files never
/// get an entry, so every `files` list is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: Vec<IndexEntry>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, dropping it if it lists no files
    pub fn push(&mut self, entry: IndexEntry) {
        if !entry.files.is_empty() {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Number of indexed directories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of file names across all directories
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats { directories: self.len(), files: self.file_count() }
    }
}

impl FromIterator<IndexEntry> for FileIndex {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        let mut index = FileIndex::new();
        for entry in iter {
            index.push(entry);
        }
        index
    }
}

impl<'a> IntoIterator for &'a FileIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
