//! Data models for the file index and search results.
//!
//! - [`IndexEntry`] - One directory with the file names it directly contains
//! - [`FileIndex`] - Ordered sequence of index entries (the snapshot contents)
//! - [`MatchMode`] - Contains / starts-with / ends-with predicate selection
//! - [`SearchResult`] - Matched full paths plus the scan counter

pub mod index;
pub mod search;

pub use index::{FileIndex, IndexEntry, IndexStats};
pub use search::{MatchMode, SearchResult};
