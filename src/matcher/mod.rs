//! Query matching against a loaded [`FileIndex`](crate::models::FileIndex)
//!
//! Each file name is lower-cased and tested against the lower-cased term with
//! exactly one predicate chosen by [`MatchMode`](crate::models::MatchMode).

pub mod apply;

pub use apply::search;
