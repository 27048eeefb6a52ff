//! Index building
//!
//! Walks a root directory and groups the file names found in each directory.
//! Unreadable subtrees are skipped rather than aborting the build; see
//! [`builder`] for details.

pub mod builder;

pub use builder::build_index;
