//! On-disk state
//!
//! Two files, both replaced wholesale on every write:
//! - `file_index.jsonl`: the index snapshot, newline-delimited JSON
//! - `search_results.txt`: the report of the most recent search
//!
//! Loading the snapshot never fails; an absent or broken snapshot comes back
//! as [`SnapshotLoad::Absent`]. Writing either file returns errors.

pub mod persistence;
pub mod report;

pub use persistence::{AbsentReason, SnapshotLoad, load_snapshot, save_snapshot};
pub use report::write_report;
