//! Command-line front end: `index`, `search` and `stats`

pub mod commands;

pub use commands::{Cli, Commands, run};
