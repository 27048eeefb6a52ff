use std::fmt;

use clap::ValueEnum;

/// How the query term has to relate to a file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MatchMode {
    /// File name contains the term
    #[default]
    Contains,
    /// File name starts with the term
    StartsWith,
    /// File name ends with the term
    EndsWith,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchMode::Contains => "contains",
            MatchMode::StartsWith => "starts-with",
            MatchMode::EndsWith => "ends-with",
        };
        f.write_str(name)
    }
}

/// Matched full paths of one search, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub matches: Vec<String>,
    /// Every file name visited, matching or not
    pub records_scanned: usize,
}

impl SearchResult {
    pub fn matches_found(&self) -> usize {
        self.matches.len()
    }
}
