use crate::models::{FileIndex, MatchMode, SearchResult};
use crate::utils::join_result_path;

/// Scan every file name in `index` and collect the full paths matching `term`
///
/// Matching is case-insensitive. Results keep index order; every file name
/// visited counts toward `records_scanned` whether or not it matched. An
/// empty term matches every file in all three modes.
///
/// # Examples
///
/// ```
/// use file_search_engine::matcher::search;
/// use file_search_engine::models::{FileIndex, IndexEntry, MatchMode};
///
/// let index: FileIndex = std::iter::once(IndexEntry::new(
///     "/a",
///     vec!["report.pdf".to_string(), "preview.txt".to_string()],
/// ))
/// .collect();
///
/// let result = search("pre", MatchMode::StartsWith, &index);
/// assert_eq!(result.matches, vec!["/a/preview.txt"]);
/// assert_eq!(result.records_scanned, 2);
/// ```
pub fn search(term: &str, mode: MatchMode, index: &FileIndex) -> SearchResult {
    let term = term.to_lowercase();
    let mut result = SearchResult::default();

    for entry in index {
        for file_name in &entry.files {
            result.records_scanned += 1;
            if matches_name(&file_name.to_lowercase(), &term, mode) {
                result.matches.push(join_result_path(&entry.directory, file_name));
            }
        }
    }

    result
}

/// Apply one mode's predicate to an already lower-cased name and term
fn matches_name(name: &str, term: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Contains => name.contains(term),
        MatchMode::StartsWith => name.starts_with(term),
        MatchMode::EndsWith => name.ends_with(term),
    }
}
