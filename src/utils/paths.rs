use std::borrow::Cow;

/// Replaces backslash directory separators with forward slashes
///
/// # Examples
///
/// ```
/// use file_search_engine::normalize_separators;
///
/// assert_eq!(normalize_separators(r"C:\data\docs"), "C:/data/docs");
/// assert_eq!(normalize_separators("/home/user"), "/home/user");
/// ```
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') { Cow::Owned(path.replace('\\', "/")) } else { Cow::Borrowed(path) }
}

/// Builds the full path reported for a match: normalized directory, `/`, file name
///
/// # Examples
///
/// ```
/// use file_search_engine::join_result_path;
///
/// assert_eq!(join_result_path(r"C:\data", "x.txt"), "C:/data/x.txt");
/// ```
pub fn join_result_path(directory: &str, file_name: &str) -> String {
    let directory = normalize_separators(directory);
    let mut full = String::with_capacity(directory.len() + 1 + file_name.len());
    full.push_str(&directory);
    full.push('/');
    full.push_str(file_name);
    full
}

/// Formats a count with comma thousands separators (`1234567` -> `1,234,567`)
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
