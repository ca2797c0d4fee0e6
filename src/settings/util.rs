use std::collections::HashSet;
use std::path::Path;

/// Trim category triggers and drop blanks and duplicates, preserving the
/// order they were given in.
pub(super) fn sanitize_categories(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            cleaned.push(trimmed);
        }
    }
    cleaned
}

/// Determine a sensible default pane title from the dataset file name.
pub(super) fn default_title_for(data_path: &Path) -> String {
    data_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.replace(['_', '-'], " "))
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| "aidfind".to_string())
}
