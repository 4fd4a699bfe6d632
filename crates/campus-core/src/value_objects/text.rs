//! Small text helpers shared by entities and filters

/// Length of a description preview in search results
pub const EXCERPT_LENGTH: usize = 60;

/// First `max` characters of `text`, followed by `...` when it was cut
pub fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Split a comma-separated tag string, trimming and dropping empty parts
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed value, `None` when blank
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
