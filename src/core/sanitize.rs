// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-insensitive substring test (full Unicode lowercasing).
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Pad with empty cells or cut down so exactly `width` cells remain.
/// Returns the original width.
pub fn fit_width(cells: &mut Vec<String>, width: usize) -> usize {
    let before = cells.len();
    cells.resize_with(width, String::new);
    before
}
