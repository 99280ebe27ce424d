// src/core/sanitize.rs

/// Collapse runs of whitespace (NBSP included) into one space and trim.
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

/// Last non-empty path segment of a URL or path, query/fragment dropped.
pub fn last_path_segment(url: &str) -> Option<&str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].split('/').rfind(|s| !s.is_empty())
}
