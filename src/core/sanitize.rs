// src/core/sanitize.rs

/// Remove every `(` and `)`; nothing else is touched.
pub fn strip_parens(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Drop the last `n` characters (not bytes). `None` if the string is shorter.
pub fn drop_last_chars(s: &str, n: usize) -> Option<&str> {
    let count = s.chars().count();
    if count < n {
        return None;
    }
    let cut = s
        .char_indices()
        .nth(count - n)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    Some(&s[..cut])
}

/// Split on `delim` and trim every piece. Always yields at least one piece.
pub fn split_trimmed(s: &str, delim: &str) -> Vec<String> {
    s.split(delim).map(|p| p.trim().to_string()).collect()
}

/// Collapse whitespace runs (newlines included) into single spaces and trim.
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

/// Remove every occurrence of `label`, then trim.
pub fn strip_label(s: &str, label: &str) -> String {
    s.replace(label, "").trim().to_string()
}
