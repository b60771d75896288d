//! Prompt template placeholder scanning.
//!
//! A placeholder is `{name}` where `name` is one or more ASCII alphanumerics
//! or underscores. Doubled braces (`{{`, `}}`) are literal and never start a
//! placeholder.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

/// Return placeholder names in first-appearance order, without duplicates.
#[must_use]
pub fn prompt_placeholders(prompt: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let bytes = prompt.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'{') {
            i += 2;
            continue;
        }
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && is_name_byte(bytes[end]) {
            end += 1;
        }
        if end > start && bytes.get(end) == Some(&b'}') {
            let name = &prompt[start..end];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
            i = end + 1;
        } else {
            i = start;
        }
    }
    names
}

/// If `value` is exactly one placeholder (surrounding whitespace ignored),
/// return its name.
#[must_use]
pub fn single_placeholder(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix('{')?.strip_suffix('}')?;
    if !inner.is_empty() && inner.bytes().all(is_name_byte) {
        Some(inner)
    } else {
        None
    }
}

/// Whether `name` is usable as a placeholder/input name.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_byte)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
