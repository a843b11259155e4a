/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips `#` sections anywhere, and `//` sections unless they belong to a URL scheme (`://`).
pub fn strip_inline_comment(mut s: &str) -> &str {
    let mut from = 0;
    while let Some(rel) = s[from..].find("//") {
        let i = from + rel;
        if i > 0 && s.as_bytes()[i - 1] == b':' {
            from = i + 2;
            continue;
        }
        s = &s[..i];
        break;
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}

/// Normalize a config key: lowercase, with `.`, `-` and spaces mapped to `_`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
