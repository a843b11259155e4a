//! Small utility helpers for URL encoding, opening links, and text fitting.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Percent-encode a string for use in URL query parameters.
///
/// Inputs:
/// - `input`: Raw text (e.g. a search query).
///
/// Output:
/// - Encoded string; unreserved characters pass through, space becomes `%20`.
///
/// Details:
/// - Non-ASCII characters are encoded byte-wise from their UTF-8 representation.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Truncate text to a terminal column budget, appending `…` when cut.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Available columns.
///
/// Output:
/// - `text` unchanged when it fits; otherwise the longest prefix that fits with an ellipsis.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Open a URL with the system's default handler.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - `Ok(())` when the opener process was spawned; `Err` with a message otherwise.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems (Linux/macOS), uses `xdg-open` (Linux) or `open` (macOS).
/// - During tests, this is a no-op to avoid opening real browser windows.
///
/// # Errors
/// - Returns `Err` when the opener process cannot be spawned.
#[cfg_attr(test, allow(unused_variables, clippy::unnecessary_wraps))]
pub fn open_url(url: &str) -> Result<(), String> {
    #[cfg(not(test))]
    {
        use std::process::{Command, Stdio};

        #[cfg(target_os = "windows")]
        let spawned = Command::new("cmd")
            .args(["/c", "start", "", url])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        #[cfg(not(target_os = "windows"))]
        let spawned = Command::new("xdg-open")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .or_else(|_| {
                Command::new("open")
                    .arg(url)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
            });
        spawned
            .map(|_| ())
            .map_err(|e| format!("Could not open {url}: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Percent-encoding keeps unreserved bytes and escapes the rest.
    ///
    /// - Input: "Water Lilies & Monet/1906"
    /// - Output: Spaces as %20, `&` and `/` hex-escaped
    fn percent_encode_escapes_reserved() {
        assert_eq!(
            percent_encode("Water Lilies & Monet/1906"),
            "Water%20Lilies%20%26%20Monet%2F1906"
        );
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    /// What: Truncation respects display width and adds an ellipsis.
    fn truncate_to_width_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("Nighthawks", 20), "Nighthawks");
        assert_eq!(truncate_to_width("Nighthawks", 5), "Nigh…");
        assert_eq!(truncate_to_width("Nighthawks", 0), "");
        assert_eq!(truncate_to_width("日本の絵画", 5), "日本…");
    }
}
