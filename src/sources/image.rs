/// IIIF image service root used for every artwork image.
pub const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// What: Build the IIIF URL for an artwork image at a given pixel width.
///
/// Inputs:
/// - `image_id`: IIIF image identifier (may be absent or empty)
/// - `size`: Requested pixel width, e.g. 200, 400, 843
///
/// Output:
/// - `https://www.artic.edu/iiif/2/<id>/full/<size>,/0/default.jpg`, or `""` when there is no id.
///
/// Details:
/// - Pure; performs no I/O. Callers render an empty URL as a placeholder.
/// - A whitespace-only id counts as missing.
#[must_use]
pub fn image_url(image_id: Option<&str>, size: impl std::fmt::Display) -> String {
    match image_id {
        Some(id) if !id.trim().is_empty() => {
            format!("{IIIF_BASE}/{id}/full/{size},/0/default.jpg")
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Missing ids yield an empty URL; present ids fill the template.
    ///
    /// - Input: `""`, `None`, and `("abc123", "400")`
    /// - Output: `""`, `""`, and the exact IIIF URL
    fn image_url_template() {
        assert_eq!(image_url(Some(""), "400"), "");
        assert_eq!(image_url(None, 843), "");
        assert_eq!(image_url(Some("  "), 400), "");
        assert_eq!(
            image_url(Some("abc123"), "400"),
            "https://www.artic.edu/iiif/2/abc123/full/400,/0/default.jpg"
        );
        assert_eq!(
            image_url(Some("abc123"), 200),
            "https://www.artic.edu/iiif/2/abc123/full/200,/0/default.jpg"
        );
    }
}
