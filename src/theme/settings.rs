use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::state::{SortField, SortOrder, ViewKind};
use crate::theme::parsing::{normalize_key, strip_inline_comment};
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |path| load_settings_from(&path))
}

/// What: Load settings from an explicit file path.
///
/// Inputs:
/// - `path`: Path to a `settings.conf`-style file.
///
/// Output:
/// - Defaults overlaid with every valid key found in the file.
///
/// Details:
/// - Read failures are logged and yield defaults.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` per line; blank lines and `#`/`//` comments are skipped.
/// - Unknown keys and unparsable values leave the current value untouched.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "api_base_url" | "api_url" | "base_url" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    settings.api_base_url = val.trim_end_matches('/').to_string();
                }
            }
            "request_timeout_secs" | "timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "page_size" | "limit" => {
                if let Ok(v) = val.parse::<u32>()
                    && v > 0
                {
                    settings.page_size = v;
                }
            }
            "default_view" | "start_view" => {
                if let Some(v) = ViewKind::from_config_key(val) {
                    settings.default_view = v;
                }
            }
            "sort_field" | "sort_by" => {
                if let Some(f) = SortField::from_config_key(val) {
                    settings.sort.field = f;
                }
            }
            "sort_order" | "sort_direction" => {
                if let Some(o) = SortOrder::from_config_key(val) {
                    settings.sort.order = o;
                }
            }
            "list_image_size" => parse_size(val, &mut settings.list_image_size),
            "gallery_image_size" => parse_size(val, &mut settings.gallery_image_size),
            "detail_image_size" => parse_size(val, &mut settings.detail_image_size),
            _ => {}
        }
    }
}

/// Store `val` into `slot` when it is a positive pixel width.
fn parse_size(val: &str, slot: &mut u32) {
    if let Ok(v) = val.parse::<u32>()
        && v > 0
    {
        *slot = v;
    }
}
