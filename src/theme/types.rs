use ratatui::style::Color;

use crate::state::{SortSpec, ViewKind};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the collection API, without trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Records requested per page.
    pub page_size: u32,
    /// View shown on startup.
    pub default_view: ViewKind,
    /// Initial sort of the list view.
    pub sort: SortSpec,
    /// Image width requested for list rows.
    pub list_image_size: u32,
    /// Image width requested for gallery cards.
    pub gallery_image_size: u32,
    /// Image width requested on the detail page.
    pub detail_image_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.artic.edu/api/v1".to_string(),
            request_timeout_secs: 10,
            page_size: 100,
            default_view: ViewKind::List,
            sort: SortSpec::default(),
            list_image_size: 200,
            gallery_image_size: 400,
            detail_image_size: 843,
        }
    }
}
