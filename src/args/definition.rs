//! Command-line argument definition and processing.

use clap::Parser;

use crate::state::{FilterGroup, FilterSelection, SortField, SortOrder, ViewKind};
use crate::theme::Settings;

/// artsea - Browse, search and filter the Art Institute of Chicago collection from a terminal
#[derive(Parser, Debug, Default)]
#[command(name = "artsea")]
#[command(version)]
#[command(about = "Browse, search and filter the Art Institute of Chicago collection from a terminal", long_about = None)]
pub struct Args {
    /// View to start in (list, gallery)
    #[arg(long, value_parser = parse_view)]
    pub view: Option<ViewKind>,

    /// Search the collection server-side instead of listing it
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort field of the list view (title, artist, date, origin)
    #[arg(long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Sort direction of the list view (asc, desc)
    #[arg(long, value_parser = parse_sort_order)]
    pub order: Option<SortOrder>,

    /// Gallery filter as GROUP=VALUE (classification, department, type); repeatable
    #[arg(short, long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(FilterGroup, String)>,

    /// Remote page to load first
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page (1-100); overrides `page_size` from settings.conf
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: Option<u32>,

    /// Open the detail page of one artwork directly
    #[arg(long)]
    pub id: Option<u64>,

    /// Print the visible records of one page to stdout and exit (no TUI)
    #[arg(short, long)]
    pub print: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Overlay command-line choices on top of the loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Settings read from `settings.conf` (or defaults)
    ///
    /// Output:
    /// - `settings` updated in place; flags that were not given leave it untouched.
    pub const fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(view) = self.view {
            settings.default_view = view;
        }
        if let Some(field) = self.sort {
            settings.sort.field = field;
        }
        if let Some(order) = self.order {
            settings.sort.order = order;
        }
        if let Some(limit) = self.limit {
            settings.page_size = limit;
        }
    }

    /// Collect the `--filter` flags into a selection.
    #[must_use]
    pub fn filter_selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::default();
        for (group, value) in &self.filters {
            selection.insert(*group, value.clone());
        }
        selection
    }
}

fn parse_view(s: &str) -> Result<ViewKind, String> {
    ViewKind::from_config_key(s).ok_or_else(|| format!("unknown view '{s}' (expected list or gallery)"))
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    SortField::from_config_key(s)
        .ok_or_else(|| format!("unknown sort field '{s}' (expected title, artist, date or origin)"))
}

fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    SortOrder::from_config_key(s).ok_or_else(|| format!("unknown order '{s}' (expected asc or desc)"))
}

/// What: Parse one `GROUP=VALUE` filter flag.
///
/// Inputs:
/// - `s`: Raw flag value, e.g. `classification=painting`
///
/// Output:
/// - The group and the trimmed value; `Err` with a message for unknown groups or empty values.
///
/// Details:
/// - Only the first `=` splits, so values may contain `=`.
///
/// # Errors
/// - Returns `Err` when `=` is missing, the group is unknown, or the value is blank.
pub fn parse_filter(s: &str) -> Result<(FilterGroup, String), String> {
    let (group, value) = s
        .split_once('=')
        .ok_or_else(|| format!("filter '{s}' must look like GROUP=VALUE"))?;
    let group = FilterGroup::from_config_key(group).ok_or_else(|| {
        format!("unknown filter group '{group}' (expected classification, department or type)")
    })?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("filter '{s}' has an empty value"));
    }
    Ok((group, value.to_string()))
}
