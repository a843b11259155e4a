use tokio::sync::mpsc;

use crate::app::StartOptions;
use crate::state::{AppState, DetailRequest, ViewKind};
use crate::theme::Settings;

/// What: Build the initial application state from settings and startup options.
///
/// Inputs:
/// - `settings`: Effective settings (config file merged with CLI overrides)
/// - `options`: Startup choices from the command line
///
/// Output:
/// - State with both browse views on the requested page and remote query, and the
///   requested gallery filters applied.
pub fn initialize_app_state(settings: Settings, options: &StartOptions) -> AppState {
    let mut app = AppState::new(settings);
    let remote_query = options
        .search
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    for kind in [ViewKind::List, ViewKind::Gallery] {
        let view = app.browse_mut(kind);
        view.remote_query.clone_from(&remote_query);
        view.page = options.page.max(1);
    }
    app.gallery.filters = options.filters.clone();
    tracing::info!(
        view = app.settings.default_view.as_str(),
        search = %remote_query,
        page = app.list.page,
        page_size = app.settings.page_size,
        "state initialized"
    );
    app
}

/// What: Open the direct-entry detail page when `--id` was given.
///
/// Output:
/// - `true` when a detail page was opened.
pub fn open_direct_entry(
    app: &mut AppState,
    options: &StartOptions,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    let Some(record_id) = options.direct_id else {
        return false;
    };
    crate::logic::detail::open_direct(app, record_id, detail_tx);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FilterGroup, FilterSelection, Screen};

    #[test]
    /// What: Startup options land in both browse views; filters only in the gallery.
    fn initialize_applies_options() {
        let mut filters = FilterSelection::default();
        filters.insert(FilterGroup::Type, "Painting");
        let options = StartOptions {
            search: Some("  cats ".into()),
            filters: filters.clone(),
            page: 2,
            direct_id: None,
        };
        let app = initialize_app_state(Settings::default(), &options);
        assert_eq!(app.list.remote_query, "cats");
        assert_eq!(app.gallery.remote_query, "cats");
        assert_eq!(app.gallery.page, 2);
        assert_eq!(app.gallery.filters, filters);
        assert!(app.list.filters.is_unrestricted());
    }

    #[test]
    /// What: `--id` opens the detail page without a navigation context.
    fn direct_entry_opens_detail() {
        let options = StartOptions {
            direct_id: Some(111_628),
            ..StartOptions::default()
        };
        let mut app = initialize_app_state(Settings::default(), &options);
        assert_eq!(app.list.page, 1);
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(open_direct_entry(&mut app, &options, &tx));
        assert_eq!(app.screen, Screen::Detail);
        assert!(app.detail.as_ref().is_some_and(|d| d.nav.is_none()));
        assert_eq!(rx.try_recv().map(|r| r.record_id), Ok(111_628));
    }
}
