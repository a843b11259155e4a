use crate::sources::CatalogError;
use crate::state::{AppState, DetailResult, Fetch, RecordSet, RecordsResult, ViewKind};

/// Message shown when the list's record set cannot be loaded.
const LIST_FAILED: &str = "Failed to fetch artworks. Please try again later.";
/// Message shown when the gallery's record set cannot be loaded.
const GALLERY_FAILED: &str = "Failed to load gallery.";
/// Message shown when a single record cannot be loaded.
const DETAIL_FAILED: &str = "Failed to load artwork.";

/// What: Handle a finished record-set request.
///
/// Inputs:
/// - `app`: Application state
/// - `res`: Result from the records worker
///
/// Details:
/// - Drops results whose id is not the view's latest request.
/// - Replaces the record set wholesale, or turns the error into a failed state.
/// - Recomputes the visible records, keeping the selection by id when possible.
pub fn handle_records_result(app: &mut AppState, res: RecordsResult) {
    let view = app.browse_mut(res.view);
    if res.id != view.latest_request_id {
        tracing::debug!(
            id = res.id,
            latest = view.latest_request_id,
            view = res.view.as_str(),
            "dropping stale records response"
        );
        return;
    }
    view.records = match res.result {
        Ok(page) => {
            tracing::info!(
                view = res.view.as_str(),
                records = page.data.len(),
                total = page.pagination.total,
                "records loaded"
            );
            Fetch::Loaded(RecordSet::from(page))
        }
        Err(e) => {
            tracing::warn!(error = %e, view = res.view.as_str(), "failed to fetch artworks");
            let msg = match res.view {
                ViewKind::List => LIST_FAILED,
                ViewKind::Gallery => GALLERY_FAILED,
            };
            Fetch::Failed(msg.to_string())
        }
    };
    crate::logic::apply_view_preserve_selection(view);
    if res.view == ViewKind::Gallery {
        clamp_filter_cursor(app);
    }
}

/// What: Handle a finished single-record request.
///
/// Inputs:
/// - `app`: Application state
/// - `res`: Result from the detail worker
///
/// Details:
/// - Drops results that are not for the detail page's latest request (the user stepped on).
/// - A 404 names the missing id; other failures show the generic message.
pub fn handle_detail_result(app: &mut AppState, res: DetailResult) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    if res.id != detail.latest_request_id {
        tracing::debug!(
            id = res.id,
            record_id = res.record_id,
            latest = detail.latest_request_id,
            "dropping stale artwork response"
        );
        return;
    }
    detail.record = match res.result {
        Ok(artwork) => Fetch::Loaded(artwork),
        Err(CatalogError::NotFound(id)) => {
            tracing::warn!(record_id = id, "artwork not found");
            Fetch::Failed(format!("Artwork {id} was not found."))
        }
        Err(e) => {
            tracing::warn!(error = %e, record_id = res.record_id, "failed to load artwork");
            Fetch::Failed(DETAIL_FAILED.to_string())
        }
    };
}

/// Keep the gallery filter cursor inside the freshly loaded facet list.
fn clamp_filter_cursor(app: &mut AppState) {
    let total = crate::events::filter_entries(&app.gallery).len();
    app.gallery.filter_cursor = app.gallery.filter_cursor.min(total.saturating_sub(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Artwork, DetailState, SearchPage};

    fn page(ids: &[u64]) -> SearchPage {
        SearchPage {
            data: ids
                .iter()
                .map(|&id| Artwork {
                    id,
                    ..Artwork::default()
                })
                .collect(),
            ..SearchPage::default()
        }
    }

    #[test]
    /// What: Verify that `handle_records_result` ignores results with a mismatched id.
    ///
    /// Inputs:
    /// - List view whose latest request id is 2
    /// - Result with id 1
    ///
    /// Output:
    /// - The view stays in its loading state
    fn handle_records_result_ignores_stale_results() {
        let mut app = AppState::default();
        app.list.latest_request_id = 2;
        app.list.records = Fetch::Loading;
        handle_records_result(
            &mut app,
            RecordsResult {
                id: 1,
                view: ViewKind::List,
                result: Ok(page(&[1, 2])),
            },
        );
        assert!(app.list.records.is_loading());
        assert!(app.list.visible.is_empty());
    }

    #[test]
    /// What: Matching results replace the record set and fill the visible records.
    fn handle_records_result_updates_when_id_matches() {
        let mut app = AppState::default();
        app.gallery.latest_request_id = 4;
        handle_records_result(
            &mut app,
            RecordsResult {
                id: 4,
                view: ViewKind::Gallery,
                result: Ok(page(&[9, 8, 7])),
            },
        );
        assert_eq!(app.gallery.loaded_len(), 3);
        assert_eq!(
            app.gallery.visible.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![9, 8, 7]
        );
        assert_eq!(app.gallery.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Failures become a user-facing failed state with no visible records.
    fn handle_records_result_failure_sets_message() {
        let mut app = AppState::default();
        app.list.latest_request_id = 1;
        handle_records_result(
            &mut app,
            RecordsResult {
                id: 1,
                view: ViewKind::List,
                result: Err(CatalogError::Network("timeout".into())),
            },
        );
        assert_eq!(app.list.records, Fetch::Failed(LIST_FAILED.to_string()));
        assert!(app.list.visible.is_empty());
    }

    #[test]
    /// What: The gallery reports its own failure message, leaving the list untouched.
    fn handle_records_result_gallery_failure_message() {
        let mut app = AppState::default();
        app.gallery.latest_request_id = 2;
        handle_records_result(
            &mut app,
            RecordsResult {
                id: 2,
                view: ViewKind::Gallery,
                result: Err(CatalogError::Network("refused".into())),
            },
        );
        assert_eq!(
            app.gallery.records,
            Fetch::Failed("Failed to load gallery.".to_string())
        );
        assert!(!matches!(app.list.records, Fetch::Failed(_)));
    }

    #[test]
    /// What: Detail results apply only for the latest request; 404 names the id.
    fn handle_detail_result_latest_only() {
        let mut app = AppState::default();
        app.detail = Some(DetailState {
            record_id: 5,
            record: Fetch::Loading,
            nav: None,
            return_to: ViewKind::List,
            latest_request_id: 3,
        });
        handle_detail_result(
            &mut app,
            DetailResult {
                id: 2,
                record_id: 4,
                result: Ok(Artwork::default()),
            },
        );
        assert!(app.detail.as_ref().is_some_and(|d| d.record.is_loading()));

        handle_detail_result(
            &mut app,
            DetailResult {
                id: 3,
                record_id: 5,
                result: Err(CatalogError::NotFound(5)),
            },
        );
        assert_eq!(
            app.detail.as_ref().map(|d| d.record.clone()),
            Some(Fetch::Failed("Artwork 5 was not found.".to_string()))
        );
    }
}
