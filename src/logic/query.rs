use tokio::sync::mpsc;

use crate::state::{AppState, DetailRequest, Fetch, RecordsRequest, ViewKind};

/// What: Ask the records worker for the current page of a browse view, with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; hands out an id and marks the view as loading
/// - `kind`: View whose record set is (re)loaded
/// - `records_tx`: Channel to the records worker
///
/// Output:
/// - Sends a `RecordsRequest` carrying the view's remote query, page and the configured
///   page size; the view's `latest_request_id` is updated to match.
///
/// Details:
/// - The id allows correlating responses so stale pages can be discarded.
/// - The visible set is cleared while loading; the record set is replaced wholesale later.
pub fn request_records(
    app: &mut AppState,
    kind: ViewKind,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
) {
    let id = app.take_request_id();
    let limit = app.settings.page_size;
    let view = app.browse_mut(kind);
    view.latest_request_id = id;
    view.records = Fetch::Loading;
    crate::logic::apply_view_preserve_selection(view);
    tracing::debug!(id, view = kind.as_str(), page = view.page, "requesting records");
    let _ = records_tx.send(RecordsRequest {
        id,
        view: kind,
        query: view.remote_query.clone(),
        page: view.page,
        limit,
    });
}

/// What: Load the visible browse view's first record set if it was never requested.
///
/// Inputs:
/// - `app`: Application state
/// - `records_tx`: Channel to the records worker
///
/// Output:
/// - `true` when a request was sent. Views are only loaded once; later loads are explicit
///   (paging, server-side search).
pub fn ensure_loaded(
    app: &mut AppState,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
) -> bool {
    let Some(kind) = app.active_view() else {
        return false;
    };
    if !matches!(app.browse(kind).records, Fetch::Idle) {
        return false;
    }
    request_records(app, kind, records_tx);
    true
}

/// What: Ask the detail worker for the record the detail page currently points at.
///
/// Inputs:
/// - `app`: Mutable application state with a detail page present
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - Sends a `DetailRequest` and marks the detail record as loading; no-op without a detail page.
pub fn request_detail(app: &mut AppState, detail_tx: &mpsc::UnboundedSender<DetailRequest>) {
    let id = app.take_request_id();
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    detail.latest_request_id = id;
    detail.record = Fetch::Loading;
    tracing::debug!(id, record_id = detail.record_id, "requesting artwork");
    let _ = detail_tx.send(DetailRequest {
        id,
        record_id: detail.record_id,
    });
}
