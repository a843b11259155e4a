//! Entering, stepping through and leaving the detail page.

use tokio::sync::mpsc;

use crate::logic::navigation::open_from;
use crate::state::{AppState, DetailRequest, DetailState, Fetch, Screen, ViewKind};

/// What: Open the highlighted record of a browse view on the detail page.
///
/// Inputs:
/// - `app`: Application state
/// - `kind`: Browse view the user activated a record in
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - `true` when a detail page was opened; `false` when nothing is selected.
///
/// Details:
/// - Snapshots the view's visible ids into a `NavContext`; the browse view itself is
///   left untouched so returning restores it exactly.
pub fn open_selected(
    app: &mut AppState,
    kind: ViewKind,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    let view = app.browse(kind);
    let Some(nav) = open_from(&view.visible, view.selected, kind) else {
        return false;
    };
    let Some(record_id) = nav.current_id() else {
        return false;
    };
    tracing::info!(
        record_id,
        position = %nav.position_label(),
        from = kind.as_str(),
        "opening artwork"
    );
    app.detail = Some(DetailState {
        record_id,
        record: Fetch::Idle,
        nav: Some(nav),
        return_to: kind,
        latest_request_id: 0,
    });
    app.screen = Screen::Detail;
    crate::logic::request_detail(app, detail_tx);
    true
}

/// What: Open a record by id without any navigation context.
///
/// Inputs:
/// - `app`: Application state
/// - `record_id`: Collection identifier
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - Detail page for `record_id` with prev/next disabled; Back returns to the default view.
pub fn open_direct(
    app: &mut AppState,
    record_id: u64,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) {
    tracing::info!(record_id, "opening artwork directly");
    app.detail = Some(DetailState {
        record_id,
        record: Fetch::Idle,
        nav: None,
        return_to: app.settings.default_view,
        latest_request_id: 0,
    });
    app.screen = Screen::Detail;
    crate::logic::request_detail(app, detail_tx);
}

/// What: Step the detail page to the previous or next record of its snapshot.
///
/// Inputs:
/// - `app`: Application state
/// - `forward`: `true` for next, `false` for prev
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - `true` when the page moved and a fetch was issued; `false` at a boundary or
///   without a context (state unchanged).
pub fn step(
    app: &mut AppState,
    forward: bool,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    let Some(detail) = app.detail.as_mut() else {
        return false;
    };
    let Some(nav) = detail.nav.as_mut() else {
        return false;
    };
    let target = if forward {
        nav.step_next()
    } else {
        nav.step_prev()
    };
    let Some(record_id) = target else {
        return false;
    };
    detail.record_id = record_id;
    crate::logic::request_detail(app, detail_tx);
    true
}

/// Leave the detail page for the view it was opened from.
///
/// The detail state is kept so its last record is not refetched needlessly; the
/// browse view is shown exactly as it was left.
pub fn back(app: &mut AppState) {
    if let Some(detail) = app.detail.as_ref() {
        app.screen = detail.return_to.into();
    }
}
