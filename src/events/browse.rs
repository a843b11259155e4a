use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{apply_view_preserve_selection, move_selection, request_records};
use crate::state::{AppState, DetailRequest, Focus, RecordsRequest, ViewKind};

/// Handle key events on a browse view (list or gallery).
///
/// Typing edits the client-side query; arrows move the selection (the gallery
/// moves by whole rows on Up/Down). The gallery's filter panel takes over when
/// it has focus.
pub fn handle_browse_key(
    ke: &KeyEvent,
    app: &mut AppState,
    kind: ViewKind,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) {
    if kind == ViewKind::Gallery && app.gallery.focus == Focus::Filters {
        super::gallery::handle_filters_key(ke, &mut app.gallery);
        return;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Enter => {
            crate::logic::detail::open_selected(app, kind, detail_tx);
        }
        KeyCode::PageDown => next_page(app, kind, records_tx),
        KeyCode::PageUp => prev_page(app, kind, records_tx),
        KeyCode::Char('r') if ctrl => submit_remote_search(app, kind, records_tx),
        KeyCode::Char('u') if ctrl => edit_query(app.browse_mut(kind), String::clear),
        KeyCode::Char('o') if ctrl && kind == ViewKind::List => {
            let view = &mut app.list;
            if let Some(sort) = view.sort.as_mut() {
                sort.order = sort.order.flipped();
            }
            apply_view_preserve_selection(view);
        }
        KeyCode::BackTab if kind == ViewKind::List => {
            let view = &mut app.list;
            if let Some(sort) = view.sort.as_mut() {
                sort.field = sort.field.next();
            }
            apply_view_preserve_selection(view);
        }
        KeyCode::Char('x') if ctrl && kind == ViewKind::Gallery => {
            let view = &mut app.gallery;
            view.filters.clear();
            view.query.clear();
            apply_view_preserve_selection(view);
        }
        KeyCode::Tab if kind == ViewKind::Gallery => app.gallery.focus = Focus::Filters,
        KeyCode::Up => {
            let step = row_step(app, kind);
            move_selection(app.browse_mut(kind), -step);
        }
        KeyCode::Down => {
            let step = row_step(app, kind);
            move_selection(app.browse_mut(kind), step);
        }
        KeyCode::Left if kind == ViewKind::Gallery => move_selection(&mut app.gallery, -1),
        KeyCode::Right if kind == ViewKind::Gallery => move_selection(&mut app.gallery, 1),
        KeyCode::Home => {
            let view = app.browse_mut(kind);
            move_selection(view, isize::MIN);
        }
        KeyCode::End => {
            let view = app.browse_mut(kind);
            move_selection(view, isize::MAX);
        }
        KeyCode::Backspace => edit_query(app.browse_mut(kind), |q| {
            q.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit_query(app.browse_mut(kind), |q| q.push(c)),
        _ => {}
    }
}

/// Selection step for Up/Down: one row in the list, one grid row in the gallery.
fn row_step(app: &AppState, kind: ViewKind) -> isize {
    match kind {
        ViewKind::List => 1,
        ViewKind::Gallery => isize::try_from(app.gallery.columns.max(1)).unwrap_or(1),
    }
}

/// Apply an edit to the client-side query and recompute the visible records.
fn edit_query(view: &mut crate::state::BrowseState, edit: impl FnOnce(&mut String)) {
    edit(&mut view.query);
    apply_view_preserve_selection(view);
}

/// What: Send the typed query to the server as a search, starting from page 1.
///
/// Details:
/// - The typed text moves from the client-side filter to the remote query, so the
///   server's ranking is shown as-is; an empty query goes back to listing the collection.
fn submit_remote_search(
    app: &mut AppState,
    kind: ViewKind,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
) {
    let view = app.browse_mut(kind);
    view.remote_query = view.query.trim().to_string();
    view.query.clear();
    view.page = 1;
    tracing::info!(view = kind.as_str(), query = %view.remote_query, "server-side search");
    request_records(app, kind, records_tx);
}

/// What: Load the next remote page when the API reports one.
///
/// Details:
/// - Ignored while loading or failed; without a reported page count, a full page
///   is taken to mean more records may follow.
fn next_page(
    app: &mut AppState,
    kind: ViewKind,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
) {
    let page_size = app.settings.page_size;
    let view = app.browse_mut(kind);
    let Some(set) = view.records.loaded() else {
        return;
    };
    let total_pages = set.pagination.total_pages;
    let has_more = if total_pages > 0 {
        u64::from(view.page) < total_pages
    } else {
        u32::try_from(set.records.len()).is_ok_and(|n| n >= page_size)
    };
    if !has_more {
        return;
    }
    view.page += 1;
    request_records(app, kind, records_tx);
}

/// Load the previous remote page, if any.
fn prev_page(
    app: &mut AppState,
    kind: ViewKind,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
) {
    let view = app.browse_mut(kind);
    if view.page <= 1 || view.records.is_loading() {
        return;
    }
    view.page -= 1;
    request_records(app, kind, records_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Artwork, Fetch, Pagination, RecordSet, Screen, SortField, SortOrder};

    fn loaded(app: &mut AppState, kind: ViewKind, titles: &[&str], total_pages: u64) {
        let view = app.browse_mut(kind);
        view.records = Fetch::Loaded(RecordSet {
            records: titles
                .iter()
                .zip(1..)
                .map(|(t, id)| Artwork {
                    id,
                    title: Some((*t).to_string()),
                    ..Artwork::default()
                })
                .collect(),
            pagination: Pagination {
                total_pages,
                ..Pagination::default()
            },
        });
        apply_view_preserve_selection(view);
    }

    /// Feed one key to `kind` and return the records request it produced, if any.
    fn send(
        app: &mut AppState,
        kind: ViewKind,
        code: KeyCode,
        mods: KeyModifiers,
    ) -> Option<RecordsRequest> {
        let (rtx, mut rrx) = mpsc::unbounded_channel();
        let (dtx, _drx) = mpsc::unbounded_channel();
        handle_browse_key(&KeyEvent::new(code, mods), app, kind, &rtx, &dtx);
        rrx.try_recv().ok()
    }

    #[test]
    /// What: Typing filters the list client-side; Backspace and Ctrl+U undo it.
    fn typing_filters_client_side() {
        let mut app = AppState::default();
        loaded(&mut app, ViewKind::List, &["Nighthawks", "The Bedroom", "Nocturne"], 1);
        for c in "noc".chars() {
            assert!(send(&mut app, ViewKind::List, KeyCode::Char(c), KeyModifiers::NONE).is_none());
        }
        assert_eq!(app.list.query, "noc");
        assert_eq!(app.list.visible.len(), 1);
        send(&mut app, ViewKind::List, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.list.query, "no");
        assert_eq!(app.list.visible.len(), 1);
        send(&mut app, ViewKind::List, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(app.list.visible.len(), 3);
    }

    #[test]
    /// What: Shift+Tab cycles the sort field and Ctrl+O flips the direction.
    fn sort_keys_reorder_list() {
        let mut app = AppState::default();
        loaded(&mut app, ViewKind::List, &["B", "C", "A"], 1);
        assert_eq!(app.list.visible[0].display_title(), "A");
        send(&mut app, ViewKind::List, KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert_eq!(app.list.sort.map(|s| s.order), Some(SortOrder::Desc));
        assert_eq!(app.list.visible[0].display_title(), "C");
        send(&mut app, ViewKind::List, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(app.list.sort.map(|s| s.field), Some(SortField::Artist));
    }

    #[test]
    /// What: PageDown/PageUp request neighbouring pages within the reported range.
    fn paging_requests_pages() {
        let mut app = AppState::default();
        loaded(&mut app, ViewKind::List, &["A"], 2);
        assert!(send(&mut app, ViewKind::List, KeyCode::PageUp, KeyModifiers::NONE).is_none());
        let req = send(&mut app, ViewKind::List, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(req.map(|r| r.page), Some(2));
        assert!(app.list.records.is_loading());

        loaded(&mut app, ViewKind::List, &["A"], 2);
        assert!(send(&mut app, ViewKind::List, KeyCode::PageDown, KeyModifiers::NONE).is_none());
        let req = send(&mut app, ViewKind::List, KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(req.map(|r| r.page), Some(1));
    }

    #[test]
    /// What: Ctrl+R turns the typed text into a server-side search from page 1.
    fn ctrl_r_submits_remote_search() {
        let mut app = AppState::default();
        app.screen = Screen::Gallery;
        loaded(&mut app, ViewKind::Gallery, &["A"], 5);
        app.gallery.page = 3;
        app.gallery.query = " water lilies ".into();
        let req = send(&mut app, ViewKind::Gallery, KeyCode::Char('r'), KeyModifiers::CONTROL)
            .expect("search request");
        assert_eq!(req.query, "water lilies");
        assert_eq!(req.page, 1);
        assert!(app.gallery.query.is_empty());
    }

    #[test]
    /// What: Gallery arrows move by one card horizontally and one row vertically.
    fn gallery_grid_navigation() {
        let mut app = AppState::default();
        loaded(&mut app, ViewKind::Gallery, &["a", "b", "c", "d", "e", "f", "g"], 1);
        app.gallery.columns = 3;
        send(&mut app, ViewKind::Gallery, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.gallery.selected, 3);
        send(&mut app, ViewKind::Gallery, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.gallery.selected, 4);
        send(&mut app, ViewKind::Gallery, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.gallery.selected, 6);
        send(&mut app, ViewKind::Gallery, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.gallery.selected, 0);
    }
}
