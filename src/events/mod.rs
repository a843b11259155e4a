//! Event handling layer for artsea's TUI.
//!
//! This module exposes `handle_event` and delegates screen-specific keys to
//! submodules: browse views (list and gallery), the gallery filter panel, and
//! the detail page.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, DetailRequest, Modal, RecordsRequest, Screen, ViewKind};

mod browse;
mod detail;
mod gallery;

pub use gallery::filter_entries;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    records_tx: &mpsc::UnboundedSender<RecordsRequest>,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling
    match &app.modal {
        Modal::Alert { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::F(1)) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::None => {}
    }

    if handle_global_key(ke, app) {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.screen {
        Screen::List => browse::handle_browse_key(ke, app, ViewKind::List, records_tx, detail_tx),
        Screen::Gallery => {
            browse::handle_browse_key(ke, app, ViewKind::Gallery, records_tx, detail_tx);
        }
        Screen::Detail => detail::handle_detail_key(ke, app, detail_tx),
    }
    false
}

/// What: Handle keys that work on every screen.
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - F1 opens help; F2/F3 switch to the list/gallery views, leaving any detail page behind.
fn handle_global_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::F(1) => app.modal = Modal::Help,
        KeyCode::F(2) => app.screen = Screen::List,
        KeyCode::F(3) => app.screen = Screen::Gallery,
        _ => return false,
    }
    true
}
