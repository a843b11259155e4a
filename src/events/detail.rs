use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::detail::{back, step};
use crate::sources::image_url;
use crate::state::{AppState, DetailRequest, Modal};

/// Handle key events on the detail page.
///
/// Left/`h` and Right/`l` step through the navigation snapshot (no-ops at the
/// ends or without one), Esc/Backspace/`b` go back, `r` reloads the record and
/// `o` opens the image in the system viewer.
pub fn handle_detail_key(
    ke: &KeyEvent,
    app: &mut AppState,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) {
    match ke.code {
        KeyCode::Left | KeyCode::Char('h' | 'p') => {
            step(app, false, detail_tx);
        }
        KeyCode::Right | KeyCode::Char('l' | 'n') => {
            step(app, true, detail_tx);
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => back(app),
        KeyCode::Char('r') => crate::logic::request_detail(app, detail_tx),
        KeyCode::Char('o') => open_image(app),
        _ => {}
    }
}

/// Open the loaded record's image at detail size; alerts when there is none.
fn open_image(app: &mut AppState) {
    let Some(artwork) = app.detail.as_ref().and_then(|d| d.record.loaded()) else {
        return;
    };
    let url = image_url(artwork.image_id.as_deref(), app.settings.detail_image_size);
    if url.is_empty() {
        app.modal = Modal::Alert {
            message: "No Image Available".to_string(),
        };
        return;
    }
    tracing::info!(url = %url, "opening image");
    if let Err(msg) = crate::util::open_url(&url) {
        tracing::warn!(error = %msg, "failed to open image");
        app.modal = Modal::Alert { message: msg };
    }
}
