use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::app::StartOptions;
use crate::sources::CollectionClient;
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod handlers;
mod init;
mod workers;

use background::spawn_event_thread;
use channels::Channels;
use handlers::{handle_detail_result, handle_records_result};
use init::{initialize_app_state, open_direct_entry};
use workers::{details::spawn_details_worker, records::spawn_records_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the artsea TUI end-to-end: initialize terminal and state, spawn the fetch
/// workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (config file merged with CLI overrides)
/// - `options`: Startup choices (server-side search, filters, page, direct record id)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Workers: one for record sets, one for single records; each handles one request at a time.
/// - Event loop: renders a frame, then handles either a terminal event or a fetch result.
///   After every terminal event the visible browse view is loaded if it never was.
/// - Headless: `ARTSEA_TEST_HEADLESS=1` skips terminal setup and the event thread.
///
/// # Errors
/// - Returns `Err` when the HTTP client cannot be built or the terminal cannot be set up or restored.
pub async fn run(settings: Settings, options: StartOptions) -> Result<()> {
    let client = CollectionClient::from_settings(&settings)?;
    let headless = std::env::var("ARTSEA_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(settings, &options);

    let (mut channels, ends) = Channels::create();
    spawn_records_worker(client.clone(), ends.records_req_rx, ends.records_res_tx);
    spawn_details_worker(client, ends.detail_req_rx, ends.detail_res_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if !open_direct_entry(&mut app, &options, &channels.detail_req_tx) {
        crate::logic::ensure_loaded(&mut app, &channels.records_req_tx);
    }

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    &ev,
                    &mut app,
                    &channels.records_req_tx,
                    &channels.detail_req_tx,
                ) {
                    break;
                }
                crate::logic::ensure_loaded(&mut app, &channels.records_req_tx);
            }
            Some(res) = channels.records_res_rx.recv() => {
                handle_records_result(&mut app, res);
            }
            Some(res) = channels.detail_res_rx.recv() => {
                handle_detail_result(&mut app, res);
            }
            else => break,
        }
    }

    // Signal event reading thread to exit immediately
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
