use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the thread that forwards terminal events to the event loop.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned (tests drive events directly)
/// - `event_tx`: Channel the events are forwarded on
/// - `cancelled`: Set on exit; the thread stops at the next poll
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
/// - Transient read and poll errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
