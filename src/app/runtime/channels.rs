use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{DetailRequest, DetailResult, RecordsRequest, RecordsResult};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop,
///   the terminal event thread and the two fetch workers.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub records_req_tx: mpsc::UnboundedSender<RecordsRequest>,
    pub records_res_rx: mpsc::UnboundedReceiver<RecordsResult>,
    pub detail_req_tx: mpsc::UnboundedSender<DetailRequest>,
    pub detail_res_rx: mpsc::UnboundedReceiver<DetailResult>,
}

/// Worker-side ends of the fetch channels, handed to [`super::workers`].
pub struct WorkerEnds {
    pub records_req_rx: mpsc::UnboundedReceiver<RecordsRequest>,
    pub records_res_tx: mpsc::UnboundedSender<RecordsResult>,
    pub detail_req_rx: mpsc::UnboundedReceiver<DetailRequest>,
    pub detail_res_tx: mpsc::UnboundedSender<DetailResult>,
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - The loop-side `Channels` and the `WorkerEnds` for spawning workers.
    pub fn create() -> (Self, WorkerEnds) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (records_req_tx, records_req_rx) = mpsc::unbounded_channel::<RecordsRequest>();
        let (records_res_tx, records_res_rx) = mpsc::unbounded_channel::<RecordsResult>();
        let (detail_req_tx, detail_req_rx) = mpsc::unbounded_channel::<DetailRequest>();
        let (detail_res_tx, detail_res_rx) = mpsc::unbounded_channel::<DetailResult>();
        (
            Self {
                event_tx,
                event_rx,
                event_thread_cancelled: Arc::new(AtomicBool::new(false)),
                records_req_tx,
                records_res_rx,
                detail_req_tx,
                detail_res_rx,
            },
            WorkerEnds {
                records_req_rx,
                records_res_tx,
                detail_req_rx,
                detail_res_tx,
            },
        )
    }
}
