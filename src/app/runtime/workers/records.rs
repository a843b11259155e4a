use tokio::sync::mpsc;

use crate::sources::CollectionClient;
use crate::state::{RecordsRequest, RecordsResult};

/// What: Spawn background worker for record-set requests.
///
/// Inputs:
/// - `client`: Collection client shared with the detail worker
/// - `records_req_rx`: Channel receiver for record-set requests
/// - `records_res_tx`: Channel sender for results
///
/// Details:
/// - Requests are handled one at a time in arrival order, so each view has at most one
///   fetch in flight; the event loop discards results that are no longer the latest.
/// - Every outcome, success or failure, is sent back with the request's id and view.
pub fn spawn_records_worker(
    client: CollectionClient,
    mut records_req_rx: mpsc::UnboundedReceiver<RecordsRequest>,
    records_res_tx: mpsc::UnboundedSender<RecordsResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = records_req_rx.recv().await {
            let result = client.search(&req.query, req.page, req.limit).await;
            if records_res_tx
                .send(RecordsResult {
                    id: req.id,
                    view: req.view,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("records worker stopped");
    });
}
