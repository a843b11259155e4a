use tokio::sync::mpsc;

use crate::sources::CollectionClient;
use crate::state::{DetailRequest, DetailResult};

/// What: Spawn background worker for single-record requests.
///
/// Inputs:
/// - `client`: Collection client
/// - `detail_req_rx`: Channel receiver for detail requests
/// - `detail_res_tx`: Channel sender for results
///
/// Details:
/// - Every request goes to the network; nothing is cached between prev/next steps.
pub fn spawn_details_worker(
    client: CollectionClient,
    mut detail_req_rx: mpsc::UnboundedReceiver<DetailRequest>,
    detail_res_tx: mpsc::UnboundedSender<DetailResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = detail_req_rx.recv().await {
            let result = client.get_by_id(req.record_id).await;
            if detail_res_tx
                .send(DetailResult {
                    id: req.id,
                    record_id: req.record_id,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("details worker stopped");
    });
}
