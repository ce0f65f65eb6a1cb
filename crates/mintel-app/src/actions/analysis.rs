//! Backend request task

use mintel_client::{AnalysisClient, AnalysisRequest};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;

/// Send one analysis request and report the outcome as a message.
///
/// Exactly one request is issued; there is no retry. The result carries
/// `generation` so the update function can discard it if the user has moved
/// on in the meantime.
pub(super) fn spawn_analysis_request(
    generation: u64,
    request: AnalysisRequest,
    client: AnalysisClient,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let msg = match client.analyze(&request).await {
            Ok(response) => Message::AnalysisCompleted {
                generation,
                response,
            },
            Err(e) => {
                warn!(
                    kind = e.kind(),
                    "Analysis request (generation {}) failed: {}", generation, e
                );
                Message::AnalysisFailed {
                    generation,
                    error: mintel_core::Error::from(e).to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before analysis result was delivered");
        }
    });
}
