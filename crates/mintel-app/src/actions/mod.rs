//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use mintel_client::AnalysisClient;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::UpdateAction;

pub(super) mod analysis;
pub(super) mod loading;
pub mod report;

/// Execute an action, spawning background tasks where it would block
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &AnalysisClient) {
    match action {
        UpdateAction::RunAnalysis {
            generation,
            request,
        } => {
            analysis::spawn_analysis_request(generation, request, client.clone(), msg_tx);
        }

        UpdateAction::StartLoadingTimers {
            generation,
            message_interval_ms,
            dots_interval_ms,
            shutdown_rx,
        } => {
            loading::spawn_loading_timers(
                generation,
                message_interval_ms,
                dots_interval_ms,
                shutdown_rx,
                msg_tx,
            );
        }

        UpdateAction::CopyToClipboard { content, command } => {
            if command.trim().is_empty() {
                // Runs inline: the OSC 52 sequence must not interleave with a
                // frame being drawn.
                let msg = clipboard_message(report::copy_via_osc52(&content));
                if msg_tx.try_send(msg).is_err() {
                    warn!("Dropped clipboard result, message channel full or closed");
                }
            } else {
                tokio::spawn(async move {
                    let result = report::copy_via_command(&content, &command).await;
                    let _ = msg_tx.send(clipboard_message(result)).await;
                });
            }
        }

        UpdateAction::ExpireCopiedAck { ack_id, after_ms } => {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(after_ms)).await;
                let _ = msg_tx.send(Message::CopiedAckExpired { ack_id }).await;
            });
        }

        UpdateAction::ExportReport { path, content } => {
            tokio::spawn(async move {
                let msg = match report::export_report(&path, &content).await {
                    Ok(()) => Message::ReportExported { path },
                    Err(e) => Message::ReportExportFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::OpenUrl { url, browser } => {
            // Fire-and-forget: spawn the process and return immediately.
            match report::open_url_in_browser(&url, &browser) {
                Ok(()) => debug!("Opened {} in browser", url),
                Err(e) => error!("Failed to open {}: {}", url, e),
            }
        }
    }
}

fn clipboard_message(result: mintel_core::Result<()>) -> Message {
    match result {
        Ok(()) => Message::ReportCopied,
        Err(e) => Message::ReportCopyFailed {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_clipboard_command_reports_through_channel() {
        let client = AnalysisClient::new("http://127.0.0.1:9", None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        let temp = tempdir().unwrap();
        let out = temp.path().join("clip.txt");

        handle_action(
            UpdateAction::CopyToClipboard {
                content: "# Acme Corp".to_string(),
                command: format!("tee {}", out.display()),
            },
            tx,
            &client,
        );

        // The command runs in a task, not on the caller
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Message::ReportCopied));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "# Acme Corp");
    }

    #[tokio::test]
    async fn test_clipboard_command_failure_becomes_message() {
        let client = AnalysisClient::new("http://127.0.0.1:9", None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CopyToClipboard {
                content: "x".to_string(),
                command: "definitely-not-a-clipboard-tool-42".to_string(),
            },
            tx,
            &client,
        );

        match rx.recv().await.unwrap() {
            Message::ReportCopyFailed { error } => {
                assert!(error.contains("definitely-not-a-clipboard-tool-42"))
            }
            other => panic!("expected ReportCopyFailed, got {:?}", other),
        }
    }
}
