//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, one per screen
//! - `report`: Report viewer handlers (scroll, copy, export, sources)

pub(crate) mod keys;
pub(crate) mod report;
pub(crate) mod update;


use std::path::PathBuf;

use mintel_client::AnalysisRequest;
use tokio::sync::watch;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send the analysis request in a background task.
    ///
    /// The task answers with `AnalysisCompleted` or `AnalysisFailed` tagged
    /// with `generation`.
    RunAnalysis {
        generation: u64,
        request: AnalysisRequest,
    },

    /// Start the loading screen animation timers.
    ///
    /// Two independent tasks send `LoadingMessageTick` every
    /// `message_interval_ms` and `LoadingDotsTick` every `dots_interval_ms`
    /// until `shutdown_rx` flips to `true` or the message channel closes.
    StartLoadingTimers {
        generation: u64,
        message_interval_ms: u64,
        dots_interval_ms: u64,
        shutdown_rx: watch::Receiver<bool>,
    },

    /// Copy text to the clipboard.
    ///
    /// If `command` is empty the OSC 52 escape sequence is written to the
    /// terminal, otherwise `command` is run with `content` on stdin.
    CopyToClipboard { content: String, command: String },

    /// Send `CopiedAckExpired { ack_id }` after `after_ms`
    ExpireCopiedAck { ack_id: u64, after_ms: u64 },

    /// Write the report markdown to `path`
    ExportReport { path: PathBuf, content: String },

    /// Open a URL in the browser.
    ///
    /// Fire-and-forget OS call. If `browser` is empty, the platform default
    /// opener is used.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn action_and_message(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
