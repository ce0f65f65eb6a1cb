//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use mintel_client::AnalysisResponse;
use mintel_core::AnalysisType;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    /// Move the dashboard highlight to the next card
    DashboardNext,
    /// Move the dashboard highlight to the previous card
    DashboardPrev,
    /// Choose an analysis type and open the input form
    SelectAnalysis(AnalysisType),

    // ─────────────────────────────────────────────────────────
    // Input form
    // ─────────────────────────────────────────────────────────
    /// Replace the subject text
    SubjectInput { text: String },
    /// Fill the subject with the next/previous example
    CycleExample { forward: bool },
    /// Submit the form
    SubmitAnalysis,

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────
    /// Loading screen entered; starts the animation timers
    LoadingStarted { generation: u64 },
    /// Rotate to the next status message
    LoadingMessageTick { generation: u64 },
    /// Advance the ellipsis animation
    LoadingDotsTick { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Backend results
    // ─────────────────────────────────────────────────────────
    AnalysisCompleted {
        generation: u64,
        response: AnalysisResponse,
    },
    /// `error` is the full user-facing text ("Analysis failed: ...")
    AnalysisFailed { generation: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Return to the dashboard from any screen
    BackToDashboard,
    /// Start another analysis of the same type from the report
    NewAnalysis,

    // ─────────────────────────────────────────────────────────
    // Report viewer
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    /// Copy the report markdown to the clipboard
    CopyReport,
    /// Clipboard write succeeded
    ReportCopied,
    /// Clipboard write failed
    ReportCopyFailed { error: String },
    /// The "Copied" acknowledgment with this id has expired
    CopiedAckExpired { ack_id: u64 },

    /// Export the report markdown to a file
    ExportReport,
    ReportExported { path: PathBuf },
    ReportExportFailed { error: String },

    /// Open the source at `index` (zero-based) in the browser
    OpenSource { index: usize },
}
