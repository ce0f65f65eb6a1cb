//! Headless mode - one analysis without the TUI, reported as NDJSON
//!
//! Events are written to stdout one per line, each with an `event` field
//! naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","company":"Klarna","analysis_type":"due_diligence","timestamp":1704700001000}
//! {"event":"analysis_completed","company":"Klarna","analysis_type":"due_diligence","sources":12,"path":"./klarna-due_diligence-report.md","timestamp":1704700042000}
//! ```

pub mod runner;

use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use mintel_core::AnalysisType;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Request sent to the backend
    AnalysisStarted {
        company: String,
        analysis_type: AnalysisType,
        timestamp: i64,
    },

    /// Report received and written to disk
    AnalysisCompleted {
        company: String,
        analysis_type: AnalysisType,
        sources: usize,
        path: String,
        timestamp: i64,
    },

    /// Request failed; no report was produced
    AnalysisFailed { error: String, timestamp: i64 },

    /// Report received but could not be written
    ExportFailed {
        path: String,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Whether this event ends the run unsuccessfully
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            HeadlessEvent::AnalysisFailed { .. } | HeadlessEvent::ExportFailed { .. }
        )
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn analysis_started(company: &str, analysis_type: AnalysisType) -> Self {
        Self::AnalysisStarted {
            company: company.to_string(),
            analysis_type,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(
        company: &str,
        analysis_type: AnalysisType,
        sources: usize,
        path: &Path,
    ) -> Self {
        Self::AnalysisCompleted {
            company: company.to_string(),
            analysis_type,
            sources,
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(error: String) -> Self {
        Self::AnalysisFailed {
            error,
            timestamp: Self::now(),
        }
    }

    pub fn export_failed(path: &Path, error: String) -> Self {
        Self::ExportFailed {
            path: path.display().to_string(),
            error,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_analysis_started_serialization() {
        let value = to_value(&HeadlessEvent::analysis_started(
            "Klarna",
            AnalysisType::Competition,
        ));

        assert_eq!(value["event"], "analysis_started");
        assert_eq!(value["company"], "Klarna");
        assert_eq!(value["analysis_type"], "competition");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_analysis_completed_serialization() {
        let path = PathBuf::from("reports/klarna-due_diligence-report.md");
        let value = to_value(&HeadlessEvent::analysis_completed(
            "Klarna",
            AnalysisType::DueDiligence,
            3,
            &path,
        ));

        assert_eq!(value["event"], "analysis_completed");
        assert_eq!(value["analysis_type"], "due_diligence");
        assert_eq!(value["sources"], 3);
        assert_eq!(value["path"], "reports/klarna-due_diligence-report.md");
    }

    #[test]
    fn test_failure_events() {
        let failed = HeadlessEvent::analysis_failed("Analysis failed: Bad Gateway".to_string());
        assert!(failed.is_failure());
        assert_eq!(to_value(&failed)["error"], "Analysis failed: Bad Gateway");

        let export = HeadlessEvent::export_failed(Path::new("/x.md"), "denied".to_string());
        assert!(export.is_failure());
        assert_eq!(to_value(&export)["event"], "export_failed");

        assert!(!HeadlessEvent::analysis_started("A", AnalysisType::MarketTrends).is_failure());
    }
}
