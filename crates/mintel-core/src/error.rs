//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Errors
    // ─────────────────────────────────────────────────────────────
    /// The single user-facing failure kind. The message is the detail shown
    /// after "Analysis failed: " on the input screen.
    #[error("Analysis failed: {message}")]
    Analysis { message: String },

    #[error("Unknown analysis type: {value}")]
    UnknownAnalysisType { value: String },

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Report Output Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to export report to {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn unknown_analysis_type(value: impl Into<String>) -> Self {
        Self::UnknownAnalysisType {
            value: value.into(),
        }
    }

    pub fn invalid_server_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidServerUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_display() {
        let err = Error::analysis("Internal Server Error");
        assert_eq!(err.to_string(), "Analysis failed: Internal Server Error");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_export_error_mentions_path() {
        let err = Error::export("/reports/acme.md", "permission denied");
        let text = err.to_string();
        assert!(text.contains("/reports/acme.md"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn test_unknown_analysis_type_error() {
        let err = Error::unknown_analysis_type("astrology");
        assert!(err.to_string().contains("astrology"));
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("writing report").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_passes_core_errors_through() {
        let result: Result<()> = Err(Error::config("bad toml"));
        let err = result
            .with_context(|| "writing config".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
