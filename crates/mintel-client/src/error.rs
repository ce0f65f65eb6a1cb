//! Client error types

use thiserror::Error;

/// Failure talking to the analysis backend.
///
/// The display text is the detail shown after "Analysis failed: ".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// Connection refused, DNS failure, timeout, reset...
    #[error("{0}")]
    Network(String),

    /// Non-2xx response. `status_text` is the reason phrase for `code`.
    #[error("{status_text}")]
    Status { code: u16, status_text: String },

    /// 2xx response whose body is not the expected JSON
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(code: reqwest::StatusCode) -> Self {
        let status_text = code
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", code.as_u16()));
        Self::Status {
            code: code.as_u16(),
            status_text,
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidUrl { .. } => "invalid_url",
            ClientError::Build(_) => "build",
            ClientError::Network(_) => "network",
            ClientError::Status { .. } => "http_status",
            ClientError::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(code) = err.status() {
            ClientError::status(code)
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<ClientError> for mintel_core::Error {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUrl { url, reason } => {
                mintel_core::Error::invalid_server_url(url, reason)
            }
            other => mintel_core::Error::analysis(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_reason_phrase() {
        let err = ClientError::status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
        assert!(matches!(err, ClientError::Status { code: 500, .. }));
    }

    #[test]
    fn test_status_without_reason_phrase_falls_back_to_code() {
        let code = reqwest::StatusCode::from_u16(599).unwrap();
        let err = ClientError::status(code);
        assert_eq!(err.to_string(), "HTTP 599");
    }

    #[test]
    fn test_into_core_error_is_analysis_failure() {
        let err: mintel_core::Error = ClientError::Network("connection refused".into()).into();
        assert_eq!(err.to_string(), "Analysis failed: connection refused");
        assert!(matches!(err, mintel_core::Error::Analysis { .. }));
    }

    #[test]
    fn test_invalid_url_into_core_error() {
        let err: mintel_core::Error = ClientError::InvalidUrl {
            url: "::".into(),
            reason: "relative URL without a base".into(),
        }
        .into();
        assert!(matches!(err, mintel_core::Error::InvalidServerUrl { .. }));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ClientError::Decode("x".into()).kind(), "decode");
        assert_eq!(ClientError::Network("x".into()).kind(), "network");
    }
}
