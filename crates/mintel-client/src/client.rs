//! HTTP client for the analysis backend

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::error::ClientError;
use crate::protocol::{AnalysisRequest, AnalysisResponse, HealthStatus};

/// Path of the analysis endpoint, relative to the server base URL
pub const ANALYZE_PATH: &str = "api/analyze";

/// Path of the health probe, relative to the server base URL
pub const HEALTH_PATH: &str = "health";

/// Client for the analysis backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted, so
/// each spawned request task gets its own handle.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AnalysisClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` leaves the request lifecycle to the transport
    /// defaults, which is what the backend expects for slow research runs.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "market-intel/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    /// Run one analysis. Exactly one request is sent; there is no retry.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, ClientError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        info!(
            "Requesting {} analysis for '{}' from {}",
            request.analysis_type, request.company_name, url
        );

        let response = self.http.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let err = ClientError::status(status);
            warn!("Analysis request rejected: {}", err);
            return Err(err);
        }

        let body = response.text().await?;
        let parsed: AnalysisResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!(
            "Analysis response: {} bytes of report, {} sources",
            parsed.report.len(),
            parsed.sources.len()
        );
        Ok(parsed)
    }

    /// Probe `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Parse and normalize the server base URL.
///
/// A trailing slash is added so that relative endpoint paths are appended to
/// any path prefix instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintel_core::AnalysisType;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> AnalysisClient {
        AnalysisClient::new(&server.url(), None).unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = AnalysisClient::new("http://localhost:8000/intel", None).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/intel/");
        assert_eq!(
            client.endpoint(ANALYZE_PATH).unwrap().as_str(),
            "http://localhost:8000/intel/api/analyze"
        );
    }

    #[test]
    fn test_base_url_root() {
        let client = AnalysisClient::new("http://localhost:8000", None).unwrap();
        assert_eq!(
            client.endpoint(ANALYZE_PATH).unwrap().as_str(),
            "http://localhost:8000/api/analyze"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = AnalysisClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));

        let err = AnalysisClient::new("ftp://example.com", None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/analyze")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "company_name": "Acme Corp",
                "analysis_type": "due_diligence"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "report": "# Acme Corp\n...",
                    "sources": ["https://example.com/a"],
                    "company_name": "Acme Corp",
                    "analysis_type": "due_diligence"
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client
            .analyze(&AnalysisRequest::new(
                "Acme Corp",
                AnalysisType::DueDiligence,
            ))
            .await
            .unwrap();

        assert_eq!(response.report, "# Acme Corp\n...");
        assert_eq!(response.sources, vec!["https://example.com/a"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_http_error_uses_status_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/analyze")
            .with_status(500)
            .with_body(r#"{"detail": "boom"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .analyze(&AnalysisRequest::new("Beta Inc", AnalysisType::Competition))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Status {
                code: 500,
                status_text: "Internal Server Error".to_string()
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/analyze")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .analyze(&AnalysisRequest::new("Beta Inc", AnalysisType::Competition))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_analyze_connection_refused_is_network_error() {
        // Bind then drop a listener to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = AnalysisClient::new(&format!("http://127.0.0.1:{port}"), None).unwrap();
        let err = client
            .analyze(&AnalysisRequest::new("Beta Inc", AnalysisType::Competition))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Network(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status":"healthy","api_configured":true,"search_configured":true}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert!(health.search_configured);
    }
}
