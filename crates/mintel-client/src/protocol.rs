//! Wire types for the analysis backend

use mintel_core::AnalysisType;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub company_name: String,
    pub analysis_type: AnalysisType,
}

impl AnalysisRequest {
    pub fn new(company_name: impl Into<String>, analysis_type: AnalysisType) -> Self {
        Self {
            company_name: company_name.into(),
            analysis_type,
        }
    }
}

/// Successful body of `POST /api/analyze`.
///
/// The backend also echoes `company_name` and `analysis_type`; those are
/// ignored and the client keeps what the user actually submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    pub report: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub api_configured: bool,
    #[serde(default)]
    pub search_configured: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
