//! # mintel-client - Analysis Backend Client
//!
//! Talks to the research backend over JSON/HTTP. The backend is an external
//! collaborator: this crate only knows its request/response contract.
//!
//! Depends on [`mintel_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`AnalysisClient`] - `POST /api/analyze` and `GET /health`
//!
//! ### Protocol
//! - [`AnalysisRequest`] - `{company_name, analysis_type}`
//! - [`AnalysisResponse`] - `{report, sources}`
//! - [`HealthStatus`] - Backend health probe result
//!
//! ### Errors
//! - [`ClientError`] - Network, HTTP status and decode failures

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{AnalysisClient, ANALYZE_PATH, HEALTH_PATH};
pub use error::ClientError;
pub use protocol::{AnalysisRequest, AnalysisResponse, HealthStatus};
