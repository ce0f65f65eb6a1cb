//! Headless runner: request, export, report events

use mintel_app::actions::report::export_report;
use mintel_app::config::Settings;
use mintel_client::{AnalysisClient, AnalysisRequest};
use mintel_core::{AnalysisType, Report};
use tracing::{info, warn};

use super::HeadlessEvent;

/// Run one analysis, printing events to stdout. Returns whether the report
/// was produced and saved.
pub async fn run_headless(
    client: &AnalysisClient,
    settings: &Settings,
    analysis_type: AnalysisType,
    company: &str,
) -> bool {
    run_with(client, settings, analysis_type, company, |event| event.emit()).await
}

/// Same as [`run_headless`], with events handed to `emit`
pub async fn run_with<F>(
    client: &AnalysisClient,
    settings: &Settings,
    analysis_type: AnalysisType,
    company: &str,
    mut emit: F,
) -> bool
where
    F: FnMut(&HeadlessEvent),
{
    let company = company.trim();
    if company.is_empty() {
        emit(&HeadlessEvent::analysis_failed(
            "Company name must not be empty".to_string(),
        ));
        return false;
    }

    info!("Headless {} analysis for '{}'", analysis_type, company);
    emit(&HeadlessEvent::analysis_started(company, analysis_type));

    let request = AnalysisRequest::new(company, analysis_type);
    let response = match client.analyze(&request).await {
        Ok(response) => response,
        Err(e) => {
            let error = mintel_core::Error::from(e);
            warn!("Headless analysis failed: {}", error);
            emit(&HeadlessEvent::analysis_failed(error.to_string()));
            return false;
        }
    };

    let report = Report::new(response.report, response.sources, company, analysis_type);
    let path = settings
        .export
        .resolved_directory()
        .join(report.export_file_name());

    let event = match export_report(&path, &report.content).await {
        Ok(()) => HeadlessEvent::analysis_completed(
            company,
            analysis_type,
            report.sources.len(),
            &path,
        ),
        Err(e) => HeadlessEvent::export_failed(&path, e.to_string()),
    };
    let ok = !event.is_failure();
    emit(&event);
    ok
}
