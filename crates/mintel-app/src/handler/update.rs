//! Main update function - handles state transitions (TEA pattern)
//!
//! Report viewer handlers live in `report`.

use mintel_client::AnalysisRequest;
use mintel_core::Report;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{
    AppState, DashboardState, InputFormState, LoadingState, LoadingTimers, ReportState, Screen,
};

use super::{keys::handle_key, report, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::DashboardNext => {
            let count = state.dashboard_types.len();
            if let Screen::Dashboard(dashboard) = &mut state.screen {
                if count > 0 {
                    dashboard.selected = (dashboard.selected + 1) % count;
                }
            }
            UpdateResult::none()
        }

        Message::DashboardPrev => {
            let count = state.dashboard_types.len();
            if let Screen::Dashboard(dashboard) = &mut state.screen {
                if count > 0 {
                    dashboard.selected = (dashboard.selected + count - 1) % count;
                }
            }
            UpdateResult::none()
        }

        Message::SelectAnalysis(analysis_type) => {
            if !matches!(state.screen, Screen::Dashboard(_)) {
                debug!("Ignoring SelectAnalysis outside the dashboard");
                return UpdateResult::none();
            }
            info!("Selected {} analysis", analysis_type);
            state.screen = Screen::Input(InputFormState::new(analysis_type));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input form
        // ─────────────────────────────────────────────────────────
        Message::SubjectInput { text } => {
            if let Screen::Input(form) = &mut state.screen {
                if !form.submitting {
                    form.subject = text;
                }
            }
            UpdateResult::none()
        }

        Message::CycleExample { forward } => {
            if let Screen::Input(form) = &mut state.screen {
                if !form.submitting {
                    form.cycle_example(forward);
                }
            }
            UpdateResult::none()
        }

        Message::SubmitAnalysis => handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadingStarted { generation } => {
            let (message_interval_ms, dots_interval_ms) = (
                state.settings.loading.message_interval_ms,
                state.settings.loading.dots_interval_ms,
            );
            match active_loading(state, generation) {
                Some(loading) if loading.timers.is_none() => {
                    let (timers, shutdown_rx) = LoadingTimers::new();
                    loading.timers = Some(timers);
                    UpdateResult::action(UpdateAction::StartLoadingTimers {
                        generation,
                        message_interval_ms,
                        dots_interval_ms,
                        shutdown_rx,
                    })
                }
                _ => UpdateResult::none(),
            }
        }

        Message::LoadingMessageTick { generation } => {
            if let Some(loading) = active_loading(state, generation) {
                loading.advance_message();
            }
            UpdateResult::none()
        }

        Message::LoadingDotsTick { generation } => {
            if let Some(loading) = active_loading(state, generation) {
                loading.advance_dots();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Backend results
        // ─────────────────────────────────────────────────────────
        Message::AnalysisCompleted {
            generation,
            response,
        } => {
            let Some(loading) = active_loading(state, generation) else {
                debug!("Discarding stale analysis result (generation {})", generation);
                return UpdateResult::none();
            };

            let report = Report::new(
                response.report,
                response.sources,
                loading.subject.clone(),
                loading.analysis_type,
            );
            info!(
                "{} report for '{}' ready ({} sources)",
                report.analysis_type,
                report.company_name,
                report.sources.len()
            );
            state.screen = Screen::Report(ReportState::new(report));
            UpdateResult::none()
        }

        Message::AnalysisFailed { generation, error } => {
            let Some(loading) = active_loading(state, generation) else {
                debug!("Discarding stale analysis failure (generation {})", generation);
                return UpdateResult::none();
            };

            warn!("{}", error);
            let form =
                InputFormState::with_error(loading.analysis_type, loading.subject.clone(), error);
            state.screen = Screen::Input(form);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::BackToDashboard => {
            state.screen = Screen::Dashboard(DashboardState::default());
            UpdateResult::none()
        }

        Message::NewAnalysis => {
            if let Screen::Report(view) = &state.screen {
                let analysis_type = view.report.analysis_type;
                state.screen = Screen::Input(InputFormState::new(analysis_type));
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Report viewer
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => report::handle_scroll(state, report::Scroll::Up),
        Message::ScrollDown => report::handle_scroll(state, report::Scroll::Down),
        Message::PageUp => report::handle_scroll(state, report::Scroll::PageUp),
        Message::PageDown => report::handle_scroll(state, report::Scroll::PageDown),
        Message::ScrollToTop => report::handle_scroll(state, report::Scroll::Top),
        Message::ScrollToBottom => report::handle_scroll(state, report::Scroll::Bottom),

        Message::CopyReport => report::handle_copy(state),
        Message::ReportCopied => report::handle_copied(state),
        Message::ReportCopyFailed { error } => report::handle_copy_failed(state, error),
        Message::CopiedAckExpired { ack_id } => report::handle_copied_ack_expired(state, ack_id),

        Message::ExportReport => report::handle_export(state),
        Message::ReportExported { path } => report::handle_exported(state, path),
        Message::ReportExportFailed { error } => report::handle_export_failed(state, error),

        Message::OpenSource { index } => report::handle_open_source(state, index),
    }
}

/// Loading screen waiting for `generation`, if that is the current screen
fn active_loading(state: &mut AppState, generation: u64) -> Option<&mut LoadingState> {
    match &mut state.screen {
        Screen::Loading(loading) if loading.generation == generation => Some(loading),
        _ => None,
    }
}

/// Validate the form and move to the loading screen.
///
/// A blank subject or a form that is already submitting is a no-op: no
/// transition and no request.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Screen::Input(form) = &mut state.screen else {
        return UpdateResult::none();
    };
    if form.submitting {
        debug!("Submit ignored, request already in flight");
        return UpdateResult::none();
    }
    let Some(subject) = form.trimmed_subject().map(str::to_string) else {
        return UpdateResult::none();
    };

    form.submitting = true;
    form.error = None;
    let analysis_type = form.analysis_type;

    let generation = state.next_generation();
    info!(
        "Submitting {} analysis for '{}' (generation {})",
        analysis_type, subject, generation
    );

    let request = AnalysisRequest::new(subject.clone(), analysis_type);
    state.screen = Screen::Loading(LoadingState::new(analysis_type, subject, generation));

    UpdateResult::action_and_message(
        UpdateAction::RunAnalysis {
            generation,
            request,
        },
        Message::LoadingStarted { generation },
    )
}
