//! Application state (Model in TEA pattern)

use mintel_core::{AnalysisProfile, AnalysisType, Report, EXAMPLE_SUBJECTS};
use tokio::sync::watch;

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Discriminant of [`Screen`], for callers that only need to know where the
/// user is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Dashboard,
    Input,
    Loading,
    Report,
}

/// The view state machine. Exactly one screen is active; the data each screen
/// needs lives inside its variant, so leaving a screen drops its state.
#[derive(Debug)]
pub enum Screen {
    Dashboard(DashboardState),
    Input(InputFormState),
    Loading(LoadingState),
    Report(ReportState),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Dashboard(DashboardState::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Highlighted card index into `AppState::dashboard_types`
    pub selected: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Input form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFormState {
    pub analysis_type: AnalysisType,
    pub subject: String,
    /// Set once the form has been handed to the request task
    pub submitting: bool,
    /// Inline error from the previous attempt
    pub error: Option<String>,
    /// Position in [`EXAMPLE_SUBJECTS`] of the last quick-fill
    pub example_index: Option<usize>,
}

impl InputFormState {
    pub fn new(analysis_type: AnalysisType) -> Self {
        Self {
            analysis_type,
            subject: String::new(),
            submitting: false,
            error: None,
            example_index: None,
        }
    }

    /// Form shown again after a failed request
    pub fn with_error(analysis_type: AnalysisType, subject: String, error: String) -> Self {
        Self {
            subject,
            error: Some(error),
            ..Self::new(analysis_type)
        }
    }

    pub fn profile(&self) -> &'static AnalysisProfile {
        self.analysis_type.profile()
    }

    /// Trimmed subject, or `None` if it is blank
    pub fn trimmed_subject(&self) -> Option<&str> {
        let trimmed = self.subject.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether submit would be accepted
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.trimmed_subject().is_some()
    }

    /// Replace the subject with the next (or previous) example, wrapping
    pub fn cycle_example(&mut self, forward: bool) {
        let len = EXAMPLE_SUBJECTS.len();
        let next = match (self.example_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.example_index = Some(next);
        self.subject = EXAMPLE_SUBJECTS[next].to_string();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading screen
// ─────────────────────────────────────────────────────────────────────────────

/// Number of ellipsis frames: "", ".", "..", "..."
pub const DOT_FRAMES: usize = 4;

/// Shutdown handle for the loading animation tasks.
///
/// Owned by [`LoadingState`]. Dropping it (which happens on any transition
/// out of the loading screen) signals the timer tasks to exit.
#[derive(Debug)]
pub struct LoadingTimers {
    shutdown_tx: watch::Sender<bool>,
}

impl LoadingTimers {
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        (Self { shutdown_tx }, shutdown_rx)
    }
}

impl Drop for LoadingTimers {
    fn drop(&mut self) {
        // Receivers may already be gone
        let _ = self.shutdown_tx.send(true);
    }
}

#[derive(Debug)]
pub struct LoadingState {
    pub analysis_type: AnalysisType,
    /// Trimmed subject that was submitted
    pub subject: String,
    /// Request generation this screen is waiting for
    pub generation: u64,
    pub message_index: usize,
    /// Current ellipsis frame, `0..DOT_FRAMES`
    pub dots: usize,
    pub timers: Option<LoadingTimers>,
}

impl LoadingState {
    pub fn new(analysis_type: AnalysisType, subject: String, generation: u64) -> Self {
        Self {
            analysis_type,
            subject,
            generation,
            message_index: 0,
            dots: 0,
            timers: None,
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        self.analysis_type.profile().loading_messages
    }

    pub fn current_message(&self) -> &'static str {
        self.messages()
            .get(self.message_index)
            .copied()
            .unwrap_or_default()
    }

    pub fn dots_text(&self) -> &'static str {
        match self.dots {
            1 => ".",
            2 => "..",
            3 => "...",
            _ => "",
        }
    }

    pub fn advance_message(&mut self) {
        let count = self.messages().len();
        if count > 0 {
            self.message_index = (self.message_index + 1) % count;
        }
    }

    pub fn advance_dots(&mut self) {
        self.dots = (self.dots + 1) % DOT_FRAMES;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Report viewer
// ─────────────────────────────────────────────────────────────────────────────

/// Transient line shown at the bottom of the report viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusNote {
    Info(String),
    Error(String),
}

#[derive(Debug)]
pub struct ReportState {
    pub report: Report,
    /// First visible line of the rendered report
    pub scroll: usize,
    /// Rendered line count, updated by the view
    pub content_height: usize,
    /// Visible line count, updated by the view
    pub viewport_height: usize,
    /// Id of the active "Copied" acknowledgment
    pub copied_ack: Option<u64>,
    pub status: Option<StatusNote>,
}

impl ReportState {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            copied_ack: None,
            status: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_ack.is_some()
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the rendered dimensions and keep the scroll offset in range
    pub fn set_dimensions(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(2).max(1)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application state
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,

    /// Settings from the config file, with CLI overrides applied
    pub settings: Settings,

    /// Analysis types offered on the dashboard, in display order
    pub dashboard_types: Vec<AnalysisType>,

    /// Incremented on every submission; results and ticks carry it back
    pub request_generation: u64,

    /// Source of ids for "Copied" acknowledgments
    pub copy_ack_counter: u64,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let dashboard_types = settings.dashboard.effective_types();
        Self {
            screen: Screen::default(),
            settings,
            dashboard_types,
            request_generation: 0,
            copy_ack_counter: 0,
            phase: AppPhase::Running,
        }
    }

    pub fn view_state(&self) -> ViewState {
        match &self.screen {
            Screen::Dashboard(_) => ViewState::Dashboard,
            Screen::Input(_) => ViewState::Input,
            Screen::Loading(_) => ViewState::Loading,
            Screen::Report(_) => ViewState::Report,
        }
    }

    /// Analysis type of the current flow; `None` on the dashboard
    pub fn analysis_type(&self) -> Option<AnalysisType> {
        match &self.screen {
            Screen::Dashboard(_) => None,
            Screen::Input(form) => Some(form.analysis_type),
            Screen::Loading(loading) => Some(loading.analysis_type),
            Screen::Report(view) => Some(view.report.analysis_type),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match &self.screen {
            Screen::Report(view) => Some(&view.report),
            _ => None,
        }
    }

    /// Inline error of the input form, if any
    pub fn error(&self) -> Option<&str> {
        match &self.screen {
            Screen::Input(form) => form.error.as_deref(),
            _ => None,
        }
    }

    /// Dashboard card currently highlighted
    pub fn highlighted_type(&self) -> Option<AnalysisType> {
        match &self.screen {
            Screen::Dashboard(dashboard) => self.dashboard_types.get(dashboard.selected).copied(),
            _ => None,
        }
    }

    pub fn next_generation(&mut self) -> u64 {
        self.request_generation += 1;
        self.request_generation
    }

    pub fn next_copy_ack(&mut self) -> u64 {
        self.copy_ack_counter += 1;
        self.copy_ack_counter
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dashboard() {
        let state = AppState::new();
        assert_eq!(state.view_state(), ViewState::Dashboard);
        assert_eq!(state.analysis_type(), None);
        assert!(state.report().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.highlighted_type(), Some(AnalysisType::Competition));
        assert!(!state.should_quit());
    }

    #[test]
    fn test_trimmed_subject() {
        let mut form = InputFormState::new(AnalysisType::DueDiligence);
        assert_eq!(form.trimmed_subject(), None);
        form.subject = "   \t ".to_string();
        assert_eq!(form.trimmed_subject(), None);
        assert!(!form.can_submit());
        form.subject = "  Acme Corp ".to_string();
        assert_eq!(form.trimmed_subject(), Some("Acme Corp"));
        assert!(form.can_submit());
        form.submitting = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_cycle_example_wraps_both_ways() {
        let mut form = InputFormState::new(AnalysisType::Competition);
        form.cycle_example(true);
        assert_eq!(form.subject, "Klarna");
        form.cycle_example(true);
        assert_eq!(form.subject, "Stripe");
        form.cycle_example(false);
        form.cycle_example(false);
        assert_eq!(form.subject, "PayPal");

        let mut form = InputFormState::new(AnalysisType::Competition);
        form.cycle_example(false);
        assert_eq!(form.subject, "PayPal");
    }

    #[test]
    fn test_loading_message_wraps() {
        let mut loading = LoadingState::new(AnalysisType::DueDiligence, "Acme".into(), 1);
        let count = loading.messages().len();
        assert!(count > 0);
        let first = loading.current_message();
        for _ in 0..count {
            loading.advance_message();
        }
        assert_eq!(loading.message_index, 0);
        assert_eq!(loading.current_message(), first);
    }

    #[test]
    fn test_dots_cycle_period_four() {
        let mut loading = LoadingState::new(AnalysisType::Competition, "Acme".into(), 1);
        let frames: Vec<&str> = (0..5)
            .map(|_| {
                let text = loading.dots_text();
                loading.advance_dots();
                text
            })
            .collect();
        assert_eq!(frames, vec!["", ".", "..", "...", ""]);
    }

    #[test]
    fn test_dropping_timers_signals_shutdown() {
        let (timers, rx) = LoadingTimers::new();
        assert!(!*rx.borrow());
        drop(timers);
        assert!(*rx.borrow());
    }

    #[test]
    fn test_report_scroll_clamps() {
        let report = Report::new("# A", vec![], "Acme", AnalysisType::Competition);
        let mut view = ReportState::new(report);
        view.set_dimensions(50, 20);
        assert_eq!(view.max_scroll(), 30);
        view.scroll_down(100);
        assert_eq!(view.scroll, 30);
        view.scroll_up(5);
        assert_eq!(view.scroll, 25);
        view.set_dimensions(30, 20);
        assert_eq!(view.scroll, 10);
        view.scroll_up(100);
        assert_eq!(view.scroll, 0);
    }
}
