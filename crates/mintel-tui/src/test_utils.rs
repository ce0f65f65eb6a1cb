//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can assert on
//! rendered text without a real terminal.

use mintel_app::{AppState, Screen};
use mintel_app::state::{InputFormState, ReportState};
use mintel_core::{AnalysisType, Report};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Render a stateful widget to the terminal
    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Report with a short body and two sources
pub fn test_report() -> Report {
    Report::new(
        "# Acme Corp\n\nAcme is a **payments** company.\n\n- Strong growth\n- Thin margins",
        vec![
            "https://example.com/acme".to_string(),
            "https://news.example.com/acme-funding".to_string(),
        ],
        "Acme Corp",
        AnalysisType::DueDiligence,
    )
}

/// AppState positioned on the input form for `analysis_type`
pub fn input_state(analysis_type: AnalysisType) -> AppState {
    let mut state = AppState::new();
    state.screen = Screen::Input(InputFormState::new(analysis_type));
    state
}

/// AppState positioned on the report viewer
pub fn report_state(report: Report) -> AppState {
    let mut state = AppState::new();
    state.screen = Screen::Report(ReportState::new(report));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
    }
}
