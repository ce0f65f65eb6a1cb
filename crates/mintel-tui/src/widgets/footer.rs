//! Key hint row shown below every screen

use mintel_app::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Key bindings relevant to the active screen
pub struct KeyHints {
    view: ViewState,
    /// Number of dashboard cards, for the digit hint
    card_count: usize,
}

impl KeyHints {
    pub fn new(view: ViewState, card_count: usize) -> Self {
        Self { view, card_count }
    }

    fn hints(&self) -> Vec<(String, &'static str)> {
        match self.view {
            ViewState::Dashboard => vec![
                ("\u{2191}\u{2193}".into(), "Navigate"),
                (format!("1-{}", self.card_count.clamp(1, 9)), "Select"),
                ("Enter".into(), "Open"),
                ("q".into(), "Quit"),
            ],
            ViewState::Input => vec![
                ("Enter".into(), "Run Analysis"),
                ("Tab".into(), "Example"),
                ("Esc".into(), "Back"),
            ],
            ViewState::Loading => vec![("Esc".into(), "Back"), ("q".into(), "Quit")],
            ViewState::Report => vec![
                ("\u{2191}\u{2193}".into(), "Scroll"),
                ("c".into(), "Copy"),
                ("e".into(), "Export"),
                ("1-9".into(), "Source"),
                ("n".into(), "New Analysis"),
                ("Esc".into(), "Back"),
                ("q".into(), "Quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  \u{b7}  ", styles::text_muted())); // ·
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
