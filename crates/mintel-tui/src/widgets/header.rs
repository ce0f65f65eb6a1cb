//! Header bar widget
//!
//! Shows the app title and, once a flow is underway, the analysis it belongs
//! to.

use mintel_core::AnalysisType;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader {
    analysis_type: Option<AnalysisType>,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(analysis_type: Option<AnalysisType>, icons: IconSet) -> Self {
        Self {
            analysis_type,
            icons,
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(None);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.sparkles(), styles::accent()),
            Span::raw(" "),
            Span::styled("Market Intelligence", styles::title()),
        ];

        if let Some(analysis_type) = self.analysis_type {
            let profile = analysis_type.profile();
            spans.push(Span::styled("  \u{203a}  ", styles::text_muted())); // ›
            spans.push(Span::styled(
                self.icons.slot(profile.icon),
                Style::default().fg(palette::accent_color(profile.accent)),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(profile.title, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mintel_app::config::IconMode;

    #[test]
    fn test_header_shows_title() {
        let mut term = TestTerminal::with_size(60, 3);
        let header = MainHeader::new(None, IconSet::new(IconMode::Unicode));
        term.render_widget(header, term.area());

        assert!(term.line_contains(1, "Market Intelligence"));
        assert!(!term.buffer_contains("Due Diligence"));
    }

    #[test]
    fn test_header_shows_active_analysis() {
        let mut term = TestTerminal::with_size(80, 3);
        let header = MainHeader::new(
            Some(AnalysisType::DueDiligence),
            IconSet::new(IconMode::Unicode),
        );
        term.render_widget(header, term.area());

        assert!(term.buffer_contains(AnalysisType::DueDiligence.profile().title));
    }
}
