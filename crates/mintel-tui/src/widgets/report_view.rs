//! Report viewer
//!
//! Renders the report header, the markdown body and the numbered source list
//! as one scrollable document. Rendering records the document and viewport
//! heights in [`ReportState`] so scrolling stays in range.

use mintel_app::state::{ReportState, StatusNote};
use mintel_core::Report;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use super::markdown::{render_markdown, wrap_spans};
use crate::theme::{icons::IconSet, palette, styles};

pub struct ReportView {
    icons: IconSet,
}

impl ReportView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn header_lines(&self, report: &Report) -> Vec<Line<'static>> {
        let profile = report.analysis_type.profile();
        let accent = palette::accent_color(profile.accent);
        vec![
            Line::from(vec![
                Span::styled(self.icons.slot(profile.icon), Style::default().fg(accent)),
                Span::raw(" "),
                Span::styled(profile.report_label, Style::default().fg(accent)),
            ]),
            Line::styled(report.company_name.clone(), styles::title()),
            Line::styled(report.generated_label(), styles::text_muted()),
        ]
    }

    /// "Sources (N)" followed by one wrapped entry per source, numbered for
    /// the digit keys. Empty when the report cites nothing.
    fn source_lines(&self, report: &Report, width: usize) -> Vec<Line<'static>> {
        if !report.has_sources() {
            return Vec::new();
        }
        let sources = &report.sources;

        let mut lines = vec![
            Line::default(),
            Line::styled("\u{2500}".repeat(width), styles::border_inactive()),
            Line::styled(format!("Sources ({})", sources.len()), styles::accent_bold()),
        ];
        for (i, url) in sources.iter().enumerate() {
            let number = format!("{:>2}. ", i + 1);
            let indent = " ".repeat(number.len());
            let link = vec![
                Span::styled(url.clone(), Style::default().fg(palette::MD_LINK)),
                Span::styled(
                    format!(" {}", self.icons.external_link()),
                    styles::text_muted(),
                ),
            ];
            let available = width.saturating_sub(number.len()).max(1);
            for (row, wrapped) in wrap_spans(link, available).into_iter().enumerate() {
                let prefix = if row == 0 {
                    Span::styled(number.clone(), styles::keybinding())
                } else {
                    Span::raw(indent.clone())
                };
                let mut spans = vec![prefix];
                spans.extend(wrapped);
                lines.push(Line::from(spans));
            }
        }
        lines
    }

    fn status_line(&self, state: &ReportState) -> Line<'static> {
        let mut spans = Vec::new();
        if state.is_copied() {
            spans.push(Span::styled(
                format!("{} Copied", self.icons.check()),
                styles::status_green(),
            ));
        }
        match &state.status {
            Some(StatusNote::Info(text)) => {
                if !spans.is_empty() {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(text.clone(), styles::text_secondary()));
            }
            Some(StatusNote::Error(text)) => {
                if !spans.is_empty() {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    format!("{} {}", self.icons.alert(), text),
                    styles::status_red(),
                ));
            }
            None => {}
        }
        Line::from(spans)
    }
}

impl StatefulWidget for ReportView {
    type State = ReportState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ReportState) {
        let [header, rule, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(self.header_lines(&state.report)).render(header, buf);
        Paragraph::new(Line::styled(
            "\u{2500}".repeat(usize::from(rule.width)),
            styles::border_inactive(),
        ))
        .render(rule, buf);

        // One column of breathing room plus one for the scrollbar
        let text_width = body.width.saturating_sub(2).max(1);
        let mut lines = render_markdown(&state.report.content, text_width);
        lines.extend(self.source_lines(&state.report, usize::from(text_width)));

        let viewport = usize::from(body.height);
        state.set_dimensions(lines.len(), viewport);

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(state.scroll)
            .take(viewport)
            .collect();
        let text_area = Rect {
            width: text_width,
            ..body
        };
        Paragraph::new(visible).render(text_area, buf);

        if viewport > 0 && state.content_height > viewport {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("\u{25b2}"))
                .end_symbol(Some("\u{25bc}"))
                .track_symbol(Some("\u{2502}"))
                .thumb_symbol("\u{2588}");

            let mut scrollbar_state =
                ScrollbarState::new(state.max_scroll() + 1).position(state.scroll);

            scrollbar.render(body, buf, &mut scrollbar_state);
        }

        Paragraph::new(self.status_line(state)).render(status, buf);
    }
}
