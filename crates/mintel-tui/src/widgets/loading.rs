//! Loading screen shown while the backend researches the subject
//!
//! Purely decorative: the message and ellipsis advance on timer ticks and say
//! nothing about actual backend progress.

use mintel_app::state::LoadingState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::theme::{icons::IconSet, palette, styles};

pub struct LoadingView<'a> {
    loading: &'a LoadingState,
    icons: IconSet,
}

impl<'a> LoadingView<'a> {
    pub fn new(loading: &'a LoadingState, icons: IconSet) -> Self {
        Self { loading, icons }
    }

    fn pips(&self, accent: Color) -> Line<'static> {
        let spans: Vec<Span> = (0..self.loading.messages().len())
            .flat_map(|i| {
                let (symbol, style) = if i <= self.loading.message_index {
                    (self.icons.dot(), Style::default().fg(accent))
                } else {
                    (self.icons.circle(), styles::text_muted())
                };
                [Span::styled(symbol, style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = self.loading.analysis_type.profile();
        let accent = palette::accent_color(profile.accent);

        // Pad the ellipsis so the centered heading does not shift per frame
        let heading = format!("Agent is researching{:<3}", self.loading.dots_text());

        let lines = vec![
            Line::styled(self.icons.slot(profile.icon), Style::default().fg(accent)).centered(),
            Line::default(),
            Line::styled(heading, styles::title()).centered(),
            Line::styled(
                format!("{}: {}", profile.title, self.loading.subject),
                styles::text_secondary(),
            )
            .centered(),
            Line::default(),
            Line::styled(self.loading.current_message(), Style::default().fg(accent)).centered(),
            Line::default(),
            self.pips(accent),
            Line::default(),
            Line::styled("This typically takes 30-60 seconds", styles::text_muted()).centered(),
        ];

        let height = lines.len() as u16;
        Paragraph::new(lines).render(centered_rect(area.width, height, area), buf);
    }
}
