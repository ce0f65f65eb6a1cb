//! Dashboard: hero text and one card per analysis type

use mintel_core::AnalysisType;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Rows per card: title, description, spacer
const CARD_HEIGHT: u16 = 3;
/// Rows used by the hero text above the cards
const HERO_HEIGHT: u16 = 4;

pub struct Dashboard<'a> {
    types: &'a [AnalysisType],
    selected: usize,
    icons: IconSet,
}

impl<'a> Dashboard<'a> {
    pub fn new(types: &'a [AnalysisType], selected: usize, icons: IconSet) -> Self {
        Self {
            types,
            selected,
            icons,
        }
    }

    fn hero(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(self.icons.sparkles(), styles::accent()),
                Span::styled(" AI-Powered Intelligence", styles::accent()),
            ])
            .centered(),
            Line::styled("Market Intelligence", styles::title()).centered(),
            Line::styled(
                "Deep competitive analysis and due diligence powered by Claude",
                styles::text_secondary(),
            )
            .centered(),
            Line::default(),
        ]
    }

    fn card(&self, index: usize, analysis_type: AnalysisType) -> Vec<Line<'static>> {
        let profile = analysis_type.profile();
        let accent = palette::accent_color(profile.accent);
        let selected = index == self.selected;

        let (bar, title_style) = if selected {
            ("\u{258c} ", styles::focused_selected(accent)) // ▌
        } else {
            ("  ", styles::title())
        };

        vec![
            Line::from(vec![
                Span::styled(bar, Style::default().fg(accent)),
                Span::styled(format!("{} ", index + 1), styles::keybinding()),
                Span::styled(self.icons.slot(profile.icon), Style::default().fg(accent)),
                Span::raw(" "),
                Span::styled(format!(" {} ", profile.card_title), title_style),
            ]),
            Line::from(vec![
                Span::styled(bar, Style::default().fg(accent)),
                Span::raw("     "),
                Span::styled(profile.card_description, styles::text_secondary()),
            ]),
            Line::default(),
        ]
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards_height = CARD_HEIGHT * self.types.len() as u16;
        let show_hero = area.height >= cards_height + HERO_HEIGHT + 1;

        let [hero, cards, prompt] = Layout::vertical([
            Constraint::Length(if show_hero { HERO_HEIGHT } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if show_hero {
            Paragraph::new(self.hero()).render(hero, buf);
        }

        // Keep the highlighted card visible on short terminals
        let visible_cards = (cards.height / CARD_HEIGHT).max(1) as usize;
        let first = self.selected.saturating_sub(visible_cards - 1);

        let lines: Vec<Line> = self
            .types
            .iter()
            .enumerate()
            .skip(first)
            .take(visible_cards)
            .flat_map(|(index, analysis_type)| self.card(index, *analysis_type))
            .collect();
        Paragraph::new(lines).render(cards, buf);

        Paragraph::new(
            Line::styled("Select an analysis type to begin", styles::text_muted()).centered(),
        )
        .render(prompt, buf);
    }
}
