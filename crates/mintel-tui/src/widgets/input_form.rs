//! Subject entry form for the chosen analysis type

use mintel_app::state::InputFormState;
use mintel_core::EXAMPLE_SUBJECTS;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

const CURSOR: &str = "\u{2588}"; // █

pub struct InputForm<'a> {
    form: &'a InputFormState,
    icons: IconSet,
}

impl<'a> InputForm<'a> {
    pub fn new(form: &'a InputFormState, icons: IconSet) -> Self {
        Self { form, icons }
    }

    fn input_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(self.icons.search(), styles::text_muted()),
            Span::raw(" "),
        ];
        if self.form.subject.is_empty() {
            if !self.form.submitting {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(
                self.form.profile().placeholder,
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(self.form.subject.clone(), styles::text_primary()));
            if !self.form.submitting {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }
        Line::from(spans)
    }

    fn button_line(&self, accent: Color) -> Line<'static> {
        if self.form.submitting {
            Line::styled("Starting analysis...", styles::text_secondary())
        } else if self.form.can_submit() {
            Line::from(vec![
                Span::styled(" Enter ", styles::focused_selected(accent)),
                Span::raw(" "),
                Span::styled("Run Analysis", styles::title()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Enter ", styles::keybinding()),
                Span::raw(" "),
                Span::styled("Run Analysis", styles::text_muted()),
            ])
        }
    }

    fn examples_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Try these examples: ", styles::text_muted())];
        for (i, example) in EXAMPLE_SUBJECTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.form.example_index == Some(i) {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(*example, style));
        }
        spans.push(Span::styled("  (Tab)", styles::text_muted()));
        Line::from(spans)
    }
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = self.form.profile();
        let accent = palette::accent_color(profile.accent);

        let [heading, input, error, button, _, examples] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(self.icons.slot(profile.icon), Style::default().fg(accent)),
                Span::raw(" "),
                Span::styled(profile.title, styles::title()),
            ]),
            Line::styled(profile.description, styles::text_secondary()),
        ])
        .wrap(Wrap { trim: true })
        .render(heading, buf);

        let block = styles::glass_block(Some(accent));
        let inner = block.inner(input);
        block.render(input, buf);
        Paragraph::new(self.input_line()).render(inner, buf);

        if let Some(message) = &self.form.error {
            Paragraph::new(Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(message.clone(), styles::status_red()),
            ]))
            .wrap(Wrap { trim: true })
            .render(error, buf);
        }

        Paragraph::new(self.button_line(accent)).render(button, buf);
        Paragraph::new(self.examples_line()).render(examples, buf);
    }
}
