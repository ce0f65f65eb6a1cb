//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use mintel_app::{AppState, Screen};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the report viewer, which records its rendered dimensions
/// so scrolling stays in range.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.analysis_type(), icons),
        areas.header,
    );

    let view_state = state.view_state();
    let card_count = state.dashboard_types.len();
    let body = layout::content_column(areas.body);

    match &mut state.screen {
        Screen::Dashboard(dashboard) => {
            let widget = widgets::Dashboard::new(&state.dashboard_types, dashboard.selected, icons);
            frame.render_widget(widget, body);
        }
        Screen::Input(form) => {
            frame.render_widget(widgets::InputForm::new(form, icons), body);
        }
        Screen::Loading(loading) => {
            frame.render_widget(widgets::LoadingView::new(loading, icons), body);
        }
        Screen::Report(report) => {
            frame.render_stateful_widget(widgets::ReportView::new(icons), body, report);
        }
    }

    frame.render_widget(widgets::KeyHints::new(view_state, card_count), areas.footer);
}
