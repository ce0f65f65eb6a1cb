//! Semantic style builders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

/// "Black on accent", used for the focused item of a list
pub fn focused_selected(color: Color) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(border: Option<Color>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(match border {
            Some(color) => Style::default().fg(color),
            None => border_inactive(),
        })
        .style(Style::default().bg(palette::CARD_BG))
}
