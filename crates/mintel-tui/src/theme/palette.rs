//! Color palette.

use mintel_core::Accent;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;

// --- Accent ---
pub const ACCENT: Color = Color::Magenta;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;

// --- Markdown ---
pub const MD_HEADING_1: Color = Color::Magenta;
pub const MD_HEADING_2: Color = Color::LightMagenta;
pub const MD_HEADING_3: Color = Color::White;
pub const MD_CODE: Color = Color::LightYellow;
pub const MD_CODE_BG: Color = Color::Rgb(30, 30, 38);
pub const MD_QUOTE: Color = Color::Gray;
pub const MD_LINK: Color = Color::LightBlue;

/// Terminal color for a catalog accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Amber => Color::Yellow,
        Accent::Emerald => Color::Green,
        Accent::Violet => Color::Magenta,
        Accent::Rose => Color::LightRed,
        Accent::Sky => Color::LightCyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_are_distinct() {
        let colors = [
            accent_color(Accent::Amber),
            accent_color(Accent::Emerald),
            accent_color(Accent::Violet),
            accent_color(Accent::Rose),
            accent_color(Accent::Sky),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
