//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use mintel_app::config::IconMode;
use mintel_core::IconSlot;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Icon for an analysis type's catalog slot
    pub fn slot(&self, slot: IconSlot) -> &'static str {
        match (self.mode, slot) {
            (IconMode::NerdFonts, IconSlot::Swords) => "\u{f0787}", // nf-md-sword_cross
            (IconMode::NerdFonts, IconSlot::ShieldAlert) => "\u{f132}", // nf-fa-shield
            (IconMode::NerdFonts, IconSlot::TrendingUp) => "\u{f0535}", // nf-md-trending_up
            (IconMode::NerdFonts, IconSlot::CreditCard) => "\u{f09d}", // nf-fa-credit_card
            (IconMode::NerdFonts, IconSlot::Scale) => "\u{f24e}",   // nf-fa-balance_scale
            (IconMode::Unicode, IconSlot::Swords) => "\u{2694}",    // ⚔
            (IconMode::Unicode, IconSlot::ShieldAlert) => "\u{26a0}", // ⚠
            (IconMode::Unicode, IconSlot::TrendingUp) => "\u{2197}", // ↗
            (IconMode::Unicode, IconSlot::CreditCard) => "\u{25a4}", // ▤
            (IconMode::Unicode, IconSlot::Scale) => "\u{2696}",     // ⚖
        }
    }

    pub fn sparkles(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f51b}", // nf-oct-sparkle_fill
            IconMode::Unicode => "\u{2726}",   // ✦
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    // --- Progress pips ---

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f4c3}", // nf-oct-dot
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_single_column() {
        use unicode_width::UnicodeWidthStr;
        let icons = IconSet::new(IconMode::Unicode);
        for slot in [
            IconSlot::Swords,
            IconSlot::ShieldAlert,
            IconSlot::TrendingUp,
            IconSlot::CreditCard,
            IconSlot::Scale,
        ] {
            assert_eq!(icons.slot(slot).width(), 1, "{:?}", slot);
        }
        assert_eq!(icons.dot().width(), 1);
        assert_eq!(icons.circle().width(), 1);
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.slot(IconSlot::Scale), nerd.slot(IconSlot::Scale));
        assert_ne!(unicode.sparkles(), nerd.sparkles());
    }
}
