//! Abstract input key event, independent of terminal library.
//!
//! Keeps `mintel-app` free of crossterm so the headless runner and tests can
//! drive the state machine without a terminal.

/// Abstract input key event, converted from `crossterm::event::KeyEvent` at
/// the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Digit keys `1`-`9` as a zero-based index
    pub fn digit_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some(*c as usize - '1' as usize),
            _ => None,
        }
    }
}
