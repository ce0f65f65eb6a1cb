//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use mintel_app::{InputKey, Message};
use mintel_core::prelude::*;
use std::time::Duration;

/// Redraw cadence when no input arrives (20 FPS)
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout.
///
/// Returns `None` on timeout; the loading animation is driven by its own
/// timers, so the caller only needs to redraw.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
