//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, InputFormState, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::Dashboard(_) => handle_key_dashboard(state, key),
        Screen::Input(form) => handle_key_input(form, key),
        Screen::Loading(_) => handle_key_loading(key),
        Screen::Report(_) => handle_key_report(key),
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return state
            .dashboard_types
            .get(index)
            .map(|t| Message::SelectAnalysis(*t));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Down | InputKey::Right | InputKey::Tab | InputKey::Char('j' | 'l') => {
            Some(Message::DashboardNext)
        }
        InputKey::Up | InputKey::Left | InputKey::BackTab | InputKey::Char('k' | 'h') => {
            Some(Message::DashboardPrev)
        }

        InputKey::Enter | InputKey::Char(' ') => {
            state.highlighted_type().map(Message::SelectAnalysis)
        }

        _ => None,
    }
}

fn handle_key_input(form: &InputFormState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::BackToDashboard),
        InputKey::Enter => Some(Message::SubmitAnalysis),

        InputKey::Tab => Some(Message::CycleExample { forward: true }),
        InputKey::BackTab => Some(Message::CycleExample { forward: false }),

        InputKey::Backspace => {
            let mut text = form.subject.clone();
            text.pop();
            Some(Message::SubjectInput { text })
        }

        InputKey::CharCtrl('u') => Some(Message::SubjectInput {
            text: String::new(),
        }),

        InputKey::Char(c) if !c.is_control() => {
            let mut text = form.subject.clone();
            text.push(c);
            Some(Message::SubjectInput { text })
        }

        _ => None,
    }
}

fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::BackToDashboard),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_report(key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return Some(Message::OpenSource { index });
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('b') => Some(Message::BackToDashboard),
        InputKey::Char('n') => Some(Message::NewAnalysis),

        InputKey::Char('c' | 'y') => Some(Message::CopyReport),
        InputKey::Char('e' | 's') => Some(Message::ExportReport),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}
