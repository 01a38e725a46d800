//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode.
///
/// Two-key fold sequences are matched in `update`, before this runs.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave input mode and drop the filter
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::CancelSearch),

        // Keep the filter, back to navigation
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => {
            let mut query = state.search.pattern().to_string();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.search.pattern().to_string();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') | InputKey::CharCtrl('p') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') | InputKey::CharCtrl('n') => {
            Some(Message::CursorDown)
        }
        InputKey::Char('{') => Some(Message::PrevTest),
        InputKey::Char('}') => Some(Message::NextTest),
        InputKey::Char('[') => Some(Message::PrevFailingTest),
        InputKey::Char(']') => Some(Message::NextFailingTest),

        // ─────────────────────────────────────────────────────────
        // Folding
        // ─────────────────────────────────────────────────────────
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleTest),
        InputKey::Char('m') => Some(Message::ToggleAutoToggle),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('e') => Some(Message::ScrollDown(1)),
        InputKey::CharCtrl('y') => Some(Message::ScrollUp(1)),
        InputKey::CharCtrl('d') => Some(Message::HalfPageDown),
        InputKey::CharCtrl('u') => Some(Message::HalfPageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        // ─────────────────────────────────────────────────────────
        // Search / Help
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Esc if state.search.is_active() => Some(Message::ClearSearch),
        InputKey::Esc if state.show_help => Some(Message::ToggleHelp),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}
