//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the key handlers and the fold-sequence matcher never see crossterm types.

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Printable character, including shifted ones (`A`, `{`, `?`)
    Char(char),
    /// Character pressed with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// The character this key types, if any
    pub fn as_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}
