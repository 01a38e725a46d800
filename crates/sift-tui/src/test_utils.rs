//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend, plus builders for populated states.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &mut state));
//! assert!(term.buffer_contains("Waiting for test results..."));
//! ```

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use sift_app::{update, AppState, Message, Options, TestStore};
use sift_core::TestEvent;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. the full
    /// [`crate::render::view`]
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Screen line `line`, trailing blanks trimmed
    pub fn line(&self, line: u16) -> String {
        line_content(self.buffer(), line).trim_end().to_string()
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

// ─────────────────────────────────────────────────────────
// State builders
// ─────────────────────────────────────────────────────────

pub fn run(test: &str) -> String {
    format!(r#"{{"Action":"run","Package":"p","Test":"{test}"}}"#)
}

pub fn output(test: &str, text: &str) -> String {
    format!(r#"{{"Action":"output","Package":"p","Test":"{test}","Output":"{text}\n"}}"#)
}

pub fn finish(test: &str, action: &str, elapsed: f64) -> String {
    format!(r#"{{"Action":"{action}","Package":"p","Test":"{test}","Elapsed":{elapsed}}}"#)
}

/// Feed raw event lines into a store
pub fn store_with(events: &[String]) -> Arc<TestStore> {
    let store = TestStore::new(false);
    for line in events {
        store.add_event(&TestEvent::parse(line).expect("test event"));
    }
    Arc::new(store)
}

/// Raw-log state over `events`, laid out for a test view of the given size
pub fn state_with(events: &[String], width: u16, height: u16) -> AppState {
    let options = Options {
        pretty: false,
        ..Options::default()
    };
    let mut state = AppState::new(store_with(events), options);
    update(&mut state, Message::Resize { width, height });
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert_eq!(term.line(1), "World");
    }

    #[test]
    fn test_state_with_lays_out_tests() {
        let state = state_with(&[run("A"), output("A", "x"), run("B")], 40, 10);
        assert_eq!(state.layout.total_lines(), 2);
        assert_eq!(state.layout.width(), 40);
    }
}
