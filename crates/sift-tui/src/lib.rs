//! sift-tui - Terminal UI for sift
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! sift-app state from a `go test -json` stream and adds terminal rendering,
//! event polling and widget display, plus the inline printer used when
//! output is not a terminal.

pub mod event;
pub mod inline;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
pub use terminal::{color_enabled, stdin_is_terminal, stdout_is_terminal};
