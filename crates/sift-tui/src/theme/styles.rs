//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use sift_app::Outcome;
use sift_core::TestStatus;

use super::palette;

// --- Text styles ---
pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

/// Log line under the cursor
pub fn cursor_log() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Name of the test under the cursor
pub fn highlighted() -> Style {
    Style::default()
        .fg(palette::TEXT_ON_ACCENT)
        .bg(palette::MUTED_BLUE)
        .add_modifier(Modifier::BOLD)
}

// --- Header ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_ON_ACCENT)
        .bg(palette::BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
fn icon(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn passed() -> Style {
    icon(palette::GREEN)
}

pub fn failed() -> Style {
    icon(palette::RED)
}

pub fn running() -> Style {
    icon(palette::ORANGE)
}

pub fn skipped() -> Style {
    icon(palette::MUTED_BLUE)
}

pub fn status(status: TestStatus) -> Style {
    match status {
        TestStatus::Running => running(),
        TestStatus::Passed => passed(),
        TestStatus::Failed | TestStatus::BuildError => failed(),
        TestStatus::Skipped => skipped(),
    }
}

/// `PASSED` / `FAILED` badge
pub fn outcome(outcome: Outcome) -> Style {
    let bg = match outcome {
        Outcome::Passed => palette::GREEN,
        Outcome::Failed => palette::RED,
    };
    Style::default()
        .fg(palette::TEXT_ON_ACCENT)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Level column color; unknown levels keep the line's own style
pub fn log_level(level: &str) -> Style {
    match level.to_ascii_lowercase().as_str() {
        "error" | "err" | "fatal" | "panic" => Style::default().fg(palette::MUTED_RED),
        "warn" | "warning" => Style::default().fg(palette::MUTED_ORANGE),
        "debug" | "trace" => Style::default().fg(palette::MUTED_BLUE),
        _ => Style::default(),
    }
}
