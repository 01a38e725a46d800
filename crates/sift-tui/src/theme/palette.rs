//! Color palette.
//!
//! Indexed colors come from the 256-color table so they read the same on
//! light and dark terminals; the muted tones are RGB.

use ratatui::style::Color;

// --- Status ---
pub const GREEN: Color = Color::Indexed(28);
pub const RED: Color = Color::Indexed(124);
pub const ORANGE: Color = Color::Indexed(214);
pub const BLUE: Color = Color::Indexed(27);

// --- Muted tones (log levels, skip, selection) ---
pub const MUTED_RED: Color = Color::Rgb(0xD2, 0x5D, 0x5D);
pub const MUTED_ORANGE: Color = Color::Rgb(0xD2, 0x7E, 0x5D);
pub const MUTED_BLUE: Color = Color::Rgb(0x2B, 0x57, 0xA3);

// --- Text ---
pub const TEXT_SECONDARY: Color = Color::Indexed(244);
pub const TEXT_ON_ACCENT: Color = Color::White;
