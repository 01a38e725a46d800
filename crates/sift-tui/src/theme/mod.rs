//! Centralized theme for the test console.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Status glyphs and the running spinner

pub mod icons;
pub mod palette;
pub mod styles;
