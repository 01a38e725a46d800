//! Configuration types

use serde::{Deserialize, Serialize};

/// What to do with input lines that are not `go test -json` events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Skip the line, count it, keep going
    #[default]
    Lenient,
    /// Stop ingesting and report the line as an error
    Strict,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub input: InputSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Parse and colour log lines instead of showing them verbatim
    #[serde(default = "default_true")]
    pub pretty_logs: bool,

    /// Keep only the selected test expanded
    #[serde(default)]
    pub auto_toggle: bool,

    /// Redraw rate in Hz
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Layout recompute rate in Hz
    #[serde(default = "default_layout_rate")]
    pub layout_rate: u32,

    /// Lines kept between the cursor and the viewport edge
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin: usize,

    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            pretty_logs: true,
            auto_toggle: false,
            frame_rate: default_frame_rate(),
            layout_rate: default_layout_rate(),
            scroll_margin: default_scroll_margin(),
            color: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InputSettings {
    #[serde(default)]
    pub mode: InputMode,
}

fn default_true() -> bool {
    true
}

fn default_frame_rate() -> u32 {
    120
}

fn default_layout_rate() -> u32 {
    20
}

fn default_scroll_margin() -> usize {
    5
}
