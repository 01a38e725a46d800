//! Log line parsing with format auto-detection.
//!
//! A raw output line is offered to each recognizer in [`RECOGNIZERS`] in
//! turn; the first one that accepts it wins. Lines nobody recognizes are
//! kept verbatim as the message, so [`parse`] never fails.
//!
//! Recognized formats, cheapest first:
//! - `log` package default output: `2025/10/05 09:52:58 message`
//! - `log/slog` JSON handler output
//! - `log/slog` text handler output: `time=... level=INFO msg="..." k=v`

pub mod default_log;
pub mod json;
pub mod text;

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

/// A single `key=value` attribute attached to a log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogField {
    pub key: String,
    pub value: String,
}

impl LogField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One parsed output line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    /// `None` when the line carried no timestamp of its own
    pub time: Option<DateTime<FixedOffset>>,
    /// Empty when the format has no level
    pub level: String,
    pub message: String,
    /// Additional attributes in encounter order
    pub fields: Vec<LogField>,
}

impl LogEntry {
    /// Entry holding the line verbatim
    pub fn raw(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Fill in a timestamp if the line did not carry one
    pub fn or_time(mut self, time: Option<DateTime<FixedOffset>>) -> Self {
        if self.time.is_none() {
            self.time = time;
        }
        self
    }
}

/// A recognizer either claims a line or declines it
pub type Recognizer = fn(&str) -> Option<LogEntry>;

/// Recognizers in the order they are tried
pub const RECOGNIZERS: [Recognizer; 3] = [default_log::recognize, json::recognize, text::recognize];

/// Parse a raw output line. Total: unknown formats become a raw entry.
pub fn parse(raw: &str) -> LogEntry {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(raw))
        .unwrap_or_else(|| LogEntry::raw(raw))
}

static RUNNER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:=== (?:RUN|PAUSE|CONT|NAME)|--- (?:PASS|FAIL|SKIP):)")
        .expect("Invalid runner marker regex")
});

/// True for lines that only echo the test runner's own progress markers
/// (`=== RUN`, `--- PASS:` and friends)
pub fn is_runner_marker(line: &str) -> bool {
    RUNNER_MARKER.is_match(line)
}
