//! Text layout of a single log line.
//!
//! The renderer styles these pieces; the layout cache measures them without
//! building any strings. Both must agree on the column count of every line
//! so wrapped heights stay consistent between layout and render.
//!
//! Pretty form: `09:52:58.046 INFO  message | k=v k=v`

use sift_core::LogEntry;
use unicode_width::UnicodeWidthStr;

/// Marker in front of the log line under the cursor
pub const CURSOR_PREFIX: &str = "> ";
/// Indent in front of every other log line
pub const LOG_INDENT: &str = "  ";

const TIME_FORMAT: &str = "%H:%M:%S%.3f";
const TIME_WIDTH: usize = 12;
const LEVEL_WIDTH: usize = 5;
const FIELDS_SEPARATOR: &str = " | ";

/// `HH:MM:SS.mmm` in the line's own offset
pub fn time_text(entry: &LogEntry) -> Option<String> {
    entry.time.map(|t| t.format(TIME_FORMAT).to_string())
}

/// Level left-aligned in a five column slot, led by a space
pub fn level_text(entry: &LogEntry) -> Option<String> {
    if entry.level.is_empty() {
        return None;
    }
    Some(format!(" {:<width$}", entry.level, width = LEVEL_WIDTH))
}

/// Space between the time/level columns and the message
pub fn has_gutter(entry: &LogEntry) -> bool {
    entry.time.is_some() || !entry.level.is_empty()
}

/// ` | k=v k=v`, or `None` without fields
pub fn fields_text(entry: &LogEntry) -> Option<String> {
    if entry.fields.is_empty() {
        return None;
    }
    let pairs: Vec<String> = entry
        .fields
        .iter()
        .map(|f| format!("{}={}", f.key, f.value))
        .collect();
    Some(format!("{FIELDS_SEPARATOR}{}", pairs.join(" ")))
}

/// Column count of the rendered line, prefix included
pub fn estimated_width(entry: &LogEntry, pretty: bool) -> usize {
    let mut width = LOG_INDENT.len() + entry.message.width();
    if !pretty {
        return width;
    }

    if entry.time.is_some() {
        width += TIME_WIDTH;
    }
    if !entry.level.is_empty() {
        width += 1 + entry.level.width().max(LEVEL_WIDTH);
    }
    if has_gutter(entry) {
        width += 1;
    }
    if !entry.fields.is_empty() {
        width += FIELDS_SEPARATOR.len();
        width += entry
            .fields
            .iter()
            .map(|f| f.key.width() + 1 + f.value.width())
            .sum::<usize>();
        width += entry.fields.len() - 1;
    }
    width
}
