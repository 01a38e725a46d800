//! Output of the standard `log` package: `2025/10/05 09:52:58 message`

use chrono::NaiveDateTime;

use super::LogEntry;

/// Bytes inspected for the timestamp prefix
const PREFIX_LEN: usize = 20;
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Recognize a timestamp-prefixed plain log line.
///
/// The timestamp carries no zone and is read as UTC.
pub fn recognize(raw: &str) -> Option<LogEntry> {
    if raw.starts_with("time=") || raw.starts_with('{') {
        return None;
    }

    let split = PREFIX_LEN.min(raw.len());
    let prefix = raw.get(..split)?;
    let rest = raw.get(split..)?;

    let time = NaiveDateTime::parse_from_str(prefix.trim(), TIMESTAMP_FORMAT).ok()?;

    Some(LogEntry {
        time: Some(time.and_utc().fixed_offset()),
        message: rest.trim().to_string(),
        ..LogEntry::default()
    })
}
