//! Output of the `log/slog` JSON handler

use chrono::DateTime;
use serde_json::{Map, Value};

use super::{LogEntry, LogField};

/// Recognize a line that is a single JSON object.
///
/// `time`, `level` and `msg` fill the entry; every other key becomes a
/// field when its value is a string, number or bool.
pub fn recognize(raw: &str) -> Option<LogEntry> {
    let object: Map<String, Value> = serde_json::from_str(raw).ok()?;

    let mut entry = LogEntry::default();
    for (key, value) in object {
        if is_reserved(&key) {
            assign_reserved(&mut entry, &key, value)?;
        } else if let Some(value) = stringify(&value) {
            entry.fields.push(LogField::new(key, value));
        }
    }

    Some(entry)
}

fn is_reserved(key: &str) -> bool {
    matches!(key, "time" | "level" | "msg")
}

/// Reserved keys must hold strings (or null); anything else is not a slog record
fn assign_reserved(entry: &mut LogEntry, key: &str, value: Value) -> Option<()> {
    let text = match value {
        Value::Null => return Some(()),
        Value::String(text) => text,
        _ => return None,
    };

    match key {
        "time" => entry.time = Some(DateTime::parse_from_rfc3339(&text).ok()?),
        "level" => entry.level = text,
        _ => entry.message = text,
    }
    Some(())
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
