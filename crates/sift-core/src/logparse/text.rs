//! Output of the `log/slog` text handler: space separated `key=value` pairs

use std::str::Chars;

use chrono::DateTime;

use super::{LogEntry, LogField};

/// Recognize a line made only of `key=value` pairs.
///
/// Values may be double-quoted; a quote closes the value only when it is
/// preceded by an even number of backslashes. Any malformed pair rejects the
/// whole line. An unparseable `time` value is dropped rather than rejected.
pub fn recognize(raw: &str) -> Option<LogEntry> {
    if raw.starts_with('{') {
        return None;
    }

    let mut entry = LogEntry::default();
    let mut rest = raw.trim_start_matches(' ');
    let mut pairs = 0;

    while !rest.is_empty() {
        let (key, after_key) = cut_key(rest)?;
        let (value, after_value) = cut_value(after_key)?;

        match key {
            "time" => entry.time = DateTime::parse_from_rfc3339(&value).ok(),
            "level" => entry.level = value,
            "msg" => entry.message = value,
            _ => entry.fields.push(LogField::new(key, value)),
        }

        pairs += 1;
        rest = after_value.trim_start_matches(' ');
    }

    (pairs > 0).then_some(entry)
}

/// Split `key=rest`. Keys are non-empty and contain no whitespace or quotes.
fn cut_key(s: &str) -> Option<(&str, &str)> {
    let (key, rest) = s.split_once('=')?;
    if key.is_empty() || key.contains(|c: char| c.is_whitespace() || c == '"') {
        return None;
    }
    Some((key, rest))
}

/// Split a value off the front of `s`, returning it unquoted
fn cut_value(s: &str) -> Option<(String, &str)> {
    if s.starts_with('"') {
        let close = closing_quote(s)?;
        let value = unquote(&s[..=close])?;
        let rest = &s[close + 1..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        return Some((value, rest));
    }

    let end = s.find(' ').unwrap_or(s.len());
    let value = &s[..end];
    if value.is_empty() {
        return None;
    }
    Some((value.to_string(), &s[end..]))
}

/// Byte index of the quote closing the string that opens at index 0
fn closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut backslashes = 0;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match b {
            b'\\' => backslashes += 1,
            b'"' if backslashes % 2 == 0 => return Some(i),
            _ => backslashes = 0,
        }
    }
    None
}

/// Decode a double-quoted string the way Go's `strconv.Unquote` does.
///
/// `\x` and octal escapes produce raw bytes; sequences that are not valid
/// UTF-8 are replaced.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescape(&mut chars, &mut out)?,
            '"' | '\n' => return None,
            c => push_char(&mut out, c),
        }
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

/// Decode the escape following a backslash into `out`
fn unescape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Option<()> {
    let byte = match chars.next()? {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        'x' => u8::try_from(hex_value(chars, 2)?).ok()?,
        'u' => {
            push_char(out, char::from_u32(hex_value(chars, 4)?)?);
            return Some(());
        }
        'U' => {
            push_char(out, char::from_u32(hex_value(chars, 8)?)?);
            return Some(());
        }
        first @ '0'..='7' => {
            let mut value = first.to_digit(8)?;
            for _ in 0..2 {
                value = value * 8 + chars.next()?.to_digit(8)?;
            }
            u8::try_from(value).ok()?
        }
        _ => return None,
    };
    out.push(byte);
    Some(())
}

fn hex_value(chars: &mut Chars<'_>, digits: usize) -> Option<u32> {
    (0..digits).try_fold(0u32, |acc, _| Some(acc * 16 + chars.next()?.to_digit(16)?))
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
