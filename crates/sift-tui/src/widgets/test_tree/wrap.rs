//! Hard wrapping of styled lines to a fixed column count

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Wrap `line` and pad or truncate to exactly `height` rows, so the rendered
/// block matches the height the layout cache measured for it
pub fn wrap_to_height(line: &Line<'_>, width: usize, height: usize) -> Vec<Line<'static>> {
    let mut rows = wrap(line, width);
    rows.resize_with(height, Line::default);
    rows
}

/// Split `line` into rows of at most `width` columns. Always returns at
/// least one row.
pub fn wrap(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current: Vec<(char, Style)> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        let style = line.style.patch(span.style);
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                rows.push(group(&current));
                current.clear();
                used = 0;
            }
            current.push((c, style));
            used += w;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(group(&current));
    }
    rows
}

/// Group consecutive chars with the same style into spans
fn group(chars: &[(char, Style)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let Some(&(_, first)) = chars.first() else {
        return Line::default();
    };

    let mut current_style = first;
    let mut current_text = String::new();
    for &(c, style) in chars {
        if style != current_style && !current_text.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
        }
        current_style = style;
        current_text.push(c);
    }
    if !current_text.is_empty() {
        spans.push(Span::styled(current_text, current_style));
    }
    Line::from(spans)
}
