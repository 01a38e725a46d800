//! Key binding help: one short line, or columns of bindings that wrap to
//! the available width

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

type Binding = (&'static str, &'static str);

const SHORT_HELP: [Binding; 2] = [("?", "toggle help"), ("q", "quit")];
const SHORT_SEPARATOR: &str = " • ";

const FULL_HELP: [&[Binding]; 6] = [
    &[("↑/k", "move up"), ("↓/j", "move down"), ("m", "change mode")],
    &[
        ("{", "prev test"),
        ("}", "next test"),
        ("[", "prev failed test"),
        ("]", "next failed test"),
    ],
    &[
        ("ctrl+y", "scroll up"),
        ("ctrl+e", "scroll down"),
        ("ctrl+u", "half page up"),
        ("ctrl+d", "half page down"),
    ],
    &[("za", "toggle test"), ("zo", "expand test"), ("zc", "collapse test")],
    &[("zA", "toggle children"), ("zR", "expand all"), ("zM", "collapse all")],
    &[
        ("/", "search tests"),
        ("esc", "clear search"),
        ("?", "toggle help"),
        ("q", "quit"),
    ],
];

const COLUMN_WIDTH: usize = 24;
const COLUMN_SEPARATOR: &str = "    ";

/// `? toggle help • q quit`
pub fn short_help() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in SHORT_HELP.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SHORT_SEPARATOR, styles::text_secondary()));
        }
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, styles::text_secondary()));
    }
    Line::from(spans)
}

/// One column as padded lines: keys aligned, descriptions after
fn column(bindings: &[Binding]) -> Vec<Vec<Span<'static>>> {
    let key_width = bindings.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    bindings
        .iter()
        .map(|(key, desc)| {
            let used = key_width + 1 + desc.width();
            vec![
                Span::styled(format!("{key:<key_width$}"), styles::keybinding()),
                Span::raw(" "),
                Span::styled(*desc, styles::text_secondary()),
                Span::raw(" ".repeat(COLUMN_WIDTH.saturating_sub(used))),
            ]
        })
        .collect()
}

/// All binding groups, as many columns per row as fit in `width`
pub fn full_help(width: usize) -> Vec<Line<'static>> {
    let per_row = ((width + COLUMN_SEPARATOR.len()) / (COLUMN_WIDTH + COLUMN_SEPARATOR.len())).max(1);

    let mut lines = Vec::new();
    for (row_index, groups) in FULL_HELP.chunks(per_row).enumerate() {
        if row_index > 0 {
            lines.push(Line::default());
        }
        let columns: Vec<_> = groups.iter().map(|g| column(g)).collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);

        for y in 0..height {
            let mut spans = Vec::new();
            for (x, col) in columns.iter().enumerate() {
                if x > 0 {
                    spans.push(Span::raw(COLUMN_SEPARATOR));
                }
                match col.get(y) {
                    Some(cell) => spans.extend(cell.iter().cloned()),
                    None => spans.push(Span::raw(" ".repeat(COLUMN_WIDTH))),
                }
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// Short or full help for a footer of `width` columns
pub fn help_lines(show_all: bool, width: usize) -> Vec<Line<'static>> {
    if show_all {
        full_help(width)
    } else {
        vec![short_help()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| &*s.content).collect()
    }

    #[test]
    fn test_short_help() {
        assert_eq!(text(&short_help()), "? toggle help • q quit");
    }

    #[test]
    fn test_wide_footer_fits_all_columns_in_one_row() {
        let lines = full_help(200);
        assert_eq!(lines.len(), 4);
        assert!(text(&lines[0]).contains("↑/k move up"));
        assert!(text(&lines[0]).contains("/   search tests"));
    }

    #[test]
    fn test_columns_wrap_to_width() {
        // two columns per row: 24 + 4 + 24
        let lines = full_help(52);
        // rows of heights 4, 4, 4 plus two blank separators
        assert_eq!(lines.len(), 14);
        assert!(text(&lines[0]).starts_with("↑/k move up"));
        assert!(text(&lines[0]).contains("{ prev test"));
        assert!(text(&lines[0]).width() <= 52);
    }

    #[test]
    fn test_narrow_footer_still_shows_one_column() {
        let lines = full_help(10);
        assert!(lines.len() > FULL_HELP.len());
        assert!(text(&lines[0]).starts_with("↑/k"));
    }

    #[test]
    fn test_help_lines_switch() {
        assert_eq!(help_lines(false, 80).len(), 1);
        assert!(help_lines(true, 80).len() > 1);
    }
}
