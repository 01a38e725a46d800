//! Styled test rows and log lines

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use sift_app::log_line::{self, CURSOR_PREFIX, LOG_INDENT};
use sift_core::{LogEntry, TestRecord, TestStatus};

use crate::theme::{icons, styles};

const DEPTH_GUIDE: &str = "│ ";

/// How a log line relates to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFocus {
    /// The line under the cursor
    Cursor,
    /// Another line of the cursor test
    SameTest,
    /// A line of some other test
    Other,
}

impl LogFocus {
    fn base_style(self) -> Style {
        match self {
            LogFocus::Cursor => styles::cursor_log(),
            LogFocus::SameTest => Style::default(),
            LogFocus::Other => styles::text_secondary(),
        }
    }
}

/// `│ │ ✓ name (0.12s)`
///
/// `frame` animates the icon of a running test; `None` draws the static
/// marker.
pub fn test_row(test: &TestRecord, cursor: bool, frame: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(test.reference.depth() + 4);

    for _ in 0..test.reference.depth() {
        spans.push(Span::styled(DEPTH_GUIDE, styles::text_secondary()));
    }

    spans.push(Span::styled(
        icons::status_icon(test.status, frame),
        styles::status(test.status),
    ));
    spans.push(Span::raw(" "));

    let name_style = if cursor {
        styles::highlighted()
    } else {
        Style::default()
    };
    spans.push(Span::styled(
        test.reference.display_name().to_string(),
        name_style,
    ));

    if matches!(
        test.status,
        TestStatus::Passed | TestStatus::Failed | TestStatus::Skipped
    ) {
        spans.push(Span::styled(
            format!(" ({:.2}s)", test.elapsed.as_secs_f64()),
            styles::text_secondary(),
        ));
    }

    Line::from(spans)
}

/// One log line, unwrapped. Its column count is exactly
/// [`log_line::estimated_width`], so the wrapped height agrees with the
/// layout cache.
pub fn log_line(entry: &LogEntry, pretty: bool, focus: LogFocus) -> Line<'static> {
    let base = focus.base_style();
    let prefix = if focus == LogFocus::Cursor {
        CURSOR_PREFIX
    } else {
        LOG_INDENT
    };

    let mut spans = vec![Span::styled(prefix, base)];

    if pretty {
        if let Some(time) = log_line::time_text(entry) {
            spans.push(Span::styled(time, base.patch(styles::text_secondary())));
        }
        if let Some(level) = log_line::level_text(entry) {
            spans.push(Span::styled(level, base.patch(styles::log_level(&entry.level))));
        }
        if log_line::has_gutter(entry) {
            spans.push(Span::styled(" ", base));
        }
    }

    spans.push(Span::styled(entry.message.clone(), base));

    if pretty {
        if let Some(fields) = log_line::fields_text(entry) {
            spans.push(Span::styled(fields, base.patch(styles::text_secondary())));
        }
    }

    Line::from(spans)
}
