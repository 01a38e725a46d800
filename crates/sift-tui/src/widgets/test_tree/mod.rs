//! Test tree widget - the windowed view of test rows and expanded logs.
//!
//! The document is walked in layout order through a [`VirtualWindow`], so
//! only rows and log lines inside the visible band are ever styled or
//! wrapped. Log buffers of tests whose block lies entirely outside the band
//! are not even locked.

mod rows;
mod wrap;


use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::{AppState, VirtualWindow};

use crate::theme::styles;

pub use rows::{log_line, test_row, LogFocus};
pub use wrap::{wrap, wrap_to_height};

/// Materialized lines of one document item
pub type TreeWindow = VirtualWindow<Vec<Line<'static>>>;

/// How the walk decorates what it materializes
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkStyle {
    /// Highlight the cursor row and log line
    pub cursor: bool,
    /// Spinner frame for running tests; `None` draws the static marker
    pub frame: Option<usize>,
    /// Append each row's virtual line
    pub debug: bool,
}

/// Walk every laid out test into `window`.
///
/// Uses the positions of the last layout recompute: tests that arrived
/// since, and logs appended since, stay out until the next one.
pub fn walk(state: &AppState, window: &mut TreeWindow, style: WalkStyle) {
    let width = state.layout.width();
    let pretty = state.layout.pretty();

    for (index, test) in state.store.tests().iter().enumerate() {
        if window.is_past_end() {
            break;
        }
        let Some(fold) = state.layout.fold(&test.reference) else {
            continue;
        };
        let Some(row_offset) = fold.row_offset() else {
            continue;
        };

        let is_cursor_test = style.cursor && index == state.cursor.test;
        window.push(1, || {
            let mut row = test_row(test, is_cursor_test, style.frame);
            if style.debug {
                row.spans.push(Span::styled(
                    format!(" [{row_offset}]"),
                    styles::text_secondary(),
                ));
            }
            vec![row]
        });

        let logs_height = fold.logs_height();
        if logs_height == 0 {
            continue;
        }
        if !window.intersects(logs_height) {
            window.advance(logs_height);
            continue;
        }

        let laid_out = fold.laid_out_logs();
        state.store.with_logs(&test.reference, |logs| {
            for (i, entry) in logs.iter().take(laid_out).enumerate() {
                let height = fold.log_height(i);
                window.push(height, || {
                    let focus = if !is_cursor_test {
                        LogFocus::Other
                    } else if i == state.cursor.log {
                        LogFocus::Cursor
                    } else {
                        LogFocus::SameTest
                    };
                    wrap_to_height(&log_line(entry, pretty, focus), width, height)
                });
            }
        });
    }
}

/// Flatten a walked window into at most `height` screen lines, dropping
/// the part of the first item that sits above the offset
pub fn visible_lines(window: TreeWindow, height: usize) -> Vec<Line<'static>> {
    let offset = window.offset();
    let mut lines = Vec::with_capacity(height);
    for item in window.into_items() {
        let skip = item.clipped_above(offset);
        lines.extend(item.content.into_iter().skip(skip));
        if lines.len() >= height {
            break;
        }
    }
    lines.truncate(height);
    lines
}

/// The interactive test view
pub struct TestTree<'a> {
    state: &'a AppState,
}

impl<'a> TestTree<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Walk the band starting at the scroll offset
    pub fn window(&self, height: usize) -> TreeWindow {
        let mut window = VirtualWindow::new(self.state.scroll.offset, height);
        let style = WalkStyle {
            cursor: true,
            frame: Some(self.state.spinner_frame),
            debug: self.state.options.debug,
        };
        walk(self.state, &mut window, style);
        window
    }
}

impl Widget for TestTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let height = usize::from(area.height);
        let lines = visible_lines(self.window(height), height);
        Paragraph::new(lines).render(area, buf);
    }
}
