//! Screen layout definitions for the TUI
//!
//! The body is padded by one cell on every side. The header sits on top,
//! the test view takes what its content needs up to the space left over,
//! and the footer follows the test view directly.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, mode markers and search prompt
    pub header: Rect,

    /// Windowed test rows and logs
    pub tests: Rect,

    /// Summary, outcome and help
    pub footer: Rect,

    /// Lines the test view may grow to; the viewport height for scrolling
    pub tests_capacity: u16,
}

pub fn body(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Split `area` given the header and footer heights and the number of
/// virtual lines the test view holds
pub fn create(area: Rect, header_height: u16, footer_height: u16, content_lines: usize) -> ScreenAreas {
    let body = body(area);
    let header_height = header_height.min(body.height);
    let footer_height = footer_height.min(body.height - header_height);
    let tests_capacity = body.height - header_height - footer_height;
    let tests_height = u16::try_from(content_lines)
        .unwrap_or(u16::MAX)
        .min(tests_capacity);

    let chunks = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Length(tests_height),
        Constraint::Length(footer_height),
        Constraint::Min(0),
    ])
    .split(body);

    ScreenAreas {
        header: chunks[0],
        tests: chunks[1],
        footer: chunks[2],
        tests_capacity,
    }
}
