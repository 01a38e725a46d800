//! Header: title, mode markers, debug info and the search prompt

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::AppState;

use super::SearchInput;
use crate::theme::styles;

const TITLE: &str = " \u{2207} sift "; // ∇

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(TITLE, styles::title())];

        if self.state.auto_toggle {
            spans.push(Span::styled(
                " [AUTO TOGGLE MODE]",
                styles::text_secondary(),
            ));
        }

        if self.state.options.debug {
            let position = self
                .state
                .cursor_position()
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            spans.push(Span::styled(
                format!(
                    " cursor: [{}, {}] {} | yoffset: {}, height {}",
                    self.state.cursor.test,
                    self.state.cursor.log,
                    position,
                    self.state.scroll.offset,
                    self.state.scroll.visible_lines,
                ),
                styles::text_secondary(),
            ));
        }

        Line::from(spans)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.title_line(), Line::default()];
        if let Some(search) = SearchInput::new(self.state).line() {
            lines.push(search);
            lines.push(Line::default());
        }
        lines
    }

    pub fn height(&self) -> u16 {
        if SearchInput::new(self.state).is_visible() {
            4
        } else {
            2
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
