//! Search prompt line

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use sift_app::{AppState, UiMode};

use crate::theme::styles;

const PLACEHOLDER: &str = "search for tests";

/// Search prompt for the header
pub struct SearchInput<'a> {
    state: &'a AppState,
}

impl<'a> SearchInput<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn editing(&self) -> bool {
        self.state.ui_mode == UiMode::SearchInput
    }

    /// Shown while editing, or while a filter is applied
    pub fn is_visible(&self) -> bool {
        self.editing() || self.state.search.is_active()
    }

    /// `Search: /query_` while editing, `Search: /query (esc to clear)`
    /// once submitted. `None` when there is nothing to show.
    pub fn line(&self) -> Option<Line<'static>> {
        if !self.is_visible() {
            return None;
        }

        let query = self.state.search.pattern();
        let mut spans = vec![
            Span::styled("Search: ", styles::keybinding()),
            Span::styled("/", styles::keybinding()),
        ];

        if self.editing() {
            if query.is_empty() {
                spans.push(Span::styled(PLACEHOLDER, styles::text_secondary()));
            } else {
                spans.push(Span::raw(query.to_string()));
                spans.push(Span::styled(
                    "_",
                    styles::text_secondary().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        } else {
            spans.push(Span::raw(query.to_string()));
            spans.push(Span::styled(" (esc to clear)", styles::text_secondary()));
        }

        Some(Line::from(spans))
    }
}
