//! Scroll message handlers
//!
//! Scrolling moves the viewport only; the cursor stays where it is.

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState, n: usize) -> UpdateResult {
    state.scroll.scroll_up(n);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState, n: usize) -> UpdateResult {
    state.scroll.scroll_down(n);
    UpdateResult::none()
}

pub fn handle_half_page_up(state: &mut AppState) -> UpdateResult {
    state.scroll.half_page_up();
    UpdateResult::none()
}

pub fn handle_half_page_down(state: &mut AppState) -> UpdateResult {
    state.scroll.half_page_down();
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.scroll.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.scroll.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_to_bottom();
    UpdateResult::none()
}
