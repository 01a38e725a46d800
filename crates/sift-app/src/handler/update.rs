//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::input_key::InputKey;
use crate::key_sequence::FoldCommand;
use crate::message::Message;
use crate::state::{AppState, IngestStatus, UiMode};

use super::{keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => handle_key_message(state, key),

        Message::Resize { width, height } => {
            state.resize(width, height);
            state.scroll_follow();
            UpdateResult::none()
        }

        Message::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            UpdateResult::none()
        }

        Message::RecalculateLayout => {
            state.ensure_cursor_visible();
            state.expand_new_cursor_test();
            state.recalculate_layout();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Ingestion
        // ─────────────────────────────────────────────────────────
        Message::IngestFinished => {
            state.ingest.status = IngestStatus::Finished;
            state.recalculate_layout();
            if !state.options.interactive {
                state.request_quit();
            }
            UpdateResult::none()
        }

        Message::InputRejected { line, error } => {
            state.ingest.rejected_lines += 1;
            state.ingest.last_rejection = Some(format!("line {}: {}", line, error));
            UpdateResult::none()
        }

        Message::IngestFailed { error } => {
            warn!("Ingestion stopped: {}", error);
            state.ingest.status = IngestStatus::Failed(error);
            state.recalculate_layout();
            if !state.options.interactive {
                state.request_quit();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cursor Navigation
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }
        Message::NextTest => {
            state.next_test();
            UpdateResult::none()
        }
        Message::PrevTest => {
            state.prev_test();
            UpdateResult::none()
        }
        Message::NextFailingTest => {
            state.next_failing_test();
            UpdateResult::none()
        }
        Message::PrevFailingTest => {
            state.prev_failing_test();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Folding
        // ─────────────────────────────────────────────────────────
        Message::ToggleTest => fold(state, FoldCommand::ToggleOne),
        Message::ExpandTest => fold(state, FoldCommand::ExpandOne),
        Message::CollapseTest => fold(state, FoldCommand::CollapseOne),
        Message::ToggleTestRecursive => fold(state, FoldCommand::ToggleRecursive),
        Message::ExpandAll => fold(state, FoldCommand::ExpandAll),
        Message::CollapseAll => fold(state, FoldCommand::CollapseAll),
        Message::ToggleAutoToggle => {
            state.toggle_auto_toggle();
            debug!("auto-toggle: {}", state.auto_toggle);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp(n) => scroll::handle_scroll_up(state, n),
        Message::ScrollDown(n) => scroll::handle_scroll_down(state, n),
        Message::HalfPageUp => scroll::handle_half_page_up(state),
        Message::HalfPageDown => scroll::handle_half_page_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            state.set_search("");
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.set_search(&text);
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::CancelSearch | Message::ClearSearch => {
            state.ui_mode = UiMode::Normal;
            state.set_search("");
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }
    }
}

fn fold(state: &mut AppState, command: FoldCommand) -> UpdateResult {
    state.apply_fold(command);
    UpdateResult::none()
}

/// Fold sequences take precedence over single-key bindings in normal mode
fn handle_key_message(state: &mut AppState, key: InputKey) -> UpdateResult {
    if state.ui_mode == UiMode::Normal {
        state.key_sequence.push(key);
        if let Some(command) = state.key_sequence.matched() {
            state.key_sequence.clear();
            return fold(state, command);
        }
    }

    match handle_key(state, key) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}
