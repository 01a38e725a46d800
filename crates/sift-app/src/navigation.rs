//! Navigation State Machine - cursor moves, folding, filtering and
//! scroll-follow over [`AppState`].
//!
//! Every operation is a no-op on an empty test list. After any operation the
//! cursor denotes a visible test, unless no test is visible at all, in which
//! case it sits at index 0.

use sift_core::{TestRecord, TestStatus};
use tracing::debug;

use crate::key_sequence::FoldCommand;
use crate::search::SearchFilter;
use crate::state::AppState;

impl AppState {
    // ─────────────────────────────────────────────────────────
    // Visibility
    // ─────────────────────────────────────────────────────────

    fn is_visible(&self, test: &TestRecord) -> bool {
        self.search.is_visible(&test.reference)
    }

    /// Nearest visible test after the cursor that satisfies `accept`
    fn find_forward(&self, accept: impl Fn(&TestRecord) -> bool) -> Option<usize> {
        let tests = self.store.tests();
        tests
            .iter()
            .enumerate()
            .skip(self.cursor.test + 1)
            .find(|(_, t)| self.is_visible(t) && accept(t))
            .map(|(i, _)| i)
    }

    /// Nearest visible test before the cursor that satisfies `accept`
    fn find_backward(&self, accept: impl Fn(&TestRecord) -> bool) -> Option<usize> {
        let tests = self.store.tests();
        let end = self.cursor.test.min(tests.len());
        tests[..end]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, t)| self.is_visible(t) && accept(t))
            .map(|(i, _)| i)
    }

    fn log_count(&self, index: usize) -> usize {
        self.store
            .get_test(index)
            .map(|t| self.store.get_log_count(&t.reference))
            .unwrap_or(0)
    }

    fn is_test_expanded(&self, index: usize) -> bool {
        self.store
            .get_test(index)
            .is_some_and(|t| self.layout.is_expanded(&t.reference))
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────

    /// Move the cursor to `index`. In auto-toggle mode the previous test
    /// collapses and the new one expands.
    fn select(&mut self, index: usize, log: usize) {
        if self.auto_toggle && index != self.cursor.test {
            if let Some(previous) = self.cursor_test() {
                self.layout.set_expanded(&previous.reference, false);
            }
            if let Some(next) = self.store.get_test(index) {
                self.layout.set_expanded(&next.reference, true);
            }
            self.recalculate_layout();
        }
        self.cursor.test = index;
        self.cursor.log = log;
    }

    /// Land on the last log of an expanded destination, else its row
    fn select_backward(&mut self, index: usize) {
        let log = if self.is_test_expanded(index) {
            self.log_count(index).saturating_sub(1)
        } else {
            0
        };
        self.select(index, log);
    }

    pub fn next_test(&mut self) {
        if self.ensure_cursor_visible() {
            return self.scroll_follow();
        }
        if let Some(index) = self.find_forward(|_| true) {
            self.select(index, 0);
        }
        self.scroll_follow();
    }

    pub fn prev_test(&mut self) {
        if self.ensure_cursor_visible() {
            return self.scroll_follow();
        }
        if let Some(index) = self.find_backward(|_| true) {
            self.select_backward(index);
        }
        self.scroll_follow();
    }

    pub fn next_failing_test(&mut self) {
        self.ensure_cursor_visible();
        if let Some(index) = self.find_forward(|t| t.status == TestStatus::Failed) {
            self.select(index, 0);
        }
        self.scroll_follow();
    }

    pub fn prev_failing_test(&mut self) {
        self.ensure_cursor_visible();
        if let Some(index) = self.find_backward(|t| t.status == TestStatus::Failed) {
            self.select_backward(index);
        }
        self.scroll_follow();
    }

    /// Next log line of an expanded test, else the next visible test
    pub fn cursor_down(&mut self) {
        if self.ensure_cursor_visible() {
            return self.scroll_follow();
        }
        if self.is_test_expanded(self.cursor.test)
            && self.cursor.log + 1 < self.log_count(self.cursor.test)
        {
            self.cursor.log += 1;
        } else if let Some(index) = self.find_forward(|_| true) {
            self.select(index, 0);
        }
        self.scroll_follow();
    }

    /// Previous log line, else the previous visible test
    pub fn cursor_up(&mut self) {
        if self.ensure_cursor_visible() {
            return self.scroll_follow();
        }
        if self.cursor.log > 0 {
            self.cursor.log -= 1;
        } else if let Some(index) = self.find_backward(|_| true) {
            self.select_backward(index);
        }
        self.scroll_follow();
    }

    // ─────────────────────────────────────────────────────────
    // Folding
    // ─────────────────────────────────────────────────────────

    pub fn apply_fold(&mut self, command: FoldCommand) {
        let Some(current) = self.cursor_test() else {
            return;
        };
        let reference = current.reference;

        let collapsed_cursor = match command {
            FoldCommand::ToggleOne => {
                let expanded = !self.layout.is_expanded(&reference);
                self.layout.set_expanded(&reference, expanded);
                !expanded
            }
            FoldCommand::ExpandOne => {
                self.layout.set_expanded(&reference, true);
                false
            }
            FoldCommand::CollapseOne => {
                self.layout.set_expanded(&reference, false);
                true
            }
            FoldCommand::ToggleRecursive => {
                let expanded = !self.layout.is_expanded(&reference);
                for test in self.store.tests() {
                    if test.reference == reference || test.reference.is_descendant_of(&reference)
                    {
                        self.layout.set_expanded(&test.reference, expanded);
                    }
                }
                !expanded
            }
            FoldCommand::ExpandAll => {
                self.set_all_expanded(true);
                false
            }
            FoldCommand::CollapseAll => {
                self.set_all_expanded(false);
                true
            }
        };

        if collapsed_cursor {
            self.cursor.log = 0;
        }
        debug!("{:?} on {}", command, reference);
        self.recalculate_layout();
        self.scroll_follow();
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        for test in self.store.tests() {
            self.layout.set_expanded(&test.reference, expanded);
        }
    }

    /// Flip auto-toggle mode. Turning it on leaves only the cursor test
    /// expanded.
    pub fn toggle_auto_toggle(&mut self) {
        self.auto_toggle = !self.auto_toggle;
        if !self.auto_toggle {
            return;
        }
        let Some(current) = self.cursor_test() else {
            return;
        };
        self.set_all_expanded(false);
        self.layout.set_expanded(&current.reference, true);
        self.recalculate_layout();
        self.scroll_follow();
    }

    /// In auto-toggle mode, expand a cursor test that arrived after the
    /// mode was set and has never been folded
    pub fn expand_new_cursor_test(&mut self) {
        if !self.auto_toggle {
            return;
        }
        let Some(current) = self.cursor_test() else {
            return;
        };
        if self.layout.fold(&current.reference).is_none() {
            self.layout.set_expanded(&current.reference, true);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────

    /// Replace the filter and move the cursor off any hidden test
    pub fn set_search(&mut self, pattern: &str) {
        self.search = SearchFilter::new(pattern);
        self.ensure_cursor_visible();
        self.recalculate_layout();
        self.scroll_follow();
    }

    /// Relocate a hidden cursor to the nearest visible test forward, then
    /// backward, then index 0. Returns whether the cursor moved.
    ///
    /// Tests arriving after the filter was set can put a hidden test under
    /// the cursor, so moves and layout ticks call this first.
    pub fn ensure_cursor_visible(&mut self) -> bool {
        if self
            .cursor_test()
            .map_or(true, |test| self.is_visible(&test))
        {
            return false;
        }

        let previous = self.cursor;
        let target = self
            .find_forward(|_| true)
            .or_else(|| self.find_backward(|_| true))
            .unwrap_or(0);
        self.cursor.test = target;
        self.cursor.log = 0;
        self.cursor != previous
    }

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────

    /// Scroll the minimum needed to keep the cursor inside the margin.
    /// Does nothing while the cursor position is unknown.
    pub fn scroll_follow(&mut self) {
        if let Some(position) = self.cursor_position() {
            self.scroll.follow(position, self.options.scroll_margin);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sift_core::{TestEvent, TestReference};

    use crate::state::{Options, UiMode};
    use crate::store::TestStore;

    use super::*;

    /// State with one test per `(name, status, log_count)`
    fn state_with(tests: &[(&str, &str, usize)]) -> AppState {
        let store = TestStore::new(false);
        for (name, status, logs) in tests {
            add(&store, &format!(r#"{{"Action":"run","Package":"p","Test":"{name}"}}"#));
            for i in 0..*logs {
                add(
                    &store,
                    &format!(
                        r#"{{"Action":"output","Package":"p","Test":"{name}","Output":"log {i}\n"}}"#
                    ),
                );
            }
            if *status != "run" {
                add(
                    &store,
                    &format!(r#"{{"Action":"{status}","Package":"p","Test":"{name}"}}"#),
                );
            }
        }
        let mut state = AppState::new(Arc::new(store), Options::default());
        state.resize(80, 20);
        state
    }

    fn add(store: &TestStore, line: &str) {
        store.add_event(&TestEvent::parse(line).unwrap());
    }

    fn simple(names: &[&str]) -> AppState {
        let tests: Vec<_> = names.iter().map(|n| (*n, "pass", 0)).collect();
        state_with(&tests)
    }

    fn expanded(state: &AppState, name: &str) -> bool {
        state.layout.is_expanded(&TestReference::new("p", name))
    }

    #[test]
    fn test_next_and_prev_stop_at_boundaries() {
        let mut state = simple(&["A", "B", "C"]);
        state.next_test();
        assert_eq!(state.cursor.test, 1);
        state.next_test();
        state.next_test();
        assert_eq!(state.cursor.test, 2);
        state.prev_test();
        state.prev_test();
        state.prev_test();
        assert_eq!(state.cursor.test, 0);
        assert_eq!(state.cursor.log, 0);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut state = simple(&[]);
        state.next_test();
        state.prev_test();
        state.cursor_down();
        state.cursor_up();
        state.next_failing_test();
        state.apply_fold(FoldCommand::ToggleRecursive);
        state.set_search("x");
        assert_eq!(state.cursor, Default::default());
    }

    #[test]
    fn test_cursor_down_walks_logs_of_expanded_test() {
        let mut state = state_with(&[("A", "pass", 3), ("B", "pass", 0)]);
        state.apply_fold(FoldCommand::ToggleOne);

        state.cursor_down();
        assert_eq!((state.cursor.test, state.cursor.log), (0, 1));
        state.cursor_down();
        assert_eq!((state.cursor.test, state.cursor.log), (0, 2));
        state.cursor_down();
        assert_eq!((state.cursor.test, state.cursor.log), (1, 0));
        state.cursor_down();
        assert_eq!((state.cursor.test, state.cursor.log), (1, 0));
    }

    #[test]
    fn test_cursor_down_skips_logs_of_collapsed_test() {
        let mut state = state_with(&[("A", "pass", 5), ("B", "pass", 0)]);
        state.cursor_down();
        assert_eq!((state.cursor.test, state.cursor.log), (1, 0));
    }

    #[test]
    fn test_cursor_up_lands_on_last_log_of_expanded_test() {
        let mut state = state_with(&[("A", "pass", 4), ("B", "pass", 0)]);
        state.apply_fold(FoldCommand::ExpandOne);
        state.next_test();
        assert_eq!(state.cursor.log, 0);

        state.cursor_up();
        assert_eq!((state.cursor.test, state.cursor.log), (0, 3));
        state.cursor_up();
        assert_eq!((state.cursor.test, state.cursor.log), (0, 2));
    }

    #[test]
    fn test_prev_test_lands_on_last_log_of_expanded_test() {
        let mut state = state_with(&[("A", "pass", 2), ("B", "pass", 0)]);
        state.apply_fold(FoldCommand::ExpandOne);
        state.next_test();
        state.prev_test();
        assert_eq!((state.cursor.test, state.cursor.log), (0, 1));
    }

    #[test]
    fn test_failing_navigation() {
        let mut state = state_with(&[
            ("A", "fail", 0),
            ("B", "pass", 0),
            ("C", "skip", 0),
            ("D", "fail", 0),
            ("E", "run", 0),
        ]);
        state.next_failing_test();
        assert_eq!(state.cursor.test, 3);
        state.next_failing_test();
        assert_eq!(state.cursor.test, 3, "no failing test after D");
        state.prev_failing_test();
        assert_eq!(state.cursor.test, 0);
        state.prev_failing_test();
        assert_eq!(state.cursor.test, 0);
    }

    #[test]
    fn test_toggle_recursion_covers_family_only() {
        let mut state = simple(&["A", "A/1", "A/2", "B", "AB"]);
        state.apply_fold(FoldCommand::ToggleRecursive);

        assert!(expanded(&state, "A"));
        assert!(expanded(&state, "A/1"));
        assert!(expanded(&state, "A/2"));
        assert!(!expanded(&state, "B"));
        assert!(!expanded(&state, "AB"), "prefix without separator is not a child");

        state.apply_fold(FoldCommand::ToggleRecursive);
        assert!(!expanded(&state, "A"));
        assert!(!expanded(&state, "A/1"));
        assert!(!expanded(&state, "A/2"));
    }

    #[test]
    fn test_toggle_recursive_from_child() {
        let mut state = simple(&["A", "A/1", "A/1/x", "A/2"]);
        state.next_test();
        state.apply_fold(FoldCommand::ToggleRecursive);
        assert!(!expanded(&state, "A"));
        assert!(expanded(&state, "A/1"));
        assert!(expanded(&state, "A/1/x"));
        assert!(!expanded(&state, "A/2"));
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut state = state_with(&[("A", "pass", 3), ("B", "pass", 1)]);
        state.apply_fold(FoldCommand::ExpandAll);
        assert!(expanded(&state, "A") && expanded(&state, "B"));

        state.cursor_down();
        assert_eq!(state.cursor.log, 1);
        state.apply_fold(FoldCommand::CollapseAll);
        assert!(!expanded(&state, "A") && !expanded(&state, "B"));
        assert_eq!(state.cursor.log, 0, "collapse resets the log cursor");
    }

    #[test]
    fn test_collapse_one_resets_log() {
        let mut state = state_with(&[("A", "pass", 3)]);
        state.apply_fold(FoldCommand::ExpandOne);
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor.log, 2);
        state.apply_fold(FoldCommand::CollapseOne);
        assert_eq!(state.cursor.log, 0);
    }

    #[test]
    fn test_auto_toggle_keeps_one_test_expanded() {
        let mut state = state_with(&[("A", "pass", 2), ("B", "pass", 2), ("C", "pass", 2)]);
        state.toggle_auto_toggle();
        assert!(expanded(&state, "A"));

        state.next_test();
        assert!(!expanded(&state, "A"));
        assert!(expanded(&state, "B"));
        assert_eq!(state.cursor.log, 0);

        state.next_test();
        state.prev_test();
        assert!(expanded(&state, "B"));
        assert!(!expanded(&state, "C"));
        assert_eq!(state.cursor.log, 0, "destination was collapsed before the move");
    }

    #[test]
    fn test_manual_expansion_persists_without_auto_toggle() {
        let mut state = state_with(&[("A", "pass", 2), ("B", "pass", 2)]);
        state.apply_fold(FoldCommand::ExpandOne);
        state.next_test();
        state.next_test();
        assert!(expanded(&state, "A"));
        assert!(!expanded(&state, "B"));
    }

    #[test]
    fn test_search_relocates_cursor_forward_then_backward() {
        let mut state = simple(&["TestAlpha", "TestBeta", "TestGamma", "TestBetamax"]);
        state.next_test();
        state.next_test();
        assert_eq!(state.cursor.test, 2);

        state.set_search("beta");
        assert_eq!(state.cursor.test, 3, "forward first");

        state.set_search("alpha");
        assert_eq!(state.cursor.test, 0, "then backward");

        state.set_search("nothing matches");
        assert_eq!(state.cursor.test, 0);
    }

    #[test]
    fn test_navigation_skips_hidden_tests() {
        let mut state = simple(&["TestLogin", "TestLogout", "TestLoginAgain", "TestSignup"]);
        state.set_search("login");
        state.next_test();
        assert_eq!(state.cursor.test, 2);
        state.next_test();
        assert_eq!(state.cursor.test, 2);
        state.prev_test();
        assert_eq!(state.cursor.test, 0);
    }

    #[test]
    fn test_cursor_stays_visible_under_filter() {
        let names = ["Alpha", "alpine", "Beta", "Alps/x", "Gamma", "al"];
        let mut state = simple(&names);
        state.set_search("al");

        let ops: [fn(&mut AppState); 6] = [
            AppState::next_test,
            AppState::prev_test,
            AppState::cursor_down,
            AppState::cursor_up,
            AppState::next_failing_test,
            AppState::prev_failing_test,
        ];
        for step in 0..60 {
            ops[(step * 7) % ops.len()](&mut state);
            let test = state.cursor_test().unwrap();
            assert!(
                state.search.is_visible(&test.reference),
                "cursor on hidden test {} after step {step}",
                test.reference
            );
        }
    }

    #[test]
    fn test_filter_set_before_tests_arrive() {
        let mut state = simple(&[]);
        state.set_search("beta");
        assert_eq!(state.cursor.test, 0);

        add(&state.store, r#"{"Action":"run","Package":"p","Test":"TestAlpha"}"#);
        add(&state.store, r#"{"Action":"run","Package":"p","Test":"TestBeta"}"#);
        state.recalculate_layout();

        state.prev_test();
        assert_eq!(state.cursor_test().unwrap().reference.path, "TestBeta");
        state.cursor_up();
        assert_eq!(state.cursor_test().unwrap().reference.path, "TestBeta");
    }

    #[test]
    fn test_hidden_cursor_relocates_before_failing_search() {
        let mut state = state_with(&[
            ("Alpha", "fail", 0),
            ("Beta", "pass", 0),
            ("BetaFail", "fail", 0),
        ]);
        state.search = SearchFilter::new("beta");
        assert_eq!(state.cursor.test, 0);

        state.prev_failing_test();
        let test = state.cursor_test().unwrap();
        assert!(state.search.is_visible(&test.reference));
        state.next_failing_test();
        assert_eq!(state.cursor_test().unwrap().reference.path, "BetaFail");
    }

    #[test]
    fn test_scroll_follow_keeps_margin() {
        let names: Vec<String> = (0..100).map(|i| format!("Test{i:03}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = simple(&refs);

        for _ in 0..30 {
            state.next_test();
        }
        // cursor at line 30, viewport 20 lines, margin 5
        assert_eq!(state.scroll.offset, 30 + 5 + 1 - 20);

        for _ in 0..30 {
            state.prev_test();
        }
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_cursor_position_counts_expanded_logs() {
        let mut state = state_with(&[("A", "pass", 3), ("B", "pass", 0)]);
        assert_eq!(state.cursor_position(), Some(0));
        state.apply_fold(FoldCommand::ExpandOne);
        assert_eq!(state.cursor_position(), Some(1));
        state.cursor_down();
        assert_eq!(state.cursor_position(), Some(2));
        state.next_test();
        assert_eq!(state.cursor_position(), Some(4));
    }

    #[test]
    fn test_ui_mode_untouched_by_navigation() {
        let mut state = simple(&["A", "B"]);
        state.next_test();
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_auto_toggle_expands_first_arriving_test() {
        let options = Options {
            auto_toggle: true,
            ..Options::default()
        };
        let store = Arc::new(TestStore::new(false));
        let mut state = AppState::new(store.clone(), options);
        state.resize(80, 20);

        add(&store, r#"{"Action":"run","Package":"p","Test":"A"}"#);
        state.expand_new_cursor_test();
        assert!(expanded(&state, "A"));

        state.apply_fold(FoldCommand::CollapseOne);
        state.expand_new_cursor_test();
        assert!(!expanded(&state, "A"), "an explicit collapse sticks");
    }
}
