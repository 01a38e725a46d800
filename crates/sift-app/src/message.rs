//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal resized; sizes are the test view's, not the whole screen
    Resize { width: u16, height: u16 },

    /// Spinner animation tick
    Tick,

    /// Low-frequency tick that picks up newly arrived logs
    RecalculateLayout,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Ingestion
    // ─────────────────────────────────────────────────────────
    /// Input stream reached EOF
    IngestFinished,
    /// A line was rejected and skipped (lenient input)
    InputRejected { line: usize, error: String },
    /// Ingestion stopped on an error (strict input or I/O failure)
    IngestFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Cursor Navigation
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    NextTest,
    PrevTest,
    NextFailingTest,
    PrevFailingTest,

    // ─────────────────────────────────────────────────────────
    // Folding
    // ─────────────────────────────────────────────────────────
    ToggleTest,
    ExpandTest,
    CollapseTest,
    ToggleTestRecursive,
    ExpandAll,
    CollapseAll,
    ToggleAutoToggle,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (cursor stays put)
    // ─────────────────────────────────────────────────────────
    ScrollUp(usize),
    ScrollDown(usize),
    HalfPageUp,
    HalfPageDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode with an empty query
    StartSearch,
    /// Query text changed
    SearchInput { text: String },
    /// Leave input mode, keep the filter
    SubmitSearch,
    /// Leave input mode, drop the filter
    CancelSearch,
    /// Drop the filter from normal mode
    ClearSearch,

    ToggleHelp,
}
