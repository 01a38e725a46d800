//! Application state (Model in TEA pattern)

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use sift_core::TestRecord;

use crate::config::{InputMode, Settings};
use crate::key_sequence::KeySequence;
use crate::layout_cache::LayoutCache;
use crate::scroll_state::ScrollState;
use crate::search::SearchFilter;
use crate::store::TestStore;
use crate::summary::Summary;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Test view with navigation keys
    #[default]
    Normal,

    /// Search input mode - capturing text for the test filter
    SearchInput,
}

/// Runtime options, resolved from settings and command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Parse and colour log lines
    pub pretty: bool,
    /// Full-screen navigable view; otherwise print once at the end
    pub interactive: bool,
    /// Show cursor and scroll diagnostics in the header
    pub debug: bool,
    pub auto_toggle: bool,
    pub input_mode: InputMode,
    pub color: bool,
    pub frame_rate: u32,
    pub layout_rate: u32,
    pub scroll_margin: usize,
}

impl Options {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pretty: settings.ui.pretty_logs,
            interactive: true,
            debug: false,
            auto_toggle: settings.ui.auto_toggle,
            input_mode: settings.input.mode,
            color: settings.ui.color,
            frame_rate: settings.ui.frame_rate,
            layout_rate: settings.ui.layout_rate,
            scroll_margin: settings.ui.scroll_margin,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        hz_to_interval(self.frame_rate)
    }

    pub fn layout_interval(&self) -> Duration {
        hz_to_interval(self.layout_rate)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

fn hz_to_interval(hz: u32) -> Duration {
    Duration::from_secs(1) / hz.max(1)
}

/// Selected test (by list index) and log line within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub test: usize,
    pub log: usize,
}

/// Progress of the input stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IngestStatus {
    #[default]
    Streaming,
    Finished,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct IngestState {
    pub status: IngestStatus,
    /// Lines skipped because they were not test events
    pub rejected_lines: usize,
    pub last_rejection: Option<String>,
}

impl IngestState {
    pub fn is_done(&self) -> bool {
        self.status != IngestStatus::Streaming
    }

    /// One-line notice about skipped input lines, if there were any
    pub fn rejection_notice(&self) -> Option<String> {
        if self.rejected_lines == 0 {
            return None;
        }
        let plural = if self.rejected_lines == 1 { "" } else { "s" };
        let mut notice = format!("{} input line{} skipped", self.rejected_lines, plural);
        if let Some(last) = &self.last_rejection {
            notice.push_str(&format!(" (last: {last})"));
        }
        notice.push_str(". Is `go test` run with -json?");
        Some(notice)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Shared with the ingestion thread
    pub store: Arc<TestStore>,

    pub layout: LayoutCache,
    pub cursor: Cursor,
    pub search: SearchFilter,
    pub scroll: ScrollState,
    pub ui_mode: UiMode,

    /// Keep only the cursor test expanded
    pub auto_toggle: bool,
    pub show_help: bool,
    pub key_sequence: KeySequence,

    pub options: Options,
    pub ingest: IngestState,

    /// Advances on every spinner tick
    pub spinner_frame: usize,

    quitting: bool,
}

impl AppState {
    pub fn new(store: Arc<TestStore>, options: Options) -> Self {
        Self {
            store,
            layout: LayoutCache::new(options.pretty),
            cursor: Cursor::default(),
            search: SearchFilter::default(),
            scroll: ScrollState::new(),
            ui_mode: UiMode::Normal,
            auto_toggle: options.auto_toggle,
            show_help: false,
            key_sequence: KeySequence::new(),
            options,
            ingest: IngestState::default(),
            spinner_frame: 0,
            quitting: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// At least one test has arrived
    pub fn has_started(&self) -> bool {
        self.store.get_test_count() > 0
    }

    pub fn cursor_test(&self) -> Option<TestRecord> {
        self.store.get_test(self.cursor.test)
    }

    /// Virtual line of the cursor; `None` until the cursor test is laid out
    pub fn cursor_position(&self) -> Option<usize> {
        let test = self.cursor_test()?;
        self.layout.position(&test.reference, self.cursor.log)
    }

    /// Totals over all tests, regardless of the search filter
    pub fn summary(&self) -> Summary {
        Summary::from_store(&self.store, Local::now())
    }

    /// New size of the test view
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout.set_width(usize::from(width));
        self.scroll.visible_lines = usize::from(height);
        self.recalculate_layout();
    }

    /// Rebuild virtual positions from the store and re-clamp the scroll
    pub fn recalculate_layout(&mut self) {
        self.layout.recompute(&self.store, &self.search);
        self.scroll
            .update_content_size(self.layout.total_lines(), self.scroll.visible_lines);
    }
}
