//! Layout Cache - virtual line positions of test rows and log lines.
//!
//! The logical document is every visible test row, each followed by its log
//! lines while expanded. A row is one line high; a log line takes
//! `ceil(estimated_width / width)` lines. Positions are recomputed on
//! resize, fold change, filter change and a low-frequency tick, never on a
//! plain redraw.

use std::collections::HashMap;

use sift_core::TestReference;
use tracing::trace;

use crate::log_line::estimated_width;
use crate::search::SearchFilter;
use crate::store::TestStore;

/// Per-test fold state and cached offsets
#[derive(Debug, Clone, Default)]
pub struct FoldState {
    pub expanded: bool,
    /// `line_offsets[i]` is the offset of log `i` from the first log line
    line_offsets: Vec<usize>,
    /// Lines taken by all laid out logs
    logs_height: usize,
    /// Virtual line of the test row; `None` while hidden or not laid out
    row_offset: Option<usize>,
}

impl FoldState {
    pub fn row_offset(&self) -> Option<usize> {
        self.row_offset
    }

    /// Number of log lines covered by the last recompute
    pub fn laid_out_logs(&self) -> usize {
        self.line_offsets.len()
    }

    /// Height of laid out log `index`
    pub fn log_height(&self, index: usize) -> usize {
        let Some(&start) = self.line_offsets.get(index) else {
            return 0;
        };
        let end = self
            .line_offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.logs_height);
        end - start
    }

    pub fn logs_height(&self) -> usize {
        if self.expanded {
            self.logs_height
        } else {
            0
        }
    }

    /// Row plus expanded logs
    pub fn block_height(&self) -> usize {
        1 + self.logs_height()
    }

    fn clear_offsets(&mut self) {
        self.line_offsets.clear();
        self.logs_height = 0;
    }
}

/// Lines needed for `width` columns of text; degenerate widths count as 1
pub fn line_count(text_width: usize, viewport_width: usize) -> usize {
    text_width.div_ceil(viewport_width.max(1)).max(1)
}

#[derive(Debug)]
pub struct LayoutCache {
    width: usize,
    pretty: bool,
    folds: HashMap<TestReference, FoldState>,
    total_lines: usize,
}

impl LayoutCache {
    pub fn new(pretty: bool) -> Self {
        Self {
            width: 1,
            pretty,
            folds: HashMap::new(),
            total_lines: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Change the render width. Cached offsets are dropped (the fold states
    /// themselves survive) and rebuilt by the next [`recompute`].
    ///
    /// [`recompute`]: LayoutCache::recompute
    pub fn set_width(&mut self, width: usize) -> bool {
        let width = width.max(1);
        if width == self.width {
            return false;
        }
        self.width = width;
        for fold in self.folds.values_mut() {
            fold.clear_offsets();
        }
        true
    }

    pub fn fold(&self, reference: &TestReference) -> Option<&FoldState> {
        self.folds.get(reference)
    }

    pub fn is_expanded(&self, reference: &TestReference) -> bool {
        self.folds.get(reference).is_some_and(|f| f.expanded)
    }

    /// Set a test's expansion, creating its fold state on first use.
    /// Returns true if anything changed.
    pub fn set_expanded(&mut self, reference: &TestReference, expanded: bool) -> bool {
        let fold = self.folds.entry(reference.clone()).or_default();
        let changed = fold.expanded != expanded;
        fold.expanded = expanded;
        changed
    }

    /// Total virtual lines in the document
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Rebuild row offsets for visible tests and line offsets for expanded
    /// ones. Collapsed tests never touch their log buffer.
    pub fn recompute(&mut self, store: &TestStore, filter: &SearchFilter) {
        let mut position = 0;
        let mut walked_logs = 0;

        for test in store.tests() {
            let fold = self.folds.entry(test.reference.clone()).or_default();

            if !filter.is_visible(&test.reference) {
                fold.row_offset = None;
                continue;
            }

            fold.row_offset = Some(position);
            position += 1;

            if !fold.expanded {
                fold.clear_offsets();
                continue;
            }

            let (width, pretty) = (self.width, self.pretty);
            store.with_logs(&test.reference, |logs| {
                fold.line_offsets.clear();
                let mut height = 0;
                for entry in logs {
                    fold.line_offsets.push(height);
                    height += line_count(estimated_width(entry, pretty), width);
                }
                fold.logs_height = height;
                walked_logs += logs.len();
            });
            position += fold.logs_height;
        }

        self.total_lines = position;
        trace!(
            "layout recomputed: {} lines, {} logs walked at width {}",
            position,
            walked_logs,
            self.width
        );
    }

    /// Virtual line of log `log` of a test, or of the test row itself while
    /// it is collapsed or has no logs yet.
    ///
    /// `None` until the test has been laid out, or while it is filtered out.
    pub fn position(&self, reference: &TestReference, log: usize) -> Option<usize> {
        let fold = self.folds.get(reference)?;
        let row = fold.row_offset?;
        if !fold.expanded || fold.line_offsets.is_empty() {
            return Some(row);
        }
        let within = fold
            .line_offsets
            .get(log)
            .copied()
            .unwrap_or(fold.logs_height.saturating_sub(1));
        Some(row + 1 + within)
    }
}
