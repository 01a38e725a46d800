//! Scroll position of the test view

/// Vertical scroll state of the test view
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// First virtual line shown
    pub offset: usize,
    /// Total virtual lines (set on layout)
    pub total_lines: usize,
    /// Visible lines (set on resize)
    pub visible_lines: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.visible_lines / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.visible_lines / 2).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.saturating_sub(2).max(1));
    }

    /// Update with new content size, keeping the offset in range
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Minimal scroll that keeps `position` at least `margin` lines inside
    /// the viewport. The margin shrinks on viewports too small to honour it.
    pub fn follow(&mut self, position: usize, margin: usize) {
        let margin = margin.min(self.visible_lines.saturating_sub(1) / 2);

        if position < self.offset + margin {
            self.offset = position.saturating_sub(margin);
        } else if position + margin >= self.offset + self.visible_lines {
            self.offset = (position + margin + 1).saturating_sub(self.visible_lines);
        }
        self.offset = self.offset.min(self.max_offset());
    }
}
