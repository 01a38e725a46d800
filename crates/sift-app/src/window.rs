//! Viewport Window - materializes only the items inside the visible band.
//!
//! The caller walks the logical document in order, pushing each item with
//! its height and a closure that produces its content. The closure runs only
//! when the item's span intersects `[offset, offset + height)`, so the cost
//! of a frame follows the viewport height rather than the document size.

/// A materialized item and where it starts in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowItem<T> {
    pub start: usize,
    pub height: usize,
    pub content: T,
}

impl<T> WindowItem<T> {
    /// Lines of this item hidden above the window
    pub fn clipped_above(&self, offset: usize) -> usize {
        offset.saturating_sub(self.start).min(self.height)
    }
}

#[derive(Debug)]
pub struct VirtualWindow<T> {
    offset: usize,
    /// `None` for the unbounded inline mode
    height: Option<usize>,
    position: usize,
    items: Vec<WindowItem<T>>,
}

impl<T> VirtualWindow<T> {
    pub fn new(offset: usize, height: usize) -> Self {
        Self {
            offset,
            height: Some(height),
            position: 0,
            items: Vec::new(),
        }
    }

    /// Window that materializes everything, for write-once output
    pub fn unbounded() -> Self {
        Self {
            offset: 0,
            height: None,
            position: 0,
            items: Vec::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Running virtual position: the start of the next pushed item
    pub fn position(&self) -> usize {
        self.position
    }

    /// Would an item of `height` pushed now be materialized?
    pub fn intersects(&self, height: usize) -> bool {
        if height == 0 {
            return false;
        }
        let Some(window) = self.height else {
            return true;
        };
        self.position < self.offset + window && self.position + height > self.offset
    }

    /// True once nothing pushed from here on can be visible
    pub fn is_past_end(&self) -> bool {
        self.height
            .is_some_and(|window| self.position >= self.offset + window)
    }

    /// Account for an item, materializing it only if it is visible.
    /// Returns true if `render` ran.
    pub fn push(&mut self, height: usize, render: impl FnOnce() -> T) -> bool {
        let visible = self.intersects(height);
        if visible {
            self.items.push(WindowItem {
                start: self.position,
                height,
                content: render(),
            });
        }
        self.position += height;
        visible
    }

    /// Account for lines without materializing anything
    pub fn advance(&mut self, height: usize) {
        self.position += height;
    }

    pub fn materialized(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[WindowItem<T>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<WindowItem<T>> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_intersecting_items_materialize() {
        let mut window = VirtualWindow::new(3, 4);
        for i in 0..10 {
            window.push(1, || i);
        }
        let contents: Vec<_> = window.items().iter().map(|item| item.content).collect();
        assert_eq!(contents, vec![3, 4, 5, 6]);
        assert_eq!(window.position(), 10);
    }

    #[test]
    fn test_tall_item_straddling_the_top_is_kept() {
        let mut window = VirtualWindow::new(5, 3);
        window.push(4, || "above");
        window.push(3, || "straddles");
        window.push(1, || "inside");
        window.push(1, || "below");

        let items = window.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].content, "straddles");
        assert_eq!(items[0].start, 4);
        assert_eq!(items[0].clipped_above(5), 1);
        assert_eq!(items[1].content, "inside");
    }

    #[test]
    fn test_unbounded_materializes_everything() {
        let mut window = VirtualWindow::unbounded();
        for i in 0..100 {
            window.push(2, || i);
        }
        assert_eq!(window.materialized(), 100);
        assert!(!window.is_past_end());
    }

    #[test]
    fn test_advance_skips_without_rendering() {
        let mut window = VirtualWindow::<u8>::new(0, 2);
        window.advance(5);
        assert!(window.is_past_end());
        assert!(!window.push(1, || unreachable!()));
        assert_eq!(window.position(), 6);
    }

    #[test]
    fn test_zero_height_never_renders() {
        let mut window = VirtualWindow::<u8>::new(0, 10);
        assert!(!window.push(0, || unreachable!()));
    }

    #[test]
    fn test_render_cost_bounded_by_window_height() {
        let height = 30;
        let max_item_height = 4;
        let mut rendered = 0;
        let mut window = VirtualWindow::new(50_000, height);
        for i in 0..100_000usize {
            window.push(i % max_item_height + 1, || rendered += 1);
        }
        assert!(rendered > 0);
        assert!(rendered <= height + max_item_height);
        assert_eq!(window.position(), (0..100_000usize).map(|i| i % 4 + 1).sum::<usize>());
    }
}
