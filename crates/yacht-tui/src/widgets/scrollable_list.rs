//! Generic scrollable list with a selection cursor.
//!
//! Used for the location suggestions and the result cards. Items are
//! replaced wholesale when the underlying data changes; the cursor is kept
//! in range.

pub struct ScrollableList<T> {
    items: Vec<T>,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl<T> ScrollableList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        if self.scroll_offset > self.selected {
            self.scroll_offset = self.selected;
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn select_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn select_down(&mut self, n: usize) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + n).min(self.items.len() - 1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Returns (index, &item) pairs visible in `height` rows.
    /// Call `ensure_visible` first to update `scroll_offset`.
    pub fn visible_items(&self, height: usize) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height)
    }

    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Select the item drawn at `row` (relative to the list's first row).
    /// Returns true if there is an item there.
    pub fn handle_click(&mut self, row: usize) -> bool {
        let target = self.scroll_offset + row;
        if target < self.items.len() {
            self.selected = target;
            return true;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ScrollableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> ScrollableList<usize> {
        let mut l = ScrollableList::new();
        l.set_items((0..n).collect());
        l
    }

    #[test]
    fn selection_is_clamped() {
        let mut l = list(3);
        l.select_down(10);
        assert_eq!(l.selected, 2);
        l.select_up(10);
        assert_eq!(l.selected, 0);
    }

    #[test]
    fn shrinking_items_keeps_cursor_in_range() {
        let mut l = list(10);
        l.select_last();
        l.set_items(vec![1, 2]);
        assert_eq!(l.selected_item(), Some(&2));
    }

    #[test]
    fn ensure_visible_scrolls_window() {
        let mut l = list(20);
        l.select_down(7);
        l.ensure_visible(5);
        assert_eq!(l.scroll_offset, 3);
        let first = l.visible_items(5).next().map(|(i, _)| i);
        assert_eq!(first, Some(3));
        assert!(l.handle_click(1));
        assert_eq!(l.selected, 4);
        assert!(!l.handle_click(40));
    }
}
