//! Client-side pagination window.
//!
//! The window is a prefix length over the filtered results. It starts at
//! [`INITIAL_PAGE_SIZE`] and only ever grows, by [`PAGE_INCREMENT`] per
//! "load more". It is not reset when the query or region filter changes.

/// Number of cards shown before any "load more".
pub const INITIAL_PAGE_SIZE: usize = 8;

/// Cards added by each "load more".
pub const PAGE_INCREMENT: usize = 8;

/// Growing prefix window over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    size: usize,
}

impl PageWindow {
    /// Window of [`INITIAL_PAGE_SIZE`] entries.
    pub fn new() -> Self {
        Self {
            size: INITIAL_PAGE_SIZE,
        }
    }

    /// Current window length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Grow the window by [`PAGE_INCREMENT`].
    ///
    /// No upper bound is checked against the result count; a window larger
    /// than the list just shows the whole list.
    pub fn load_more(&mut self) {
        self.size = self.size.saturating_add(PAGE_INCREMENT);
    }

    /// The first `size` entries of `items`.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.size.min(items.len())]
    }

    /// Whether entries beyond the window exist in a list of `total` items.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.size
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_eight() {
        assert_eq!(PageWindow::new().size(), 8);
        assert_eq!(PageWindow::default(), PageWindow::new());
    }

    #[test]
    fn load_more_adds_eight() {
        let mut window = PageWindow::new();
        window.load_more();
        assert_eq!(window.size(), 16);
        window.load_more();
        assert_eq!(window.size(), 24);
    }

    #[test]
    fn apply_truncates_to_window() {
        let items: Vec<u32> = (0..20).collect();
        let window = PageWindow::new();
        assert_eq!(window.apply(&items), &items[..8]);
    }

    #[test]
    fn apply_returns_whole_list_when_window_exceeds_it() {
        let items = vec![1, 2, 3];
        let mut window = PageWindow::new();
        window.load_more();
        assert_eq!(window.apply(&items), &[1, 2, 3]);
    }

    #[test]
    fn apply_on_empty_list_is_empty() {
        let items: Vec<u8> = Vec::new();
        assert!(PageWindow::new().apply(&items).is_empty());
    }

    #[test]
    fn has_more_compares_against_window() {
        let window = PageWindow::new();
        assert!(!window.has_more(8));
        assert!(window.has_more(9));
        assert!(!window.has_more(0));
    }
}
