//! Pagination Cursor
//!
//! 1-based page cursor plus the derived numbers the pagination bar shows.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page sizes offered in the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [6, 12, 24, 48];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Derived pagination numbers for a given item count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    /// 1-based index of the first item on the page (0 when empty)
    pub start_index: usize,
    /// 1-based index of the last item on the page (0 when empty)
    pub end_index: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PageInfo {
    pub fn has_items(&self) -> bool {
        self.total_items > 0
    }

    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

impl Pagination {
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page.max(1))
    }

    /// Slice of `items` on the current page; empty past the last page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let per_page = self.items_per_page.max(1);
        let start = (self.current_page.max(1) - 1).saturating_mul(per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + per_page).min(items.len());
        &items[start..end]
    }

    pub fn info(&self, total_items: usize) -> PageInfo {
        let total_pages = self.total_pages(total_items);
        let on_page = self.slice_len(total_items);
        let start = (self.current_page.max(1) - 1).saturating_mul(self.items_per_page.max(1));
        PageInfo {
            current_page: self.current_page,
            total_pages,
            items_per_page: self.items_per_page,
            total_items,
            start_index: if on_page == 0 { 0 } else { start + 1 },
            end_index: if on_page == 0 { 0 } else { start + on_page },
            can_go_previous: self.current_page > 1,
            can_go_next: self.current_page < total_pages,
        }
    }

    /// Window of at most `max_visible` page numbers around the current page
    pub fn page_numbers(&self, total_items: usize, max_visible: usize) -> Vec<usize> {
        let total_pages = self.total_pages(total_items);
        let max_visible = max_visible.max(1);
        if total_pages <= max_visible {
            return (1..=total_pages).collect();
        }
        let half = max_visible / 2;
        let current = self.current_page.min(total_pages);
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(total_pages);
        if end == total_pages {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
        (start..=end).collect()
    }

    fn slice_len(&self, total_items: usize) -> usize {
        let per_page = self.items_per_page.max(1);
        let start = (self.current_page.max(1) - 1).saturating_mul(per_page);
        total_items.saturating_sub(start).min(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slice_never_exceeds_page_size() {
        let items: Vec<u32> = (1..=25).collect();
        for per_page in 1..=30 {
            for page in 1..=30 {
                let p = Pagination::new(page, per_page);
                assert!(p.slice(&items).len() <= per_page);
            }
        }
    }

    #[test]
    fn test_slice_last_and_out_of_range_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(Pagination::new(3, 12).slice(&items), &[25]);
        assert!(Pagination::new(4, 12).slice(&items).is_empty());
    }

    #[test]
    fn test_info() {
        let info = Pagination::new(2, 10).info(25);
        assert_eq!(info.total_pages, 3);
        assert_eq!((info.start_index, info.end_index), (11, 20));
        assert!(info.can_go_previous && info.can_go_next);
        assert!(info.has_pagination());

        let empty = Pagination::default().info(0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!((empty.start_index, empty.end_index), (0, 0));
        assert!(!empty.has_items());
        assert!(!empty.can_go_next);
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(Pagination::new(1, 10).page_numbers(30, 5), vec![1, 2, 3]);
        assert_eq!(Pagination::new(1, 10).page_numbers(100, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pagination::new(6, 10).page_numbers(100, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(Pagination::new(10, 10).page_numbers(100, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let far = Pagination::new(usize::MAX, 12);
        let info = far.info(40);
        assert_eq!(info.total_pages, 4);
        assert_eq!((info.start_index, info.end_index), (0, 0));
        assert!(!info.can_go_next);
        assert!(far.slice(&[1, 2, 3]).is_empty());
        assert_eq!(far.page_numbers(100, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_new_clamps_to_one() {
        assert_eq!(Pagination::new(0, 0), Pagination { current_page: 1, items_per_page: 1 });
    }
}
