//! Page-number pagination.
//!
//! Splits a list of `total_items` into fixed-size pages addressed by 1-based
//! page numbers. Out-of-range page requests are clamped rather than rejected,
//! so a stale page number after re-filtering still lands on a valid page.

use std::ops::Range;

/// Information about one page of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-indexed, clamped).
    pub current_page: usize,
    /// Total number of pages. Zero when the list is empty.
    pub total_pages: usize,
    /// Indices of the items on this page.
    pub range: Range<usize>,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageInfo {
    /// Page info for an empty list.
    pub fn empty() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            range: 0..0,
            has_prev: false,
            has_next: false,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Pagination over a list of known length.
///
/// Pure data: knows nothing about what the items are.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    pub total_items: usize,
    pub per_page: usize,
}

impl Pager {
    /// `per_page == 0` means "everything on one page".
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page,
        }
    }

    fn effective_per_page(&self) -> usize {
        if self.per_page == 0 {
            self.total_items.max(1)
        } else {
            self.per_page
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.effective_per_page())
    }

    /// Get the page with the given number, clamped to `[1, total_pages]`.
    pub fn page(&self, page: usize) -> PageInfo {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return PageInfo::empty();
        }

        let per_page = self.effective_per_page();
        let current_page = page.clamp(1, total_pages);
        let start = (current_page - 1) * per_page;
        let end = (start + per_page).min(self.total_items);

        PageInfo {
            current_page,
            total_pages,
            range: start..end,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}
