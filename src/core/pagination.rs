//! Page slicing and page navigation

use serde::Serialize;
use std::ops::Range;

/// Number of pages needed for `item_count` items; never less than 1
pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    item_count.div_ceil(items_per_page.max(1)).max(1)
}

/// Index range of `page` (1-based) within a list of `item_count` items
///
/// Out-of-range pages, including page 0, give an empty range.
pub fn page_bounds(item_count: usize, items_per_page: usize, page: usize) -> Range<usize> {
    let per_page = items_per_page.max(1);
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= item_count {
        return item_count..item_count;
    }
    start..start.saturating_add(per_page).min(item_count)
}

/// One page of a list
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub page_items: &'a [T],
    pub total_pages: usize,
}

/// Slice `items` into the requested page
pub fn paginate<T>(items: &[T], items_per_page: usize, current_page: usize) -> Page<'_, T> {
    Page {
        page_items: &items[page_bounds(items.len(), items_per_page, current_page)],
        total_pages: total_pages(items.len(), items_per_page),
    }
}

/// Current page and page size, as carried in the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

/// Page navigation over a list whose length may change
///
/// Keeps `1 <= current_page <= total_pages` at all times. Requests for a page
/// outside that range are ignored rather than rejected, so a tampered URL
/// can never blank the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    item_count: usize,
    total_pages: usize,
}

impl Paginator {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            item_count: 0,
            total_pages: 1,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.set_item_count(item_count);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current_page,
            items_per_page: self.items_per_page,
        }
    }

    /// Recompute the page count for a new list length, clamping the page
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.total_pages = total_pages(item_count, self.items_per_page);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Change the page size and go back to the first page
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.total_pages = total_pages(self.item_count, self.items_per_page);
        self.reset_to_first_page();
    }

    /// Jump to page `n`. Returns `false` (and changes nothing) if out of range.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if (1..=self.total_pages).contains(&n) {
            self.current_page = n;
            true
        } else {
            false
        }
    }

    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Index range of the current page
    pub fn bounds(&self) -> Range<usize> {
        page_bounds(self.item_count, self.items_per_page, self.current_page)
    }

    /// The current page of `items`
    ///
    /// Bounds are computed against `items.len()`, so a list that disagrees
    /// with the recorded item count yields a short or empty page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[page_bounds(items.len(), self.items_per_page, self.current_page)]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(10)
    }
}
