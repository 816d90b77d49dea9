//! In-memory pagination
//!
//! Pure functions for slicing an already-fetched result set into fixed-size
//! pages. Pages are 1-indexed. A page outside the available range is not an
//! error: it simply has no items.

use serde::Serialize;

/// Number of records shown per page in both the list and gallery views
pub const PAGE_SIZE: usize = 15;

/// Pagination metadata attached to every projected page
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl PageInfo {
    pub fn new(current_page: usize, total_items: usize, page_size: usize) -> Self {
        Self {
            current_page,
            total_pages: total_pages(total_items, page_size),
            total_items,
            page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }
}

/// Number of pages needed to show `total_items`, i.e. `ceil(total_items / page_size)`
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Calculate the slice bounds for a given page
///
/// Returns `(start_index, end_index)` for slicing the items array, or `None`
/// when the page holds no items (page 0, or a page beyond the last one).
pub fn page_bounds(total_items: usize, page: usize, page_size: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }

    let start = (page - 1).checked_mul(page_size)?;
    if start >= total_items {
        return None;
    }

    let end = start.saturating_add(page_size).min(total_items);
    Some((start, end))
}

/// Slice `items` down to the requested page
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    match page_bounds(items.len(), page, page_size) {
        Some((start, end)) => &items[start..end],
        None => &[],
    }
}
