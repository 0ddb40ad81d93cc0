//! Pagination windowing over the filtered, sorted result

use serde::{Deserialize, Serialize};

/// Page size and 1-indexed current page. Both are kept at least 1 on
/// construction; the page is additionally clamped against the filtered
/// count when the view is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl PageState {
    /// Cards shown per listing page in the original site.
    pub const DEFAULT_PAGE_SIZE: usize = 6;

    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: current_page.max(1),
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self::new(self.page_size, page)
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(page_size, self.current_page)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE, 1)
    }
}

/// Number of pages for a result of `count` items. An empty result is one
/// page of zero items, never zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Resolve a requested page against the actual count: always within
/// `[1, total_pages]`, so a stale page number can never point past the
/// end of the result.
pub fn clamp_page(requested: usize, count: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(count, page_size))
}

/// The 1-indexed window of `items` for the given page.
pub fn window<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = clamp_page(page, items.len(), page_size);
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
