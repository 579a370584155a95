//! Page-window derivation for the collection view.
//!
//! Pages are 1-indexed. Out-of-range requests are clamped into the valid
//! range rather than rejected, matching a UI whose prev/next controls are
//! disabled at the edges. All functions here are total.

/// Products shown per collection page.
pub const PAGE_SIZE: usize = 12;

/// The visible slice of a filtered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// The page actually shown after clamping, 1-indexed.
    pub page: usize,
    /// Total pages; at least 1 even for an empty result list.
    pub total_pages: usize,
    /// Start index into the result list, inclusive.
    pub start: usize,
    /// End index, exclusive.
    pub end: usize,
}

impl PageWindow {
    /// Returns `true` if a previous page exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a further page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Computes the window for `requested` over `total_items` items.
///
/// `requested` is clamped into `[1, total_pages]`, so `0` shows page 1 and a
/// page past the end shows the last page. A `page_size` of `0` is treated
/// as `1`.
#[must_use]
pub fn page_window(total_items: usize, page_size: usize, requested: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = requested.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    PageWindow {
        page,
        total_pages,
        start,
        end,
    }
}

/// Returns the visible slice of `items` for the requested page.
#[must_use]
pub fn page_slice<T>(items: &[T], page_size: usize, requested: usize) -> &[T] {
    let window = page_window(items.len(), page_size, requested);
    &items[window.start..window.end]
}
