//! Fixed-size page slicing with first/prev/next/last navigation.
//!
//! Pages are 1-based. Navigation never errors: moves past either end are
//! no-ops and slicing an out-of-range page yields an empty slice.

/// Rows shown per transactions page
pub const ITEMS_PER_PAGE: usize = 8;

/// Number of pages needed for `item_count` items (0 when there are no items)
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Page count as shown to the user, never below 1
pub fn display_total_pages(item_count: usize, page_size: usize) -> usize {
    total_pages(item_count, page_size).max(1)
}

/// Slice of `items` on 1-based `page_number`
///
/// Page 0 is treated as page 1. Out-of-range pages give an empty slice.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current position within a paged list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start on a given page (clamped to at least 1)
    pub fn at_page(page_size: usize, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..Self::new(page_size)
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        total_pages(item_count, self.page_size)
    }

    pub fn display_total_pages(&self, item_count: usize) -> usize {
        display_total_pages(item_count, self.page_size)
    }

    /// Items on the current page
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.current_page, self.page_size)
    }

    /// Absolute index of the first row on the current page
    pub fn start_index(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.page_size)
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self, item_count: usize) -> bool {
        self.current_page < self.total_pages(item_count)
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, item_count: usize) {
        if self.can_next(item_count) {
            self.current_page = (self.current_page + 1).min(self.total_pages(item_count));
        }
    }

    pub fn last(&mut self, item_count: usize) {
        self.current_page = self.display_total_pages(item_count);
    }

    /// Pull the current page back into `[1, total_pages]` after the item set changed
    pub fn clamp(&mut self, item_count: usize) {
        self.current_page = self
            .current_page
            .clamp(1, self.display_total_pages(item_count));
    }

    /// "Page X of Y"
    pub fn label(&self, item_count: usize) -> String {
        format!(
            "Page {} of {}",
            self.current_page,
            self.display_total_pages(item_count)
        )
    }
}
