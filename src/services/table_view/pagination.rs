use std::ops::Range;

/// Default number of page buttons shown by the pager
pub const PAGE_WINDOW: usize = 3;

/// Current page of the schedule table.
///
/// Owned by the view, so it survives re-syncs; every method that depends on
/// the data takes the current row count instead of caching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl PaginationState {
    /// A zero page size is treated as one row per page
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size)
    }

    /// Page index actually shown once `total_rows` is known
    pub fn effective_index(&self, total_rows: usize) -> usize {
        self.page_index.min(self.page_count(total_rows).saturating_sub(1))
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, total_rows: usize) -> bool {
        self.page_index + 1 < self.page_count(total_rows)
    }

    pub fn next_page(&mut self, total_rows: usize) -> bool {
        if !self.can_next_page(total_rows) {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Jump to a page, clamped to the last page
    pub fn set_page_index(&mut self, index: usize, total_rows: usize) {
        self.page_index = index.min(self.page_count(total_rows).saturating_sub(1));
    }

    /// Change the page size, keeping the current top row on screen
    pub fn set_page_size(&mut self, page_size: usize, total_rows: usize) {
        let top_row = self.page_index * self.page_size;
        self.page_size = page_size.max(1);
        self.set_page_index(top_row / self.page_size, total_rows);
    }

    /// Row indices of the current page
    pub fn row_range(&self, total_rows: usize) -> Range<usize> {
        let start = (self.effective_index(total_rows) * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }

    /// 1-based page numbers for the pager buttons, at most `width` of them.
    ///
    /// The window starts at the current page and slides back so the last
    /// pages always fill it.
    pub fn page_window(&self, total_rows: usize, width: usize) -> Vec<usize> {
        let total_pages = self.page_count(total_rows);
        let current = self.effective_index(total_rows);
        let start = if total_pages <= width {
            0
        } else {
            current.min(total_pages - width)
        };
        let end = (start + width).min(total_pages);
        (start + 1..=end).collect()
    }

    /// `"x - y of total"` for the rows on screen
    pub fn row_range_label(&self, total_rows: usize) -> String {
        let range = self.row_range(total_rows);
        if range.is_empty() {
            return format!("0 - 0 of {}", total_rows);
        }
        format!("{} - {} of {}", range.start + 1, range.end, total_rows)
    }
}
