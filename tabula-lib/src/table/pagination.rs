//! Pagination state and control policy.

/// Page size used when none is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page position.
///
/// `page_index` is zero-based; one-based page numbers only appear at the
/// boundary ([`PageRequest`](super::PageRequest), query strings, labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page, always > 0.
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Creates a pagination state; a zero page size falls back to the default.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Builds state from a one-based page number and a page size, either of
    /// which may be missing.
    pub fn from_external(page: Option<usize>, page_size: Option<usize>, default_size: usize) -> Self {
        let page_index = page.unwrap_or(1).saturating_sub(1);
        Self::new(page_index, page_size.unwrap_or(default_size))
    }

    /// One-based page number.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Derived state of the pagination controls.
///
/// First/previous are disabled exactly on the first page and next/last
/// exactly on the last one. A page count of zero is treated as a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    /// Zero-based current page.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of pages as computed (may be zero).
    pub page_count: usize,
    /// Displayed total row count.
    pub total: usize,
    /// Whether the first/previous controls are enabled.
    pub can_previous: bool,
    /// Whether the next/last controls are enabled.
    pub can_next: bool,
    /// Target page index of the "last" control.
    pub last_page_index: usize,
    /// One-based index of the first visible row, 0 when nothing is visible.
    pub range_start: usize,
    /// One-based index of the last visible row, 0 when nothing is visible.
    pub range_end: usize,
}

impl PageControls {
    /// Computes control state for a pagination state, a page count, the
    /// displayed total and the number of rows actually visible.
    pub fn new(state: PaginationState, page_count: usize, total: usize, visible: usize) -> Self {
        let last_page_index = page_count.max(1) - 1;
        let (range_start, range_end) = if visible == 0 {
            (0, 0)
        } else {
            (state.offset() + 1, state.offset() + visible)
        };
        Self {
            page_index: state.page_index,
            page_size: state.page_size,
            page_count,
            total,
            can_previous: state.page_index > 0,
            can_next: state.page_index < last_page_index,
            last_page_index,
            range_start,
            range_end,
        }
    }

    /// Page count as displayed ("Page X of Y"), never zero.
    pub fn display_page_count(&self) -> usize {
        self.page_count.max(1)
    }
}
