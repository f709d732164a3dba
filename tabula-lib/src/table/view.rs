//! The table view and its reconciliation rules.

use std::cmp::Ordering;
use std::fmt;

use crate::model::{ColumnSet, Row, compare_values};

use super::filter::matches_filter;
use super::listener::{DataRequest, DataRequests, PageRequest};
use super::pagination::{DEFAULT_PAGE_SIZE, PageControls, PaginationState, page_count};
use super::sort::{Direction, SortState};

/// Operating mode, fixed for the lifetime of a view.
pub enum Mode {
    /// The view owns the full record set and filters, sorts and pages it.
    Local {
        /// Every record, unfiltered and unsorted.
        records: Vec<Row>,
        /// Global filter text as entered.
        filter: String,
    },
    /// The view shows one externally computed page.
    Delegated {
        /// Rows of the current page, in display order.
        rows: Vec<Row>,
        /// Total rows across all pages, as reported by the record source.
        total_rows: usize,
        /// Where page and sort intent is sent.
        requests: Box<dyn DataRequests>,
    },
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { records, filter } => f
                .debug_struct("Local")
                .field("records", &records.len())
                .field("filter", filter)
                .finish(),
            Self::Delegated {
                rows, total_rows, ..
            } => f
                .debug_struct("Delegated")
                .field("rows", &rows.len())
                .field("total_rows", total_rows)
                .finish_non_exhaustive(),
        }
    }
}

/// A row as it appears on the current page.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Zero-based position within the page.
    pub position: usize,
    /// One-based row number across all pages (shown in the index column).
    pub number: usize,
    /// The record.
    pub row: &'a Row,
}

/// Visible rows together with the pagination controls they were cut by.
#[derive(Debug, Clone)]
pub struct CurrentPage<'a> {
    pub rows: Vec<VisibleRow<'a>>,
    pub controls: PageControls,
}

/// Header cell state for one descriptor column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    /// Column key.
    pub key: String,
    /// Header text.
    pub header: String,
    /// Whether the column accepts sort toggles.
    pub sortable: bool,
    /// Current sort direction, if this is the sorted column.
    pub direction: Option<Direction>,
}

/// A sortable, paginated, filterable table.
///
/// All state changes go through the `set_*` and `toggle_sort` methods. In
/// local mode they only update state and the visible slice is recomputed on
/// demand. In delegated mode they also notify the record source, which is
/// expected to answer later with [`set_page_data`](Self::set_page_data).
#[derive(Debug)]
pub struct TabularDataView {
    columns: ColumnSet,
    mode: Mode,
    sort: SortState,
    pagination: PaginationState,
}

impl TabularDataView {
    /// Creates a local-mode view over an in-memory record set.
    pub fn local(columns: ColumnSet, records: Vec<Row>) -> Self {
        Self {
            columns,
            mode: Mode::Local {
                records,
                filter: String::new(),
            },
            sort: SortState::none(),
            pagination: PaginationState::default(),
        }
    }

    /// Creates a delegated-mode view.
    ///
    /// `page` is one-based; missing `page`/`perpage` default to 1 and
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn delegated(
        columns: ColumnSet,
        total_rows: usize,
        page: Option<usize>,
        perpage: Option<usize>,
        requests: impl DataRequests + 'static,
    ) -> Self {
        Self {
            columns,
            mode: Mode::Delegated {
                rows: Vec::new(),
                total_rows,
                requests: Box::new(requests),
            },
            sort: SortState::none(),
            pagination: PaginationState::from_external(page, perpage, DEFAULT_PAGE_SIZE),
        }
    }

    /// Sets the initial page size, builder style. Does not notify.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pagination = PaginationState::new(self.pagination.page_index, page_size);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Column descriptors.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Operating mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns `true` in delegated mode.
    pub fn is_delegated(&self) -> bool {
        matches!(self.mode, Mode::Delegated { .. })
    }

    /// Current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current pagination state.
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Global filter text (always empty in delegated mode).
    pub fn filter(&self) -> &str {
        match &self.mode {
            Mode::Local { filter, .. } => filter,
            Mode::Delegated { .. } => "",
        }
    }

    // -------------------------------------------------------------------------
    // Reconciliation
    // -------------------------------------------------------------------------

    /// Replaces the sort state.
    ///
    /// Entries naming unknown or non-sortable columns are dropped. The state
    /// updates immediately so sort indicators follow the request. Delegated
    /// views then report the first entry as `"<key>:<dir>"` (or `""`); local
    /// views go back to the first page.
    pub fn set_sort(&mut self, requested: SortState) {
        let mut next = requested;
        let columns = &self.columns;
        next.retain(|entry| columns.is_sortable(&entry.key));
        self.sort = next;

        let spec = self.sort.spec();
        log::debug!("[table] sort -> {:?}", spec);

        match &mut self.mode {
            Mode::Local { .. } => self.pagination.page_index = 0,
            Mode::Delegated { requests, .. } => requests.on_sort_change(&spec),
        }
    }

    /// Advances a column through `unsorted -> asc -> desc -> unsorted`.
    ///
    /// Returns `false` (and changes nothing) for unknown or non-sortable
    /// columns.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if !self.columns.is_sortable(key) {
            log::debug!("[table] ignoring sort toggle on {:?}", key);
            return false;
        }
        let next = self.sort.toggled(key);
        self.set_sort(next);
        true
    }

    /// Replaces the pagination state.
    ///
    /// A page-size change always lands on the first page. Otherwise the page
    /// index is clamped to the last page. A zero page size is ignored.
    /// Delegated views report the result as a one-based [`PageRequest`].
    pub fn set_pagination(&mut self, requested: PaginationState) {
        if requested.page_size == 0 {
            log::warn!("[table] ignoring zero page size");
            return;
        }

        let mut next = requested;
        if next.page_size != self.pagination.page_size {
            next.page_index = 0;
        } else {
            let last = page_count(self.total(), next.page_size).max(1) - 1;
            next.page_index = next.page_index.min(last);
        }
        self.pagination = next;

        log::debug!(
            "[table] pagination -> page {} size {}",
            next.page_index,
            next.page_size
        );

        if let Mode::Delegated { requests, .. } = &mut self.mode {
            requests.on_paginate_change(PageRequest {
                page: next.page_number(),
                perpage: next.page_size,
            });
        }
    }

    /// Moves to a zero-based page index, keeping the page size.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.set_pagination(PaginationState {
            page_index,
            page_size: self.pagination.page_size,
        });
    }

    /// Changes the page size, which resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.set_pagination(PaginationState {
            page_index: self.pagination.page_index,
            page_size,
        });
    }

    /// Sets the global filter (local mode) and returns to the first page.
    ///
    /// Delegated views ignore this; searching is the record source's job.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        match &mut self.mode {
            Mode::Local { filter, .. } => {
                *filter = text.into();
                self.pagination.page_index = 0;
                log::debug!("[table] filter -> {:?}", filter);
            }
            Mode::Delegated { .. } => {
                log::warn!("[table] set_filter ignored in delegated mode");
            }
        }
    }

    /// Replaces the record set (local mode) and returns to the first page.
    pub fn set_records(&mut self, new_records: Vec<Row>) {
        match &mut self.mode {
            Mode::Local { records, .. } => {
                *records = new_records;
                self.pagination.page_index = 0;
                log::debug!("[table] {} records loaded", records.len());
            }
            Mode::Delegated { .. } => {
                log::warn!("[table] set_records ignored in delegated mode");
            }
        }
    }

    /// Replaces the current page and the reported total (delegated mode).
    pub fn set_page_data(&mut self, page_rows: Vec<Row>, total: usize) {
        match &mut self.mode {
            Mode::Delegated {
                rows, total_rows, ..
            } => {
                *rows = page_rows;
                *total_rows = total;
                log::debug!("[table] page data: {} rows of {}", rows.len(), total);
            }
            Mode::Local { .. } => {
                log::warn!("[table] set_page_data ignored in local mode");
            }
        }
    }

    /// Takes the notifications a queueing listener (`Vec<DataRequest>`) has
    /// collected. Always empty in local mode.
    pub fn take_requests(&mut self) -> Vec<DataRequest> {
        match &mut self.mode {
            Mode::Delegated { requests, .. } => requests.take_queued(),
            Mode::Local { .. } => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Rows matching the filter, sorted, across all pages.
    ///
    /// In delegated mode this is the current page as supplied.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        match &self.mode {
            Mode::Local { records, filter } => {
                let needle = filter.trim().to_lowercase();
                let mut rows: Vec<&Row> = records
                    .iter()
                    .filter(|row| matches_filter(row, &self.columns, &needle))
                    .collect();
                if let Some(entry) = self.sort.primary() {
                    rows.sort_by(|a, b| compare_rows(a, b, &entry.key, entry.direction));
                }
                rows
            }
            Mode::Delegated { rows, .. } => rows.iter().collect(),
        }
    }

    /// Displayed total: the external total in delegated mode, the number of
    /// rows matching the filter in local mode.
    pub fn total(&self) -> usize {
        match &self.mode {
            Mode::Local { records, filter } => {
                let needle = filter.trim().to_lowercase();
                records
                    .iter()
                    .filter(|row| matches_filter(row, &self.columns, &needle))
                    .count()
            }
            Mode::Delegated { total_rows, .. } => *total_rows,
        }
    }

    /// Number of pages for the displayed total.
    pub fn page_count(&self) -> usize {
        page_count(self.total(), self.pagination.page_size)
    }

    /// The current page and its control state, filtered and sorted once.
    pub fn current_page(&self) -> CurrentPage<'_> {
        let offset = self.pagination.offset();
        let page_size = self.pagination.page_size;
        let (total, rows): (usize, Vec<&Row>) = match &self.mode {
            Mode::Local { .. } => {
                let sorted = self.sorted_rows();
                let total = sorted.len();
                (total, sorted.into_iter().skip(offset).take(page_size).collect())
            }
            Mode::Delegated {
                rows, total_rows, ..
            } => (*total_rows, rows.iter().collect()),
        };

        let rows: Vec<VisibleRow<'_>> = rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| VisibleRow {
                position,
                number: offset + position + 1,
                row,
            })
            .collect();
        let controls = PageControls::new(
            self.pagination,
            page_count(total, page_size),
            total,
            rows.len(),
        );
        CurrentPage { rows, controls }
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        self.current_page().rows
    }

    /// Pagination control state for the current page.
    pub fn controls(&self) -> PageControls {
        self.current_page().controls
    }

    /// Header state for every descriptor column, in order.
    pub fn header(&self) -> Vec<HeaderState> {
        self.columns
            .iter()
            .map(|column| HeaderState {
                key: column.key.clone(),
                header: column.header.clone(),
                sortable: column.sortable,
                direction: self.sort.direction_of(&column.key),
            })
            .collect()
    }
}

/// Orders two rows by one column; missing and `null` values always sort last.
fn compare_rows(a: &Row, b: &Row, key: &str, direction: Direction) -> Ordering {
    let a = a.get(key).filter(|v| !v.is_null());
    let b = b.get(key).filter(|v| !v.is_null());
    match (a, b) {
        (Some(x), Some(y)) => {
            let ordering = compare_values(x, y);
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnDef;
    use serde_json::json;

    fn columns() -> ColumnSet {
        ColumnSet::new(vec![
            ColumnDef::new("name", "Name").sortable(),
            ColumnDef::new("revenue", "Revenue").sortable(),
            ColumnDef::new("actions", "Actions"),
        ])
        .unwrap()
    }

    fn names(view: &TabularDataView) -> Vec<String> {
        view.visible_rows()
            .iter()
            .map(|r| r.row.display("name"))
            .collect()
    }

    #[test]
    fn test_local_sort_nulls_last_both_directions() {
        let records = vec![
            Row::new().with("name", "b").with("revenue", 2),
            Row::new().with("name", "none"),
            Row::new().with("name", "a").with("revenue", 1),
            Row::new().with("name", "null").with("revenue", json!(null)),
        ];
        let mut view = TabularDataView::local(columns(), records);

        view.toggle_sort("revenue");
        assert_eq!(names(&view), ["a", "b", "none", "null"]);

        view.toggle_sort("revenue");
        assert_eq!(names(&view), ["b", "a", "none", "null"]);

        view.toggle_sort("revenue");
        assert_eq!(names(&view), ["b", "none", "a", "null"]);
    }

    #[test]
    fn test_non_sortable_column_is_ignored() {
        let mut view = TabularDataView::local(columns(), Vec::new());
        assert!(!view.toggle_sort("actions"));
        assert!(!view.toggle_sort("missing"));
        assert!(view.sort().is_empty());
    }

    #[test]
    fn test_set_sort_drops_unsortable_entries() {
        let mut view = TabularDataView::local(columns(), Vec::new());
        view.set_sort(SortState::by("actions", Direction::Asc).then("name", Direction::Desc));
        assert_eq!(view.sort().spec(), "name:desc");
    }

    #[test]
    fn test_local_page_index_is_clamped() {
        let records = (0..25).map(|i| Row::new().with("name", i)).collect();
        let mut view = TabularDataView::local(columns(), records);
        view.set_page_index(7);
        assert_eq!(view.pagination().page_index, 2);
        assert_eq!(view.visible_rows().len(), 5);
        assert_eq!(view.visible_rows()[0].number, 21);
    }

    #[test]
    fn test_local_filter_resets_page() {
        let records = (0..25).map(|i| Row::new().with("name", format!("row {i}"))).collect();
        let mut view = TabularDataView::local(columns(), records);
        view.set_page_index(2);
        view.set_filter("row 1");
        assert_eq!(view.pagination().page_index, 0);
        // "row 1" and "row 10".."row 19"
        assert_eq!(view.total(), 11);
        assert_eq!(view.page_count(), 2);
    }

    #[test]
    fn test_delegated_ignores_local_operations() {
        let mut view = TabularDataView::delegated(columns(), 5, None, None, Vec::<DataRequest>::new());
        view.set_filter("abc");
        assert_eq!(view.filter(), "");
        view.set_records(vec![Row::new()]);
        assert!(view.visible_rows().is_empty());
        assert!(view.take_requests().is_empty());
    }

    #[test]
    fn test_local_view_has_no_queued_requests() {
        let mut view = TabularDataView::local(columns(), vec![Row::new()]);
        view.set_page_size(20);
        view.toggle_sort("name");
        assert!(view.take_requests().is_empty());
    }

    #[test]
    fn test_queued_requests_can_be_polled() {
        let mut view = TabularDataView::delegated(columns(), 95, Some(3), Some(10), Vec::<DataRequest>::new());
        view.set_page_size(20);
        view.toggle_sort("revenue");
        assert_eq!(
            view.take_requests(),
            vec![
                DataRequest::Paginate(PageRequest { page: 1, perpage: 20 }),
                DataRequest::Sort("revenue:asc".into()),
            ]
        );
        assert!(view.take_requests().is_empty());
    }

    #[test]
    fn test_current_page_matches_parts() {
        let records = (0..23).map(|i| Row::new().with("name", format!("n{i:02}"))).collect();
        let mut view = TabularDataView::local(columns(), records);
        view.toggle_sort("name");
        view.set_page_index(2);

        let page = view.current_page();
        assert_eq!(page.controls, view.controls());
        assert_eq!(page.controls.total, 23);
        assert_eq!(page.controls.page_count, 3);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.rows[0].number, 21);
        assert_eq!(page.rows[0].row.display("name"), "n20");
    }

    #[test]
    fn test_zero_page_size_ignored() {
        let mut view = TabularDataView::local(columns(), Vec::new());
        view.set_page_size(0);
        assert_eq!(view.pagination().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_header_reflects_sort() {
        let mut view = TabularDataView::local(columns(), Vec::new());
        view.toggle_sort("name");
        let header = view.header();
        assert_eq!(header[0].direction, Some(Direction::Asc));
        assert_eq!(header[1].direction, None);
        assert!(!header[2].sortable);
    }
}
