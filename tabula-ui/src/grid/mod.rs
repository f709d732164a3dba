//! DataTable component - a sortable, paginated table over a
//! [`TabularDataView`].
//!
//! The DataTable provides:
//! - A synthetic `#` column with absolute row numbers
//! - Sort indicators on sortable headers (click to cycle)
//! - First / previous / next / last controls with edge disablement
//! - A page-size selector
//! - A full-width "No results found" row when the page is empty
//!
//! # Example
//!
//! ```
//! use tabula_ui::prelude::*;
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("email", "Email"),
//!     Column::actions("actions", "", |row: &Row| {
//!         Element::button("Edit").data("action", format!("edit:{}", row.display("email")))
//!     }),
//! ];
//! let rows = vec![Row::new().with("name", "Ada").with("email", "ada@example.com")];
//!
//! let mut table = DataTable::local(columns, rows, TableConfig::default()).unwrap();
//! table.on_header_click("name");
//! let element = table.render();
//! assert!(element.find("row-0").is_some());
//! ```

mod pagination;
mod render;

use std::fmt;
use std::sync::Arc;

use tabula_lib::TableConfig;
use tabula_lib::error::ColumnError;
use tabula_lib::model::{Alignment, ColumnDef, ColumnSet, Row};
use tabula_lib::query::QueryParams;
use tabula_lib::table::{DataRequests, PageControls, PageRequest, TabularDataView};

use crate::element::Element;

/// Renders one cell of a row.
pub type CellFn = Arc<dyn Fn(&Row) -> Element + Send + Sync>;

/// A column: its descriptor plus how to draw its cells.
#[derive(Clone)]
pub struct Column {
    pub def: ColumnDef,
    cell: Option<CellFn>,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("def", &self.def)
            .field("custom_cell", &self.cell.is_some())
            .finish()
    }
}

impl Column {
    /// A column that shows the row's value for `key` as text.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            def: ColumnDef::new(key, header),
            cell: None,
        }
    }

    /// A non-sortable column drawn entirely by `render`, e.g. row actions.
    pub fn actions(
        key: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&Row) -> Element + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, header).cell(render)
    }

    pub fn sortable(mut self) -> Self {
        self.def = self.def.sortable();
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.def = self.def.align(align);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.def = self.def.width(width);
        self
    }

    /// Replaces the default text cell.
    pub fn cell(mut self, render: impl Fn(&Row) -> Element + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.def.key
    }

    pub fn render_cell(&self, row: &Row) -> Element {
        match &self.cell {
            Some(render) => render(row),
            None => Element::text(row.display(&self.def.key)),
        }
    }
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        Self { def, cell: None }
    }
}

/// The four page navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    First,
    Previous,
    Next,
    Last,
}

impl PageButton {
    /// Page index the button leads to, or `None` while it is disabled.
    pub fn target(self, controls: &PageControls) -> Option<usize> {
        match self {
            Self::First if controls.can_previous => Some(0),
            Self::Previous if controls.can_previous => Some(controls.page_index - 1),
            Self::Next if controls.can_next => Some(controls.page_index + 1),
            Self::Last if controls.can_next => Some(controls.last_page_index),
            _ => None,
        }
    }
}

/// A table component: view state, column renderers and config.
#[derive(Debug)]
pub struct DataTable {
    view: TabularDataView,
    columns: Vec<Column>,
    config: TableConfig,
}

impl DataTable {
    /// A table that filters, sorts and pages `records` itself.
    pub fn local(
        columns: Vec<Column>,
        records: Vec<Row>,
        config: TableConfig,
    ) -> Result<Self, ColumnError> {
        let set = column_set(&columns)?;
        let view = TabularDataView::local(set, records).with_page_size(config.default_page_size);
        Ok(Self {
            view,
            columns,
            config,
        })
    }

    /// A table showing pages computed elsewhere.
    ///
    /// `page` is one-based; a missing `perpage` uses the configured default.
    pub fn delegated(
        columns: Vec<Column>,
        total_rows: usize,
        page: Option<usize>,
        perpage: Option<usize>,
        requests: impl DataRequests + 'static,
        config: TableConfig,
    ) -> Result<Self, ColumnError> {
        let set = column_set(&columns)?;
        let perpage = perpage.or(Some(config.default_page_size));
        let view = TabularDataView::delegated(set, total_rows, page, perpage, requests);
        Ok(Self {
            view,
            columns,
            config,
        })
    }

    pub fn view(&self) -> &TabularDataView {
        &self.view
    }

    /// Mutable access for feeding data (`set_records`, `set_page_data`).
    pub fn view_mut(&mut self) -> &mut TabularDataView {
        &mut self.view
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // -------------------------------------------------------------------------
    // Intent handlers
    // -------------------------------------------------------------------------

    /// Header click: cycles the column's sort if it is sortable.
    pub fn on_header_click(&mut self, key: &str) -> bool {
        self.view.toggle_sort(key)
    }

    /// Navigation button press; ignored while the button is disabled.
    pub fn on_page_button(&mut self, button: PageButton) -> bool {
        match button.target(&self.view.controls()) {
            Some(target) => {
                self.view.set_page_index(target);
                true
            }
            None => {
                log::debug!("[grid] {:?} is disabled", button);
                false
            }
        }
    }

    /// Page-size selector change.
    pub fn on_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.view.set_page_size(page_size);
        true
    }

    /// Search box input (local tables only).
    pub fn on_search(&mut self, text: &str) {
        self.view.set_filter(text);
    }

    /// Query parameters for a delegated page request: the requested page, the
    /// current sort and the configured fallback search fields.
    pub fn query_for(&self, request: PageRequest) -> QueryParams {
        QueryParams::for_request(request)
            .default_search_fields(self.config.search_fields.iter().cloned())
            .sort(self.view.sort().spec())
    }

    /// Full component tree: table then pagination bar.
    pub fn render(&self) -> Element {
        let page = self.view.current_page();
        let controls = page.controls;
        log::trace!(
            "[grid] render page {} of {} ({} total)",
            controls.page_index + 1,
            controls.display_page_count(),
            controls.total
        );
        Element::col()
            .id("datatable")
            .child(render::table(&self.view, page.rows, &self.columns, &self.config))
            .child(pagination::bar(&controls, &self.config))
    }
}

fn column_set(columns: &[Column]) -> Result<ColumnSet, ColumnError> {
    ColumnSet::new(columns.iter().map(|c| c.def.clone()).collect())
}
