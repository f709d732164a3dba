//! Headless data-table state, query-string and export helpers
//!
//! The core is [`table::TabularDataView`]: a sortable, paginated, filterable
//! table that either owns its records (local mode) or forwards page and sort
//! intent to a record source (delegated mode).

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod query;
pub mod table;

pub use config::TableConfig;
pub use model::{ColumnDef, ColumnSet, Row, Value};
pub use table::{DataRequest, DataRequests, PageRequest, TabularDataView};
