//! Table state reconciliation.
//!
//! [`TabularDataView`] keeps a [`SortState`] and a [`PaginationState`]
//! consistent across two operating modes:
//!
//! - **Local**: the view owns its records and filters, sorts and slices them.
//! - **Delegated**: the view shows one externally computed page and reports
//!   page, page-size and sort intent through [`DataRequests`].
//!
//! # Example
//!
//! ```
//! use tabula_lib::model::{ColumnDef, ColumnSet};
//! use tabula_lib::table::{DataRequest, TabularDataView};
//!
//! let columns = ColumnSet::new(vec![ColumnDef::new("name", "Name").sortable()]).unwrap();
//! let mut view = TabularDataView::delegated(columns, 95, Some(1), Some(10), Vec::<DataRequest>::new());
//! assert_eq!(view.page_count(), 10);
//!
//! view.set_page_size(20);
//! assert_eq!(view.pagination().page_index, 0);
//! ```

mod filter;
mod gate;
mod listener;
mod pagination;
mod sort;
mod view;

pub use filter::matches_filter;
pub use gate::{ResponseGate, Ticket};
pub use listener::{Callbacks, DataRequest, DataRequests, PageRequest};
pub use pagination::{DEFAULT_PAGE_SIZE, PageControls, PaginationState, page_count};
pub use sort::{Direction, SortEntry, SortState};
pub use view::{CurrentPage, HeaderState, Mode, TabularDataView, VisibleRow};
