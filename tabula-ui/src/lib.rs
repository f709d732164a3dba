//! Presentational components for admin screens.
//!
//! Components render to a headless [`Element`] tree that a host (terminal,
//! browser bridge, test) can draw however it likes.

pub mod color;
pub mod element;
pub mod empty_state;
pub mod grid;
pub mod style;
pub mod toast;

pub use color::{Color, Rgb};
pub use element::{Element, Role};
pub use style::Style;

pub mod prelude {
    pub use crate::color::{Color, Rgb};
    pub use crate::element::{Element, Role};
    pub use crate::empty_state::EmptyState;
    pub use crate::grid::{Column, DataTable, PageButton};
    pub use crate::style::Style;
    pub use crate::toast::{Toast, ToastLevel, Toaster};

    pub use tabula_lib::model::{Alignment, Row};
    pub use tabula_lib::table::{DataRequest, DataRequests, PageRequest};
    pub use tabula_lib::TableConfig;
}
