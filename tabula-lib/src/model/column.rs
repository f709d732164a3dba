//! Column descriptors.

use serde::{Deserialize, Serialize};

use crate::error::ColumnError;

/// Key reserved for the synthetic row-number column.
pub const ROW_INDEX_KEY: &str = "rowIndex";

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Optional presentation hints carried by a column.
///
/// The core never reads these; renderers may.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleHints {
    /// Preferred width in character cells.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Free-form class name for the host's stylesheet.
    pub class: Option<String>,
}

/// Column configuration.
///
/// Columns define the structure of the table: a stable key used to look up
/// row values, header text, whether the column is sortable and optional
/// style hints. How a cell is drawn is the renderer's business.
///
/// # Examples
///
/// ```
/// use tabula_lib::model::{Alignment, ColumnDef};
///
/// let columns = vec![
///     ColumnDef::new("name", "Name").sortable(),
///     ColumnDef::new("revenue", "Revenue").sortable().align(Alignment::Right),
///     ColumnDef::new("actions", "Actions"),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Key into [`Row`](super::Row) values; unique within a set.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether this column accepts sort requests.
    #[serde(default)]
    pub sortable: bool,
    /// Presentation hints.
    #[serde(default)]
    pub style: StyleHints,
}

impl ColumnDef {
    /// Create a new, non-sortable column.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            style: StyleHints::default(),
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and cycle through
    /// ascending, descending and unsorted when toggled.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.style.align = align;
        self
    }

    /// Set the preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.style.width = Some(width);
        self
    }

    /// Set a style class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.style.class = Some(class.into());
        self
    }
}

/// An ordered set of columns with unique keys.
///
/// The synthetic row-index column is never part of the set; renderers
/// prepend it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<ColumnDef>,
}

impl ColumnSet {
    /// Validates and wraps a list of column descriptors.
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self, ColumnError> {
        for (i, column) in columns.iter().enumerate() {
            if column.key.is_empty() {
                return Err(ColumnError::EmptyKey);
            }
            if column.key == ROW_INDEX_KEY {
                return Err(ColumnError::ReservedKey(column.key.clone()));
            }
            if columns[..i].iter().any(|c| c.key == column.key) {
                return Err(ColumnError::DuplicateKey(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Looks up a column by key.
    pub fn get(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Returns `true` if the key names a sortable column.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.get(key).is_some_and(|c| c.sortable)
    }

    /// Iterates over the columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDef> {
        self.columns.iter()
    }

    /// Number of descriptor columns (excluding the index column).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no descriptor columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rendered columns, including the synthetic index column.
    pub fn rendered_len(&self) -> usize {
        self.columns.len() + 1
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnDef;
    type IntoIter = std::slice::Iter<'a, ColumnDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
