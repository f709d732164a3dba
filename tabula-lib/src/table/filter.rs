//! Global text filter.

use crate::model::{ColumnSet, Row};

/// Returns `true` if any column's display text contains `needle`.
///
/// `needle` is expected lowercased and trimmed; an empty needle matches
/// every row.
pub fn matches_filter(row: &Row, columns: &ColumnSet, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|column| row.display(&column.key).to_lowercase().contains(needle))
}
