//! Column set validation errors

/// Errors raised while building a [`ColumnSet`](crate::model::ColumnSet).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// Two descriptors share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateKey(String),

    /// A descriptor uses the key reserved for the synthetic index column.
    #[error("column key '{0}' is reserved for the row index column")]
    ReservedKey(String),

    /// A descriptor has an empty key.
    #[error("column key must not be empty")]
    EmptyKey,
}
