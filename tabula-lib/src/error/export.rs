//! Export errors

/// Errors that can occur while producing or saving an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("export is not valid UTF-8")]
    Encoding,

    /// Saving the export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested file name has no usable file component.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),
}
