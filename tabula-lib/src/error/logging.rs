//! Logger setup errors

/// Errors that can occur while initializing the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be created.
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger is already installed.
    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
