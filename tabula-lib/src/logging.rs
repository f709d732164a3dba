//! File logging setup.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, WriteLogger};

pub use simplelog::LevelFilter;

use crate::error::LogError;

/// Sends `log` records at `level` and above to a freshly created file.
///
/// Call once at startup; a second call fails with [`LogError::AlreadySet`].
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LogError> {
    let file = File::create(path.as_ref())?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("[logging] writing to {}", path.as_ref().display());
    Ok(())
}
