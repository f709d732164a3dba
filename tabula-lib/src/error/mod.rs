//! Error types

mod column;
mod config;
mod export;
mod logging;

pub use column::*;
pub use config::*;
pub use export::*;
pub use logging::*;
