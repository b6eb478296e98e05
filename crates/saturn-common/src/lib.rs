//! Common utilities and types for the Saturn dashboard

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;

// Re-export commonly used types
pub use config::{Config, DataConfig, LoggingConfig, OutputConfig};
pub use error::{Result, SaturnError};
pub use fetch::{CsvSource, DatasetFile, HttpCsvSource};
pub use logging::init_logging;
