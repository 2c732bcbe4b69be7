//! Error types for the liftlog_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An input log file could not be read
    #[error("failed to read input {0:?}: {1}")]
    Input(PathBuf, io::Error),

    /// Log text does not match the expected format
    #[error("format error: {0}")]
    Format(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Chart rendering error
    #[error("chart error: {0}")]
    Chart(String),
}
