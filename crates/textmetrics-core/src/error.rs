//! Error types for textmetrics-core.
//!
//! Analysis itself never fails. These cover the edges: loading
//! configuration and guarding input size before text reaches the engine.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// The configured stop-word list could not be read.
    #[error("failed to read stop-word file {path}: {source}")]
    StopWordsFile {
        /// Resolved path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Tuning thresholds are inconsistent.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised before analysis starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input is larger than the configured limit.
    #[error("input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Input size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type InputResult<T> = Result<T, AnalysisError>;
