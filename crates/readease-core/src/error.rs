//! Error types for readease-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The readability formulas divide by the word and sentence counts,
    /// so neither may be zero.
    #[error(
        "cannot compute metrics without words and sentences \
         (found {words} words in {sentences} sentences)"
    )]
    DivideByZero {
        /// Number of words detected.
        words: usize,
        /// Number of sentences detected.
        sentences: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while writing a report file.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be created or written.
    #[error("failed to write report to {path}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`ReportError`].
pub type ReportResult<T> = Result<T, ReportError>;
