//! Core library for readease.
//!
//! Computes Flesch Reading Ease and Flesch-Kincaid Grade Level for a text,
//! along with its most frequent words, and renders the result as a report.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence tokenization
//! - [`syllables`] - Heuristic syllable estimation
//! - [`frequency`] - Word frequency ranking
//! - [`metrics`] - Readability formulas and the combined [`MetricsReport`]
//! - [`report`] - CSV and JSON report rendering
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readease_core::compute_metrics;
//!
//! let report = compute_metrics("The cat sat. The dog ran.", 3).unwrap();
//! assert_eq!(report.total_sentences, 2);
//! assert_eq!(report.top_words[0].word, "the");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod frequency;
pub mod metrics;
pub mod report;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, ReportError, ReportResult,
};
pub use frequency::{WordCount, top_words};
pub use metrics::{EaseBand, MetricsOptions, MetricsReport, compute_metrics};
pub use report::ReportFormat;
pub use syllables::count_syllables;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
