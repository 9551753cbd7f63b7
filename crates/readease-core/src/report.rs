//! Report file rendering.
//!
//! The CSV layout has two sections separated by a blank line:
//!
//! ```text
//! syllables,words,sentences,reading_ease,grade_level
//! 10,10,2,117.16,-1.84
//!
//! count,word
//! 3,the
//! 1,cat
//! ```
//!
//! Scores are written with two decimals. Words never contain commas or
//! quotes (they are alphabetic runs), so no field quoting is needed.

use std::fmt::Write as _;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::metrics::MetricsReport;

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Comma-separated summary and top-word sections.
    #[default]
    Csv,
    /// Pretty-printed JSON of the full report.
    Json,
}

impl ReportFormat {
    /// Returns the format name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// File written when no report path is configured.
    pub const fn default_path(&self) -> &'static str {
        match self {
            Self::Csv => "report.csv",
            Self::Json => "report.json",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a report as CSV.
pub fn render_csv(report: &MetricsReport) -> String {
    let mut out = String::new();
    out.push_str("syllables,words,sentences,reading_ease,grade_level\n");
    let _ = writeln!(
        out,
        "{},{},{},{:.2},{:.2}",
        report.total_syllables,
        report.total_words,
        report.total_sentences,
        report.flesch_reading_ease,
        report.flesch_kincaid_grade,
    );
    out.push_str("\ncount,word\n");
    for wc in &report.top_words {
        let _ = writeln!(out, "{},{}", wc.count, wc.word);
    }
    out
}

/// Render a report in the given format.
pub fn render(report: &MetricsReport, format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Csv => Ok(render_csv(report)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a report and write it to `path`, replacing any existing file.
#[tracing::instrument(skip(report), fields(path = %path))]
pub fn write_report(
    report: &MetricsReport,
    path: &Utf8Path,
    format: ReportFormat,
) -> ReportResult<()> {
    let body = render(report, format)?;
    std::fs::write(path.as_std_path(), body).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path, format = format.as_str(), "report written");
    Ok(())
}
