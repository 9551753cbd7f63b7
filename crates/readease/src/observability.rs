//! Logging setup.
//!
//! Two sinks:
//! - stderr, human-readable, `warn` and above unless `-v` or `RUST_LOG` asks
//!   for more (`-q` limits it to errors)
//! - a JSONL file, at the full filter level, rotated daily
//!
//! Log file location, first match wins: `READEASE_LOG_PATH` (exact file, no
//! rotation), `READEASE_LOG_DIR`, the configured `log_dir`, then
//! `<data-local-dir>/readease/logs`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_NAME: &str = "readease.jsonl";

/// Where log files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `READEASE_LOG_PATH` / `READEASE_LOG_DIR`, falling back to the
    /// configured directory and then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("READEASE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("READEASE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                readease_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

/// Filter directive for the log file: `-q` > `-v` > `RUST_LOG` > config.
fn file_directive(quiet: bool, verbose: u8, config_level: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => std::env::var("RUST_LOG").unwrap_or_else(|_| config_level.to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Filter directive for stderr.
fn console_directive(quiet: bool, verbose: u8, config_level: &str) -> String {
    if quiet {
        "error".to_string()
    } else if verbose > 0 || std::env::var_os("RUST_LOG").is_some() {
        file_directive(quiet, verbose, config_level)
    } else {
        "warn".to_string()
    }
}

/// Build the file-sink filter from CLI flags and the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::new(file_directive(quiet, verbose, config_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run. File logging is skipped (with a warning) if the log location
/// cannot be created.
pub fn init_observability(
    config: &ObservabilityConfig,
    quiet: bool,
    verbose: u8,
    config_level: &str,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(console_directive(quiet, verbose, config_level)));

    let (file_writer, file_error) = match open_log_writer(config) {
        Ok(writer) => (writer, None),
        Err(err) => (None, Some(err)),
    };
    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(env_filter(quiet, verbose, config_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(err) = file_error {
        tracing::warn!(error = %err, "file logging disabled");
    }

    Ok(guard)
}

type LogWriter = (tracing_appender::non_blocking::NonBlocking, WorkerGuard);

fn open_log_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<LogWriter>> {
    let appender = if let Some(ref path) = config.log_path {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let dir = dir.unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        create_dir(dir)?;
        tracing_appender::rolling::never(dir, file_name)
    } else if let Some(ref dir) = config.log_dir {
        create_dir(dir)?;
        tracing_appender::rolling::daily(dir, LOG_FILE_NAME)
    } else {
        return Ok(None);
    };

    Ok(Some(tracing_appender::non_blocking(appender)))
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
