//! Info command: version and the settings a `report` run would use.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use readease_core::config::{Config, ConfigFile, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Debug, Serialize)]
struct Info {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    repository: &'static str,
    config: Settings,
}

/// Settings after defaults are filled in.
#[derive(Debug, Serialize)]
struct Settings {
    config_file: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<ConfigFile>,
    log_level: &'static str,
    log_dir: Option<Utf8PathBuf>,
    top_words: usize,
    report_path: Utf8PathBuf,
    report_format: String,
    max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
}

impl Settings {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        let format = config.report_format_or_default();
        Self {
            config_file: sources.primary_file().map(Into::into),
            files: sources.files.clone(),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.clone(),
            top_words: config.top_words_or_default(),
            report_path: config.report_path_for(format),
            report_format: format.to_string(),
            max_grade: config.max_grade,
            max_input_bytes: config.input_limit(),
        }
    }

    /// Label/value pairs for the text view.
    fn rows(&self) -> Vec<(&'static str, String)> {
        let or_unset = |value: Option<String>| value.unwrap_or_else(|| "not set".to_string());
        vec![
            (
                "config file",
                or_unset(self.config_file.as_ref().map(ToString::to_string)),
            ),
            ("log level", self.log_level.to_string()),
            ("log dir", or_unset(self.log_dir.as_ref().map(ToString::to_string))),
            ("top words", self.top_words.to_string()),
            ("report", format!("{} ({})", self.report_path, self.report_format)),
            ("max grade", or_unset(self.max_grade.map(|g| format!("{g:.1}")))),
            (
                "input limit",
                self.max_input_bytes
                    .map_or_else(|| "disabled".to_string(), |max| format!("{max} bytes")),
            ),
        ]
    }
}

/// Print the version and effective settings.
#[instrument(name = "cmd_info", skip_all, fields(json = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        repository: env!("CARGO_PKG_REPOSITORY"),
        config: Settings::new(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.name.bold(), info.version.green());
    println!("{}", info.description);
    println!("{}", info.repository.cyan());
    println!();
    for (label, value) in info.config.rows() {
        println!("  {:<12} {value}", label.dimmed());
    }
    Ok(())
}
