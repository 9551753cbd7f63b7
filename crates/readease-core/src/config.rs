//! Settings, layered from files and the environment.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `<config dir>/readease/config.<ext>`
//! 3. project files in the nearest directory that has any, searching from
//!    the working directory upward and stopping at the repository root (the
//!    directory holding `.git`): `.readease.<ext>`, then `readease.<ext>`
//! 4. files passed with `--config`, in order
//! 5. `READEASE_*` environment variables (`READEASE_TOP_WORDS=5`)
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`; the parser follows the
//! extension. Unknown keys are ignored.
//!
//! ```no_run
//! use readease_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (config, sources) = ConfigLoader::new().with_project_search(".").load()?;
//! if let Some(file) = sources.primary_file() {
//!     println!("using {file}");
//! }
//! println!("top words: {}", config.top_words_or_default());
//! # Ok(())
//! # }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::metrics::DEFAULT_TOP_WORDS;
use crate::report::ReportFormat;

const APP_NAME: &str = "readease";
const ENV_PREFIX: &str = "READEASE_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const REPO_MARKER: &str = ".git";

/// Effective settings. Every key is optional in files.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log file level.
    pub log_level: LogLevel,
    /// Directory for JSONL log files.
    pub log_dir: Option<Utf8PathBuf>,
    /// How many of the most frequent words to report.
    pub top_words: Option<usize>,
    /// Grade level above which `report` fails.
    pub max_grade: Option<f64>,
    /// Report destination; defaults to `report.csv` or `report.json`.
    pub report_path: Option<Utf8PathBuf>,
    /// Report file format.
    pub report_format: Option<ReportFormat>,
    /// Largest input file accepted, in bytes.
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
}

impl Config {
    /// Number of top words, 10 unless configured.
    pub fn top_words_or_default(&self) -> usize {
        self.top_words.unwrap_or(DEFAULT_TOP_WORDS)
    }

    /// Configured report format, CSV unless configured.
    pub fn report_format_or_default(&self) -> ReportFormat {
        self.report_format.unwrap_or_default()
    }

    /// Where a report in `format` goes: the configured path, else the
    /// format's own default file name.
    pub fn report_path_for(&self, format: ReportFormat) -> Utf8PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(format.default_path()))
    }

    /// Input size limit in bytes; `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Log level for the JSONL log file.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything down to debug events.
    Debug,
    /// Informational events (default).
    #[default]
    Info,
    /// Warnings and errors.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// The level as a tracing filter directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which layer a settings file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The per-user settings file.
    User,
    /// Found by searching up from the working directory.
    Project,
    /// Named on the command line.
    Explicit,
}

/// A settings file merged into the [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    /// Layer the file was loaded as.
    pub kind: SourceKind,
    /// Location of the file.
    pub path: Utf8PathBuf,
}

/// Files merged into a [`Config`], lowest precedence first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Every file that was merged.
    pub files: Vec<ConfigFile>,
}

impl ConfigSources {
    /// The file whose values win, if any file was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files.last().map(|file| file.path.as_path())
    }

    /// Files loaded for one layer.
    pub fn of_kind(&self, kind: SourceKind) -> impl Iterator<Item = &Utf8Path> {
        self.files
            .iter()
            .filter(move |file| file.kind == kind)
            .map(|file| file.path.as_path())
    }
}

/// Collects settings files and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    explicit: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file and nothing else.
    pub const fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            explicit: Vec::new(),
        }
    }

    /// Search for project files from `dir` upward.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the per-user settings file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Merge `path` above discovered files. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge all layers and deserialize the result.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let mut files = Vec::new();
        if self.user_config
            && let Some(path) = find_user_file()
        {
            files.push(ConfigFile {
                kind: SourceKind::User,
                path,
            });
        }
        if let Some(ref dir) = self.search_from {
            files.extend(find_project_files(dir).into_iter().map(|path| ConfigFile {
                kind: SourceKind::Project,
                path,
            }));
        }
        files.extend(self.explicit.into_iter().map(|path| ConfigFile {
            kind: SourceKind::Explicit,
            path,
        }));

        let figment = files
            .iter()
            .fold(Figment::from(Serialized::defaults(Config::default())), |fig, file| {
                merge_file(fig, &file.path)
            })
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(files = files.len(), ?config, "settings loaded");
        Ok((config, ConfigSources { files }))
    }
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

/// Settings files in the nearest directory at or above `start` that has any.
fn find_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .iter()
            .flat_map(|dot| EXTENSIONS.map(|ext| dir.join(format!("{dot}{APP_NAME}.{ext}"))))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if dir.join(REPO_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn find_user_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Per-user settings directory (`~/.config/readease` on Linux).
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.config_dir().to_path_buf()).ok()
}

/// Per-user local data directory; log files go under it by default.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.data_local_dir().to_path_buf()).ok()
}
