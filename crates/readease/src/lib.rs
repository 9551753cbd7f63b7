//! Command-line front end for `readease-core`.
//!
//! [`Cli`] is the parser, [`Commands`] the subcommands, and [`commands`]
//! their implementations. `main.rs` wires them to config loading and logging.

pub mod commands;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Forced color setting, `None` for terminal detection.
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }

    /// Set the process-wide color override.
    pub fn apply(self) {
        if let Some(enabled) = self.forced() {
            owo_colors::set_override(enabled);
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, readease=trace)
    READEASE_LOG_PATH      Explicit log file path
    READEASE_LOG_DIR       Log directory
    READEASE_TOP_WORDS     Number of top words to report
    READEASE_MAX_GRADE     Maximum acceptable grade level
    READEASE_<KEY>         Any other config key
";

/// Flesch readability and word-frequency reports for plain text.
#[derive(Parser, Debug)]
#[command(name = "readease", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options accepted before or after the subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Settings file, merged above discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<Utf8PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a text file and write its readability report
    Report(commands::report::ReportArgs),

    /// Estimate syllables for individual words
    Syllables(commands::syllables::SyllablesArgs),

    /// Show version and effective settings
    Info(commands::info::InfoArgs),
}
