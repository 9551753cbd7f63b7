//! readease CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use readease::{Cli, Commands, GlobalArgs, commands};
use readease_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.global.color.apply();

    if cli.global.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    // Without --version-only clap has already demanded a subcommand.
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {dir}"))?;
    }

    let (config, sources) = load_config(&cli.global)?;

    let log_locations = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let _guard = observability::init_observability(
        &log_locations,
        cli.global.quiet,
        cli.global.verbose,
        config.log_level.as_str(),
    )
    .context("failed to initialize logging")?;
    debug!(global = ?cli.global, config_file = ?sources.primary_file(), "starting");

    let result = run(command, cli.global.json, &config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %format!("{err:#}"), "command failed");
    }
    result
}

fn load_config(global: &GlobalArgs) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|dir| anyhow::anyhow!("current directory is not UTF-8: {}", dir.display()))?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref file) = global.config {
        loader = loader.with_file(file);
    }
    loader.load().context("failed to load configuration")
}

fn run(
    command: Commands,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => commands::report::cmd_report(args, json, config),
        Commands::Syllables(args) => commands::syllables::cmd_syllables(args, json),
        Commands::Info(args) => commands::info::cmd_info(args, json, config, sources),
    }
}
