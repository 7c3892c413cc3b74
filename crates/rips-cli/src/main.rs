//! RIPS validator CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use rips_cli::config::{DATABASE_ENV, RipsConfig};
use rips_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{Settings, run_batch, run_browse, run_catalogs, run_types, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run the selected subcommand. `Ok(false)` means records were rejected.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Command::Validate(args) => run_validate(&load_settings(cli)?, args),
        Command::Batch(args) => run_batch(&load_settings(cli)?, args),
        Command::Browse(args) => run_browse(&load_settings(cli)?, args).map(|()| true),
        Command::Catalogs => run_catalogs(&load_settings(cli)?).map(|()| true),
        Command::Types => run_types().map(|()| true),
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = RipsConfig::load(cli.config.as_deref())?;
    let database = config.database_path(
        cli.database.as_deref(),
        std::env::var_os(DATABASE_ENV).map(PathBuf::from),
    );
    Ok(Settings { config, database })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
