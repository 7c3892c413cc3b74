//! CLI argument definitions for the RIPS validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rips_store::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(
    name = "rips",
    version,
    about = "RIPS validator - Validate healthcare service records before submission",
    long_about = "Validate RIPS records stored in a SQLite database.\n\n\
                  Each record is checked field by field, against the reference catalogs\n\
                  and against the beneficiary registry. Accepted records are exported as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record values (patient data) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: ./rips.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database holding the RIPS tables (overrides the config file
    /// and RIPS_DATABASE).
    #[arg(long = "database", value_name = "PATH", global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one record and export it when accepted.
    Validate(ValidateArgs),

    /// Validate every record listed in a CSV file (columns: type,key).
    Batch(BatchArgs),

    /// Page through a record table with optional column filters.
    Browse(BrowseArgs),

    /// List the supported record types and their tables.
    Types,

    /// List the catalogs in effect and their codes.
    Catalogs,
}

/// Options shared by the validating subcommands.
#[derive(Args)]
pub struct ExportArgs {
    /// Directory for exported records (overrides the config file).
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Validate only; never write export files.
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Print the JSON response instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Record type tag (AF, US, AC, AP, AU, AH, AN, AM, AT).
    #[arg(value_name = "TYPE")]
    pub record_type: String,

    /// Record key (consecutive number, or document number for US).
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with `type` and `key` columns.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Record type tag whose table is browsed.
    #[arg(value_name = "TYPE")]
    pub record_type: String,

    /// Column filter as COLUMN=TEXT (substring match, repeatable).
    #[arg(long = "filter", value_name = "COLUMN=TEXT")]
    pub filters: Vec<String>,

    /// Page number, starting at 1.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
