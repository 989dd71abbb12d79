//! CLI argument definitions for the `medclean` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use medclean_cli::logging::LogFormat;

use medclean_cli::commands::{
    DEFAULT_CLEAN_INPUT, DEFAULT_CLEAN_OUTPUT, DEFAULT_GENERATE_OUTPUT, DEFAULT_GENERATE_ROWS,
    DEFAULT_GENERATE_SEED,
};

#[derive(Parser)]
#[command(
    name = "medclean",
    version,
    about = "Clean, check and generate tabular patient records",
    long_about = "Clean messy patient record CSV files.\n\n\
                  Removes duplicates, fixes column types, fills missing values,\n\
                  clips outliers to medical ranges and standardises text labels."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the cleaning pipeline over a raw CSV file.
    Clean(CleanArgs),

    /// Print a data quality report for a CSV file.
    Report(ReportArgs),

    /// Write a synthetic patient dataset.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw CSV to clean.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CLEAN_INPUT)]
    pub input: PathBuf,

    /// Where to write the cleaned CSV.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CLEAN_OUTPUT)]
    pub output: PathBuf,

    /// Print the run summary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// CSV to check.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CLEAN_OUTPUT)]
    pub input: PathBuf,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_GENERATE_ROWS)]
    pub rows: usize,

    /// Output CSV path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_GENERATE_OUTPUT)]
    pub output: PathBuf,

    /// Random seed.
    #[arg(long, default_value_t = DEFAULT_GENERATE_SEED)]
    pub seed: u64,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
