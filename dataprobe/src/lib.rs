//! Library module for the `dataprobe` binary.
//!
//! This module exposes the command-line surface and the profiling workflow
//! for testing purposes. The binary entry point is in main.rs.

pub mod output;
pub mod profile;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dataprobe_core::LogFormat;

/// CLI argument structure
#[derive(Parser)]
#[command(name = "dataprobe")]
#[command(about = "Data quality profiling for CSV and JSON files")]
#[command(version)]
#[command(long_about = "
DataProbe - Offline data quality profiling

Profiles tabular data and reports, per column:
- Inferred type (boolean, number, date, text)
- Missing values, uniqueness and duplicates
- Numeric min/max/mean and IQR outliers

and scores the dataset on completeness, consistency, accuracy and validity.

SUPPORTED INPUTS:
- CSV with a header row (.csv)
- JSON arrays of objects, {\"rows\": [...]} wrappers, or a single object (.json)

EXAMPLES:
  dataprobe profile customers.csv
  dataprobe profile --format markdown --insights -o report.md orders.json
  dataprobe profile --config strict.json a.csv b.csv
  dataprobe config > dataprobe.json
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Profile one or more data files
    Profile(ProfileArgs),
    /// Print the default quality configuration as JSON
    Config,
}

/// Arguments of the `profile` command
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Input files
    #[arg(required = true, value_name = "INPUT", help = "CSV or JSON files to profile")]
    pub inputs: Vec<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,

    /// Output file path
    #[arg(short, long, help = "Write the report to a file instead of stdout")]
    pub output: Option<PathBuf>,

    /// Quality configuration file
    #[arg(
        long,
        env = "DATAPROBE_CONFIG",
        value_name = "FILE",
        help = "JSON quality configuration; omitted fields keep their defaults"
    )]
    pub config: Option<PathBuf>,

    /// Include a plain-language summary
    #[arg(long, help = "Append a plain-language summary and recommendations")]
    pub insights: bool,

    /// Disable parallelism
    #[arg(long, help = "Profile inputs and columns one at a time")]
    pub sequential: bool,
}

/// Global flags shared by all commands
#[derive(Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true, help = "Suppress all logging except errors")]
    pub quiet: bool,

    /// Log event format
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Pretty-printed JSON
    Json,
    /// Markdown tables
    Markdown,
}

/// Log formats selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Human readable lines
    Text,
    /// Newline-delimited JSON
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
