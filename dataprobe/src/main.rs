//! Data quality profiling tool.
//!
//! Profiles CSV and JSON files and reports per-column statistics, quality
//! scores and detected issues.
//!
//! # Guarantees
//! - Offline operation; input files are only read
//! - Reports are deterministic for a given input and configuration

use clap::Parser;
use dataprobe::output::write_output;
use dataprobe::profile::run_profile;
use dataprobe::render::render_config;
use dataprobe::{Cli, Command};
use dataprobe_core::{QualityConfig, Result, init_logging};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet, cli.global.log_format.into())?;

    let result = match &cli.command {
        Command::Profile(args) => run_profile(args).await,
        Command::Config => print_default_config().await,
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

async fn print_default_config() -> Result<()> {
    let rendered = render_config(&QualityConfig::default())?;
    write_output(&rendered, None).await
}
