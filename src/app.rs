//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - collects the two sample lines from stdin and echoes them
//! - fits the empirical order and writes the chart
//! - prints the fit summary

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::error::AppError;
use crate::io::collect_samples;
use crate::report::{format_fit_summary, format_samples};

pub mod pipeline;

/// Entry point for the `convplot` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = cli.run_config();
    info!(output = %config.output.display(), pace_ms = config.pace.as_millis() as u64, "waiting for samples on stdin");

    let stdin = std::io::stdin();
    let samples = collect_samples(stdin.lock(), config.pace)?;
    println!("{}", format_samples(&samples));

    let run = pipeline::analyze(samples)?;
    pipeline::render(&run, &config)?;

    print!(
        "{}",
        format_fit_summary(&run.samples, &run.fit, &run.local_orders, &config.output)
    );
    Ok(())
}

fn init_logging(level: tracing::Level) {
    // A subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
