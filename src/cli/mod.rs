//! Command-line parsing.
//!
//! Keeps argument parsing separate from the fitting and plotting code. Every
//! flag only affects where and how the chart is written; reference orders
//! and chart styling are fixed.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::domain::RunConfig;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "convplot",
    version,
    about = "Log-log convergence plot from two lines of numbers on stdin",
    long_about = "Reads two lines of whitespace-separated numbers from stdin: \
                  refinement values (x) then errors (y). Fits the empirical \
                  convergence order and writes an SVG chart comparing it with \
                  reference slopes of order 1/2 through 6."
)]
pub struct Cli {
    /// Output SVG file.
    #[arg(short, long, env = "CONVPLOT_OUTPUT", default_value = "convergence.svg")]
    pub output: PathBuf,

    /// Chart width (pixels).
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Chart height (pixels).
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Pause before each input line read, in milliseconds.
    #[arg(long, env = "CONVPLOT_PACE_MS", default_value_t = 0)]
    pub pace_ms: u64,

    /// Log level for stderr diagnostics (error, warn, info, debug, trace).
    #[arg(long, env = "CONVPLOT_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            output: self.output.clone(),
            width: self.width.max(1),
            height: self.height.max(1),
            pace: Duration::from_millis(self.pace_ms),
        }
    }
}
