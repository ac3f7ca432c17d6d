//! Shared analysis pipeline.
//!
//! samples -> validation -> log-log fit -> local orders -> chart description
//!
//! Kept apart from `app::run` so tests can drive it with in-memory input and
//! render into a string instead of a file.

use tracing::info;

use crate::domain::{ConvergenceChart, LogLogFit, RunConfig, SampleSet};
use crate::error::AppError;
use crate::fit::{fit_loglog, local_orders};
use crate::plot::{ChartTheme, build_chart, render_svg_file};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub fit: LogLogFit,
    pub local_orders: Vec<Option<f64>>,
    pub chart: ConvergenceChart,
}

/// Fit the samples and assemble the chart. Nothing is drawn here.
pub fn analyze(samples: SampleSet) -> Result<RunOutput, AppError> {
    let fit = fit_loglog(&samples)?;
    info!(order = fit.slope, n = samples.len(), "fitted empirical order");

    let local_orders = local_orders(&samples);
    let chart = build_chart(&samples, &fit)?;

    Ok(RunOutput {
        samples,
        fit,
        local_orders,
        chart,
    })
}

/// Write the chart of `run` to the configured output file.
pub fn render(run: &RunOutput, config: &RunConfig) -> Result<(), AppError> {
    render_svg_file(
        &run.chart,
        &config.output,
        (config.width, config.height),
        &ChartTheme::default(),
    )
}
