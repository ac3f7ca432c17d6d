//! Chart assembly.
//!
//! Turns samples + fit into a render-only `ConvergenceChart`: seven reference
//! series followed by the empirical series, each with its fixed style.

use tracing::debug;

use crate::domain::{ChartSeries, ConvergenceChart, LogLogFit, SampleSet};
use crate::error::AppError;
use crate::fit::reference_curves;
use crate::plot::style::{EMPIRICAL_STYLE, reference_style};

pub const X_LABEL: &str = "log(N)";
pub const Y_LABEL: &str = "log(L∞ norm)";

/// Legend label of the empirical series, e.g. `Implementation (p = 1.97)`.
pub fn empirical_label(fit: &LogLogFit) -> String {
    format!("Implementation (p = {:.2})", fit.slope)
}

/// Assemble the chart for validated samples.
///
/// Reference points that overflow to infinity or underflow to zero cannot sit
/// on a log axis and are left out of their series.
pub fn build_chart(samples: &SampleSet, fit: &LogLogFit) -> Result<ConvergenceChart, AppError> {
    let (Some(&x0), Some(&y0)) = (samples.x.first(), samples.y.first()) else {
        return Err(AppError::TooFewSamples(samples.len()));
    };

    let mut series: Vec<ChartSeries> = reference_curves(x0, y0, samples.len())
        .into_iter()
        .enumerate()
        .map(|(idx, curve)| {
            let total = curve.points.len();
            let points: Vec<(f64, f64)> = curve
                .points
                .into_iter()
                .filter(|&(x, y)| plottable(x) && plottable(y))
                .collect();
            if points.len() < total {
                debug!(label = %curve.label, dropped = total - points.len(), "dropped out-of-range reference points");
            }
            ChartSeries {
                label: curve.label,
                points,
                style: reference_style(idx),
            }
        })
        .collect();

    series.push(ChartSeries {
        label: empirical_label(fit),
        points: samples.points(),
        style: EMPIRICAL_STYLE,
    });

    Ok(ConvergenceChart {
        series,
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
    })
}

/// Whether `v` can be placed on a log axis.
pub fn plottable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Axis ranges covering every series, widened by the factor `pad` on each
/// side so the outermost points do not sit on the frame.
///
/// Padding is applied in log space and the result is clamped to
/// `[f64::MIN_POSITIVE, f64::MAX]` (or down to the smallest data value when
/// that is subnormal), so the bounds are always finite and positive. Padding
/// is skipped on an axis whose padded span `hi / lo` would overflow.
///
/// Returns `None` when no plottable point exists.
pub fn log_bounds(chart: &ConvergenceChart, pad: f64) -> Option<([f64; 2], [f64; 2])> {
    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];

    for &(px, py) in chart.series.iter().flat_map(|s| s.points.iter()) {
        if !(plottable(px) && plottable(py)) {
            continue;
        }
        x = [x[0].min(px), x[1].max(px)];
        y = [y[0].min(py), y[1].max(py)];
    }

    if !(x[0].is_finite() && y[0].is_finite()) {
        return None;
    }

    let ln_pad = pad.max(1.0).ln();
    Some((pad_log_range(x, ln_pad), pad_log_range(y, ln_pad)))
}

fn pad_log_range([lo, hi]: [f64; 2], ln_pad: f64) -> [f64; 2] {
    let lo_padded = (lo.ln() - ln_pad).exp();
    let lo_padded = if lo_padded >= f64::MIN_POSITIVE {
        lo_padded.min(lo)
    } else {
        lo.min(f64::MIN_POSITIVE)
    };

    let hi_padded = (hi.ln() + ln_pad).exp();
    let hi_padded = if hi_padded.is_finite() { hi_padded.max(hi) } else { f64::MAX };

    // Plotters derives its tick count from hi / lo.
    if (hi_padded / lo_padded).is_finite() {
        [lo_padded, hi_padded]
    } else {
        [lo, hi]
    }
}
