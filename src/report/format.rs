//! Formatted terminal output.
//!
//! We keep formatting code in one place so the fitting code stays clean and
//! output changes are localized.

use std::path::Path;

use crate::domain::{LogLogFit, SampleSet};

/// One sample vector as a list repr, e.g. `[1.0, 2.0, 4.0]`.
pub fn format_vector(values: &[f64]) -> String {
    format!("{values:?}")
}

/// The echo printed right after collection: `x` then `y`, one per line.
pub fn format_samples(samples: &SampleSet) -> String {
    format!("{}\n{}", format_vector(&samples.x), format_vector(&samples.y))
}

/// Fit summary: sample count, fitted order/intercept, local orders and the
/// chart location.
pub fn format_fit_summary(
    samples: &SampleSet,
    fit: &LogLogFit,
    local: &[Option<f64>],
    output: &Path,
) -> String {
    let mut out = String::new();

    out.push_str("=== convergence order ===\n");
    out.push_str(&format!("Samples: n={}\n", samples.len()));
    out.push_str(&format!("Fitted order p: {:.4}\n", fit.slope));
    out.push_str(&format!("Intercept b   : {:.4}\n", fit.intercept));

    out.push_str("\nLocal orders:\n");
    out.push_str(&format!("{:>14} {:>14} {:>10}\n", "x_i", "x_i+1", "p_i"));
    out.push_str(&format!("{:-<14} {:-<14} {:-<10}\n", "", "", ""));
    for (i, order) in local.iter().enumerate() {
        let (Some(x0), Some(x1)) = (samples.x.get(i), samples.x.get(i + 1)) else {
            break;
        };
        out.push_str(&format!("{:>14} {:>14} {:>10}\n", fmt_num(*x0), fmt_num(*x1), fmt_order(*order)));
    }

    out.push_str(&format!("\nChart: {}\n", output.display()));
    out
}

fn fmt_num(v: f64) -> String {
    if v != 0.0 && (v.abs() < 1e-3 || v.abs() >= 1e6) {
        format!("{v:.4e}")
    } else {
        format!("{v:.4}")
    }
}

fn fmt_order(order: Option<f64>) -> String {
    match order {
        Some(v) if v.is_finite() => format!("{v:.4}"),
        _ => "-".to_string(),
    }
}
