//! Empirical convergence order.
//!
//! Given refinement values `x_i` and errors `y_i`, the order is the slope of
//! the least-squares line through `(ln x_i, ln y_i)`. Samples are validated
//! before any logarithm is taken so bad data fails loudly instead of turning
//! into NaN.

use tracing::debug;

use crate::domain::{LogLogFit, SampleSet};
use crate::error::AppError;
use crate::math::fit_line;

/// Check that the samples can be fitted in log-log space.
///
/// Requirements: equal lengths, at least two samples, every value finite and
/// strictly positive.
pub fn validate_samples(samples: &SampleSet) -> Result<(), AppError> {
    let (x_len, y_len) = (samples.x.len(), samples.y.len());
    if x_len != y_len {
        return Err(AppError::LengthMismatch { x_len, y_len });
    }
    if x_len < 2 {
        return Err(AppError::TooFewSamples(x_len));
    }

    for (series, values) in [("x", &samples.x), ("y", &samples.y)] {
        for (index, &value) in values.iter().enumerate() {
            if value.is_nan() || value == f64::INFINITY {
                return Err(AppError::NonFiniteSample { series, index, value });
            }
            if value <= 0.0 {
                return Err(AppError::NonPositiveSample { series, index, value });
            }
        }
    }

    Ok(())
}

/// Fit `ln(y) = m ln(x) + b` by ordinary least squares.
pub fn fit_loglog(samples: &SampleSet) -> Result<LogLogFit, AppError> {
    validate_samples(samples)?;

    let xp: Vec<f64> = samples.x.iter().map(|v| v.ln()).collect();
    let yp: Vec<f64> = samples.y.iter().map(|v| v.ln()).collect();

    let (slope, intercept) = fit_line(&xp, &yp).ok_or_else(|| {
        AppError::DegenerateFit("x values have no spread in log space".to_string())
    })?;

    debug!(slope, intercept, "log-log fit");
    Ok(LogLogFit { slope, intercept })
}

/// Order observed between each pair of consecutive samples.
///
/// Entry `i` is `ln(y[i+1]/y[i]) / ln(x[i+1]/x[i])`, or `None` when
/// `x[i+1] == x[i]`. Assumes validated samples.
pub fn local_orders(samples: &SampleSet) -> Vec<Option<f64>> {
    samples
        .points()
        .windows(2)
        .map(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            let dx = (x1 / x0).ln();
            if dx == 0.0 {
                None
            } else {
                Some((y1 / y0).ln() / dx)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(x: &[f64], y: &[f64]) -> SampleSet {
        SampleSet {
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    /// Textbook closed form on the log-transformed data.
    fn closed_form_slope(x: &[f64], y: &[f64]) -> f64 {
        let n = x.len() as f64;
        let lx: Vec<f64> = x.iter().map(|v| v.ln()).collect();
        let ly: Vec<f64> = y.iter().map(|v| v.ln()).collect();
        let sx: f64 = lx.iter().sum();
        let sy: f64 = ly.iter().sum();
        let sxy: f64 = lx.iter().zip(&ly).map(|(a, b)| a * b).sum();
        let sxx: f64 = lx.iter().map(|a| a * a).sum();
        (n * sxy - sx * sy) / (n * sxx - sx * sx)
    }

    #[test]
    fn second_order_decay() {
        let fit = fit_loglog(&samples(&[1.0, 2.0, 4.0, 8.0], &[64.0, 16.0, 4.0, 1.0])).unwrap();
        assert!((fit.slope + 2.0).abs() < 1e-9, "slope {}", fit.slope);
        assert!((fit.intercept - 64f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn steeper_last_step_pulls_slope_to_minus_2_6() {
        // Halves are 4x, 4x, 16x: in units of ln 2 the points are
        // (0,4) (1,2) (2,0) (3,-4), so Sxy/Sxx = -13/5.
        let x = [1.0, 2.0, 4.0, 8.0];
        let y = [16.0, 4.0, 1.0, 0.0625];
        let fit = fit_loglog(&samples(&x, &y)).unwrap();
        assert!((fit.slope + 2.6).abs() < 1e-9, "slope {}", fit.slope);
        assert!(((fit.slope - closed_form_slope(&x, &y)) / fit.slope).abs() < 1e-9);
    }

    #[test]
    fn first_order_decay() {
        let fit = fit_loglog(&samples(&[1.0, 2.0, 4.0, 8.0], &[8.0, 4.0, 2.0, 1.0])).unwrap();
        assert!((fit.slope + 1.0).abs() < 1e-9);
    }

    #[test]
    fn matches_closed_form_on_noisy_data() {
        let cases: [(&[f64], &[f64]); 3] = [
            (&[10.0, 20.0, 40.0, 80.0, 160.0], &[3.1e-2, 8.2e-3, 1.9e-3, 5.3e-4, 1.2e-4]),
            (&[0.5, 0.25, 0.125], &[0.9, 0.31, 0.12]),
            (&[3.0, 7.0], &[2.0, 11.0]),
        ];

        for (x, y) in cases {
            let fit = fit_loglog(&samples(x, y)).unwrap();
            let expected = closed_form_slope(x, y);
            let rel = ((fit.slope - expected) / expected).abs();
            assert!(rel < 1e-9, "slope {} vs closed form {expected}", fit.slope);
        }
    }

    #[test]
    fn zero_value_is_a_domain_error() {
        let err = fit_loglog(&samples(&[1.0, 2.0, 4.0], &[4.0, 0.0, 1.0])).unwrap_err();
        assert_eq!(
            err,
            AppError::NonPositiveSample {
                series: "y",
                index: 1,
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_x_is_a_domain_error() {
        let err = fit_loglog(&samples(&[-1.0, 2.0], &[4.0, 1.0])).unwrap_err();
        assert!(matches!(err, AppError::NonPositiveSample { series: "x", index: 0, .. }));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        let err = validate_samples(&samples(&[1.0, f64::NAN], &[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, AppError::NonFiniteSample { series: "x", index: 1, .. }));

        let err = validate_samples(&samples(&[1.0, 2.0], &[f64::INFINITY, 2.0])).unwrap_err();
        assert!(matches!(err, AppError::NonFiniteSample { series: "y", index: 0, .. }));
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            validate_samples(&samples(&[1.0, 2.0, 3.0], &[1.0, 2.0])).unwrap_err(),
            AppError::LengthMismatch { x_len: 3, y_len: 2 }
        );
        assert_eq!(
            validate_samples(&samples(&[1.0], &[1.0])).unwrap_err(),
            AppError::TooFewSamples(1)
        );
    }

    #[test]
    fn identical_x_is_degenerate() {
        let err = fit_loglog(&samples(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, AppError::DegenerateFit(_)));
    }

    #[test]
    fn local_orders_between_neighbours() {
        let orders = local_orders(&samples(&[1.0, 2.0, 2.0, 4.0], &[16.0, 4.0, 4.0, 0.5]));
        assert_eq!(orders.len(), 3);
        assert!((orders[0].unwrap() + 2.0).abs() < 1e-12);
        assert_eq!(orders[1], None);
        assert!((orders[2].unwrap() + 3.0).abs() < 1e-12);
    }
}
