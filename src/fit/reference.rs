//! Reference slopes.
//!
//! Each reference curve is a geometric sequence anchored near the first data
//! point: start at `(s·x0, s^p·y0)` and divide by `s` and `s^p` at every step.
//! Its log-log slope is exactly `p`, which makes it a ruler for the empirical
//! series.

use crate::domain::ReferenceCurve;

/// Nominal orders drawn on every chart, in legend order.
pub const REFERENCE_ORDERS: [f64; 7] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// Refinement factor between consecutive reference points.
pub const REFINEMENT_SCALE: f64 = 2.0;

/// Number of extra points a reference curve has over the sample count.
pub const EXTRA_POINTS: usize = 2;

/// Build the reference curve of `order` anchored at `(x0, y0)`.
///
/// The curve has `sample_count + 2` points. Only the first point sits above
/// the anchor, so an anchor near `f64::MAX` overflows that point alone; the
/// rest walk down from `(x0, y0)` and may underflow to zero for tiny anchors.
/// Callers that plot the curve drop such points.
pub fn reference_curve(order: f64, x0: f64, y0: f64, sample_count: usize) -> ReferenceCurve {
    let factor = REFINEMENT_SCALE.powf(order);
    let len = sample_count + EXTRA_POINTS;

    let mut points = Vec::with_capacity(len);
    points.push((REFINEMENT_SCALE * x0, factor * y0));

    let (mut vx, mut vy) = (x0, y0);
    for _ in 1..len {
        points.push((vx, vy));
        vx /= REFINEMENT_SCALE;
        vy /= factor;
    }

    ReferenceCurve {
        order,
        label: order_label(order),
        points,
    }
}

/// Build all reference curves anchored at the first sample.
pub fn reference_curves(x0: f64, y0: f64, sample_count: usize) -> Vec<ReferenceCurve> {
    REFERENCE_ORDERS
        .iter()
        .map(|&order| reference_curve(order, x0, y0, sample_count))
        .collect()
}

/// Legend label for a reference order, e.g. `2nd order slope`.
pub fn order_label(order: f64) -> String {
    if order.fract() != 0.0 {
        let fraction = if order == 0.5 {
            "1/2".to_string()
        } else {
            format!("{order}")
        };
        return format!("{fraction}th order slope");
    }

    let n = order as i64;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix} order slope")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loglog_slope(a: (f64, f64), b: (f64, f64)) -> f64 {
        (a.1.ln() - b.1.ln()) / (a.0.ln() - b.0.ln())
    }

    #[test]
    fn every_pair_has_the_nominal_slope() {
        for curve in reference_curves(10.0, 3e-2, 5) {
            for i in 0..curve.points.len() {
                for j in 0..curve.points.len() {
                    if i == j {
                        continue;
                    }
                    let s = loglog_slope(curve.points[i], curve.points[j]);
                    assert!(
                        (s - curve.order).abs() < 1e-9,
                        "order {} pair ({i},{j}) slope {s}",
                        curve.order
                    );
                }
            }
        }
    }

    #[test]
    fn length_is_sample_count_plus_two() {
        for n in [1, 2, 4, 9] {
            for curve in reference_curves(1.0, 1.0, n) {
                assert_eq!(curve.points.len(), n + 2);
            }
        }
    }

    #[test]
    fn anchored_one_step_before_first_sample() {
        let curve = reference_curve(2.0, 8.0, 0.5, 3);
        assert_eq!(curve.points[0], (16.0, 2.0));
        assert_eq!(curve.points[1], (8.0, 0.5));
        assert_eq!(curve.points[4], (1.0, 0.5 / 64.0));
    }

    #[test]
    fn half_order_is_generated_like_any_other() {
        let curve = reference_curve(0.5, 1.0, 1.0, 2);
        assert!((curve.points[0].1 - 2f64.sqrt()).abs() < 1e-12);
        assert!((curve.points[3].1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn huge_anchor_overflows_only_the_first_point() {
        let curve = reference_curve(6.0, 1.7e308, 1e308, 3);
        assert_eq!(curve.points.len(), 5);
        assert!(curve.points[0].0.is_infinite());
        assert!(curve.points[0].1.is_infinite());
        assert_eq!(curve.points[1], (1.7e308, 1e308));
        assert!(curve.points[1..].iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn tiny_anchor_underflows_without_nan() {
        let curve = reference_curve(6.0, 1.0, 1e-300, 150);
        assert_eq!(curve.points.len(), 152);
        assert!(curve.points.iter().all(|&(x, y)| x > 0.0 && y >= 0.0 && !y.is_nan()));
        assert_eq!(curve.points.last().unwrap().1, 0.0);
    }

    #[test]
    fn labels_in_legend_order() {
        let labels: Vec<String> = reference_curves(1.0, 1.0, 2).into_iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "1/2th order slope",
                "1st order slope",
                "2nd order slope",
                "3rd order slope",
                "4th order slope",
                "5th order slope",
                "6th order slope",
            ]
        );
    }
}
