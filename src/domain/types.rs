//! Shared domain types.
//!
//! These are plain data carriers: the collector produces a `SampleSet`, the
//! fit code produces a `LogLogFit` and `ReferenceCurve`s, and the plot module
//! consumes a fully built `ConvergenceChart`.

use std::path::PathBuf;
use std::time::Duration;

/// The two sample vectors read from input.
///
/// `x` is the refinement parameter (e.g. grid size `N`), `y` the measured
/// error at that refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Samples as `(x, y)` pairs in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Ordinary least-squares fit of `ln(y) = slope * ln(x) + intercept`.
///
/// `slope` is the empirical convergence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogFit {
    pub slope: f64,
    pub intercept: f64,
}

/// A geometric sequence whose log-log slope is exactly `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    pub order: f64,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Line pattern of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
}

/// Marker drawn at each data point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    None,
    Diamond,
}

/// Drawing style for one series. Colors are plain RGB so the domain layer
/// stays independent of the plotting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub rgb: (u8, u8, u8),
    pub line: LineKind,
    pub marker: MarkerKind,
    /// Marker fill; the marker outline uses `rgb`.
    pub marker_face: (u8, u8, u8),
}

/// One labeled series ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

/// Everything needed to draw the convergence chart.
///
/// Series are stored in draw order; the empirical series is always last.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceChart {
    pub series: Vec<ChartSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Resolved run settings (from CLI flags and environment).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Pause before each input line read.
    pub pace: Duration,
}
