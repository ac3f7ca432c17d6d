//! Fixed series palette.

use crate::domain::{LineKind, MarkerKind, SeriesStyle};

const WHITE: (u8, u8, u8) = (255, 255, 255);

const fn solid(rgb: (u8, u8, u8)) -> SeriesStyle {
    SeriesStyle {
        rgb,
        line: LineKind::Solid,
        marker: MarkerKind::None,
        marker_face: WHITE,
    }
}

/// Styles for the reference curves, in `REFERENCE_ORDERS` order.
///
/// Black, blue, cyan, yellow, red, magenta, blue. Blue repeats for the
/// 6th-order curve.
pub const REFERENCE_STYLES: [SeriesStyle; 7] = [
    solid((0, 0, 0)),
    solid((0, 0, 255)),
    solid((0, 255, 255)),
    solid((255, 255, 0)),
    solid((255, 0, 0)),
    solid((255, 0, 255)),
    solid((0, 0, 255)),
];

/// Style of the empirical series: large-dash red with hollow (white-faced,
/// red-edged) diamond markers.
pub const EMPIRICAL_STYLE: SeriesStyle = SeriesStyle {
    rgb: (255, 0, 0),
    line: LineKind::Dashed,
    marker: MarkerKind::Diamond,
    marker_face: WHITE,
};

/// Style for the `index`-th reference curve; wraps if there are more curves
/// than palette entries.
pub fn reference_style(index: usize) -> SeriesStyle {
    REFERENCE_STYLES[index % REFERENCE_STYLES.len()]
}

/// Chart-wide visual settings, passed to a single render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub line_width: u32,
    pub marker_size: i32,
    pub dash_size: u32,
    pub dash_spacing: u32,
    pub axis_desc_font: u32,
    pub tick_font: u32,
    pub legend_font: u32,
    pub grid_gray: u8,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            line_width: 2,
            marker_size: 6,
            dash_size: 12,
            dash_spacing: 6,
            axis_desc_font: 25,
            tick_font: 20,
            legend_font: 15,
            grid_gray: 128,
        }
    }
}
