//! Plotters-powered log-log rendering.
//!
//! All styling comes from the `ChartTheme` argument and the per-series
//! `SeriesStyle`; nothing is configured process-wide, so a chart can be
//! rendered any number of times in one process with identical output.
//!
//! Output is SVG, either to a file or into an in-memory string.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::domain::{ConvergenceChart, LineKind, MarkerKind};
use crate::error::AppError;
use crate::plot::chart::{log_bounds, plottable};
use crate::plot::style::ChartTheme;

/// Multiplicative padding applied to both log axes.
const AXIS_PAD: f64 = 1.25;

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type SvgResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;

/// Render `chart` to an SVG file at `path`.
pub fn render_svg_file(
    chart: &ConvergenceChart,
    path: &Path,
    size: (u32, u32),
    theme: &ChartTheme,
) -> Result<(), AppError> {
    let bounds = axis_bounds(chart)?;

    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(root, chart, bounds, theme)
        .map_err(|e| AppError::Render(format!("'{}': {e}", path.display())))?;

    info!(path = %path.display(), width = size.0, height = size.1, "wrote chart");
    Ok(())
}

/// Render `chart` to an SVG document held in memory.
pub fn render_svg_string(chart: &ConvergenceChart, size: (u32, u32), theme: &ChartTheme) -> Result<String, AppError> {
    let bounds = axis_bounds(chart)?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(root, chart, bounds, theme).map_err(|e| AppError::Render(e.to_string()))?;
    }
    Ok(svg)
}

/// Padded axis ranges, checked before they reach Plotters. Plotters sizes its
/// tick loop from `hi / lo`, so a range whose span overflows `f64` is refused
/// along with non-finite or empty ranges.
fn axis_bounds(chart: &ConvergenceChart) -> Result<([f64; 2], [f64; 2]), AppError> {
    let (x, y) = log_bounds(chart, AXIS_PAD)
        .ok_or_else(|| AppError::Render("no positive data points to plot".to_string()))?;

    for (axis, [lo, hi]) in [("x", x), ("y", y)] {
        if !(plottable(lo) && plottable(hi) && lo < hi && (hi / lo).is_finite()) {
            return Err(AppError::Render(format!("invalid {axis} axis range [{lo}, {hi}]")));
        }
    }

    for series in &chart.series {
        if let Some(&(px, py)) = series.points.iter().find(|&&(px, py)| !(plottable(px) && plottable(py))) {
            return Err(AppError::Render(format!(
                "series '{}' has point ({px}, {py}) that cannot be placed on a log axis",
                series.label
            )));
        }
    }

    Ok((x, y))
}

fn draw_chart(
    root: SvgArea<'_>,
    chart: &ConvergenceChart,
    (x, y): ([f64; 2], [f64; 2]),
    theme: &ChartTheme,
) -> SvgResult {
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((x[0]..x[1]).log_scale(), (y[0]..y[1]).log_scale())?;

    let grid = RGBColor(theme.grid_gray, theme.grid_gray, theme.grid_gray);
    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style(("sans-serif", theme.axis_desc_font))
        .label_style(("sans-serif", theme.tick_font))
        .bold_line_style(&grid.mix(0.6))
        .light_line_style(&grid.mix(0.15))
        .draw()?;

    let line_width = theme.line_width;
    let marker = theme.marker_size;

    for series in &chart.series {
        let (r, g, b) = series.style.rgb;
        let color = RGBColor(r, g, b);
        let (fr, fg, fb) = series.style.marker_face;
        let face = RGBColor(fr, fg, fb);
        let stroke = color.stroke_width(line_width);
        let points = series.points.iter().copied();

        let anno = match series.style.line {
            LineKind::Solid => ctx.draw_series(LineSeries::new(points, stroke))?,
            LineKind::Dashed => ctx.draw_series(DashedLineSeries::new(
                points,
                theme.dash_size,
                theme.dash_spacing,
                stroke,
            ))?,
        };
        anno.label(series.label.as_str());

        match series.style.marker {
            MarkerKind::None => {
                anno.legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(line_width)));
            }
            MarkerKind::Diamond => {
                anno.legend(move |(lx, ly)| {
                    EmptyElement::at((lx + 10, ly))
                        + PathElement::new(vec![(-10, 0), (10, 0)], color.stroke_width(line_width))
                        + Polygon::new(diamond(marker), face.filled())
                        + PathElement::new(diamond_outline(marker), color.stroke_width(line_width))
                });
                ctx.draw_series(series.points.iter().map(|&p| {
                    EmptyElement::at(p)
                        + Polygon::new(diamond(marker), face.filled())
                        + PathElement::new(diamond_outline(marker), color.stroke_width(line_width))
                }))?;
            }
        }

        debug!(label = %series.label, points = series.points.len(), "drew series");
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font(("sans-serif", theme.legend_font))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Diamond outline of half-width `r` around the origin, in pixels.
fn diamond(r: i32) -> Vec<(i32, i32)> {
    vec![(0, -r), (r, 0), (0, r), (-r, 0)]
}

/// Closed outline of `diamond(r)`.
fn diamond_outline(r: i32) -> Vec<(i32, i32)> {
    let mut path = diamond(r);
    path.push((0, -r));
    path
}
