//! Quadrature figures: continuous curve with rectangles or trapezoids
//!
//! # Usage
//!
//! ```rust,ignore
//! use numplot_rs::output::visualization::{plot_rectangles, PlotConfig};
//!
//! let curve = interval.sample(&f, 100);
//! let bars = RectangleRule.cells(&f, &interval);
//! plot_rectangles(&curve, &bars, "images/003_rectangles.png", None)?;
//! ```

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::quadrature::{Bar, SamplePoint, Trapezoid};
use super::chart::{self, AXIS_MARGIN};
use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a curve with left-endpoint rectangles underneath
///
/// # Arguments
///
/// * `curve`       — Dense samples of f over [a, b]
/// * `bars`        — One bar per sub-interval
/// * `output_path` — Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if `curve` is empty or the backend cannot write to `output_path`.
pub fn plot_rectangles(
    curve: &[SamplePoint],
    bars: &[Bar],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::integration(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (width, height) = config.pixel_size();
    let cells = Cells::Bars(bars);

    if chart::is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_quadrature_on_area(&root, curve, &cells, config)
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_quadrature_on_area(&root, curve, &cells, config)
    }
}

/// Plot a curve with trapezoids underneath
///
/// Same arguments and errors as [`plot_rectangles`], with one [`Trapezoid`]
/// per sub-interval.
pub fn plot_trapezoids(
    curve: &[SamplePoint],
    trapezoids: &[Trapezoid],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::integration(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (width, height) = config.pixel_size();
    let cells = Cells::Trapezoids(trapezoids);

    if chart::is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_quadrature_on_area(&root, curve, &cells, config)
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_quadrature_on_area(&root, curve, &cells, config)
    }
}

// =================================================================================================
// Implementation
// =================================================================================================

/// Geometry drawn under the curve
enum Cells<'a> {
    Bars(&'a [Bar]),
    Trapezoids(&'a [Trapezoid]),
}

impl Cells<'_> {
    /// Horizontal extent and tallest point of the cells
    fn bounds(&self) -> Option<(f64, f64, f64)> {
        let (x_min, x_max, y_max) = match self {
            Cells::Bars(bars) => bars.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(lo, hi, top), bar| (lo.min(bar.left), hi.max(bar.right()), top.max(bar.height)),
            ),
            Cells::Trapezoids(cells) => cells.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(lo, hi, top), cell| {
                    (lo.min(cell.left.x), hi.max(cell.right.x), top.max(cell.left.y).max(cell.right.y))
                },
            ),
        };

        if x_min.is_finite() && x_max.is_finite() {
            Some((x_min, x_max, y_max))
        } else {
            None
        }
    }
}

/// Draw curve and cells on any drawing area
fn draw_quadrature_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &[SamplePoint],
    cells: &Cells<'_>,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return Err("Empty curve: nothing to plot".into());
    };

    // Axes cover the curve and the cells, y always starts at 0
    let mut x_min = first.x.min(last.x);
    let mut x_max = first.x.max(last.x);
    let mut y_max = curve.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    if let Some((lo, hi, top)) = cells.bounds() {
        x_min = x_min.min(lo);
        x_max = x_max.max(hi);
        y_max = y_max.max(top);
    }

    let mut chart = chart::build_chart(
        root,
        config,
        chart::padded_range(x_min, x_max, AXIS_MARGIN),
        chart::range_from_zero(y_max, AXIS_MARGIN),
    )?;

    let stroke = config.stroke_px();
    let curve_style = config.reference_color.stroke_width(stroke);
    let edge_style = config.approximation_color.stroke_width(stroke);
    let fill_style = config.fill_style();

    // ── 1. Cells: translucent interior, then opaque edge ─────────────────────
    match cells {
        Cells::Bars(bars) => {
            chart.draw_series(bars.iter().map(|bar| Rectangle::new(bar.corners(), fill_style)))?;
            chart.draw_series(bars.iter().map(|bar| Rectangle::new(bar.corners(), edge_style)))?;
        }
        Cells::Trapezoids(trapezoids) => {
            chart.draw_series(
                trapezoids
                    .iter()
                    .map(|cell| Polygon::new(cell.vertices().to_vec(), fill_style)),
            )?;
            chart.draw_series(trapezoids.iter().map(|cell| {
                let mut outline = cell.vertices().to_vec();
                outline.push(outline[0]);
                PathElement::new(outline, edge_style)
            }))?;
        }
    }

    // ── 2. Continuous curve, above the cells ─────────────────────────────────
    chart
        .draw_series(LineSeries::new(curve.iter().map(|p| (p.x, p.y)), curve_style))?
        .label(config.reference_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], curve_style));

    chart::draw_legend(&mut chart, config, SeriesLabelPosition::UpperMiddle)?;

    root.present()?;

    log::info!("Rendered '{}'", config.title);
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
