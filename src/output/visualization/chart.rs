//! Chart scaffolding shared by the quadrature and trajectory figures
//!
//! Every figure has the same frame: title, axis labels, light grid, legend
//! box. Only the series drawn inside differ.

use std::error::Error;
use std::ops::Range;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::PlotConfig;

/// Cartesian f64 × f64 chart used by every figure
pub(crate) type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Fraction of the data span added on each side of an axis
pub(crate) const AXIS_MARGIN: f64 = 0.05;

/// Samples per dash (and per gap) of a dashed curve
pub(crate) const DASH_SAMPLES: usize = 2;

/// Output path selects the backend: `.svg` → SVG, anything else → bitmap
pub(crate) fn is_svg(output_path: &str) -> bool {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Axis range covering [min, max] plus `fraction` of the span on each side
///
/// A degenerate span (min == max) is widened by one unit so the axis stays
/// drawable.
pub(crate) fn padded_range(min: f64, max: f64, fraction: f64) -> Range<f64> {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return (min - 0.5)..(max + 0.5);
    }
    (min - fraction * span)..(max + fraction * span)
}

/// Axis range starting at zero, for areas under a curve
pub(crate) fn range_from_zero(max: f64, fraction: f64) -> Range<f64> {
    let top = max.max(1e-10);
    0.0..(top * (1.0 + fraction))
}

/// Split a sampled curve into alternating dashes and gaps
///
/// Each dash covers `dash` consecutive sample intervals and is followed by a
/// gap of the same length.
pub(crate) fn dash_pattern(points: &[(f64, f64)], dash: usize) -> Vec<Vec<(f64, f64)>> {
    let dash = dash.max(1);
    let mut dashes = Vec::new();
    let mut start = 0;

    while start + 1 < points.len() {
        let end = (start + dash).min(points.len() - 1);
        dashes.push(points[start..=end].to_vec());
        start = end + dash;
    }

    dashes
}

/// Fill the background, then draw caption, axes, labels and grid
pub(crate) fn build_chart<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<Chart<'a, DB>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let font = config.font_family.as_str();
    let title_px = config.points_to_pixels(14.0);
    let axis_desc_px = config.points_to_pixels(12.0);
    let tick_px = config.points_to_pixels(10.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, (font, title_px).into_font())
        .margin(config.points_to_pixels(8.0))
        .x_label_area_size(config.points_to_pixels(36.0))
        .y_label_area_size(config.points_to_pixels(44.0))
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .label_style((font, tick_px))
        .axis_desc_style((font, axis_desc_px))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.08));

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    Ok(chart)
}

/// Draw the legend box if enabled
pub(crate) fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    config: &PlotConfig,
    position: SeriesLabelPosition,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    if !config.show_legend {
        return Ok(());
    }

    chart
        .configure_series_labels()
        .position(position)
        .label_font((config.font_family.as_str(), config.points_to_pixels(11.0)))
        .background_style(config.background.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg() {
        assert!(is_svg("plot.svg"));
        assert!(is_svg("images/plot.SVG"));
        assert!(!is_svg("images/003_rectangles.png"));
        assert!(!is_svg("no_extension"));
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range(0.0, 2.0, 0.05);
        assert!((range.start + 0.1).abs() < 1e-12);
        assert!((range.end - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_degenerate() {
        let range = padded_range(1.0, 1.0, 0.05);
        assert_eq!(range, 0.5..1.5);
    }

    #[test]
    fn test_range_from_zero() {
        let range = range_from_zero(2.0, 0.05);
        assert_eq!(range.start, 0.0);
        assert!((range.end - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_dash_pattern_alternates() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 0.0)).collect();
        let dashes = dash_pattern(&points, 2);

        // [0..=2], gap 2..4, [4..=6], gap 6..8, [8..=9]
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0].first(), Some(&(0.0, 0.0)));
        assert_eq!(dashes[0].last(), Some(&(2.0, 0.0)));
        assert_eq!(dashes[1].first(), Some(&(4.0, 0.0)));
        assert_eq!(dashes[2].last(), Some(&(9.0, 0.0)));
    }

    #[test]
    fn test_dash_pattern_short_input() {
        assert!(dash_pattern(&[], 2).is_empty());
        assert!(dash_pattern(&[(0.0, 0.0)], 2).is_empty());
        assert_eq!(dash_pattern(&[(0.0, 0.0), (1.0, 1.0)], 2).len(), 1);
    }
}
