//! ODE trajectory figures: exact solution against a discrete approximation
//!
//! The exact solution is drawn as a dashed curve, the numerical trajectory as
//! a solid polyline with a filled marker at every computed point.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::models::OdeModel;
use crate::solver::Trajectory;
use super::chart::{self, AXIS_MARGIN, DASH_SAMPLES};
use super::config::{PlotConfig, NO_TITLE};

/// Plot the first state component of a trajectory against the exact solution
///
/// # Arguments
///
/// * `model`       — Supplies the exact solution; curve is omitted when it has none
/// * `trajectory`  — Discrete solution to draw with markers
/// * `output_path` — Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the trajectory is empty or the backend cannot write to
/// `output_path`.
///
/// # Example
///
/// ```rust,no_run
/// use numplot_rs::models::ExponentialDecay;
/// use numplot_rs::output::visualization::{plot_trajectory, PlotConfig};
/// use numplot_rs::solver::{RK4Solver, Solver, StepConfiguration};
///
/// let model = ExponentialDecay::default();
/// let trajectory = RK4Solver.solve(&model, &StepConfiguration::new(0.0, 2.0, 0.5))?;
///
/// let mut config = PlotConfig::ode("RK4");
/// config.approximation_label = Some("RK4".to_string());
/// plot_trajectory(&model, &trajectory, "rk4.png", Some(&config))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_trajectory(
    model: &dyn OdeModel,
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::ode(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (width, height) = config.pixel_size();

    if chart::is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_trajectory_on_area(&root, model, trajectory, config)
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_trajectory_on_area(&root, model, trajectory, config)
    }
}

/// Exact solution sampled at `samples` evenly spaced times over [t0, t1]
///
/// Empty when the model has no closed form.
fn exact_curve(model: &dyn OdeModel, t0: f64, t1: f64, samples: usize) -> Vec<(f64, f64)> {
    let samples = samples.max(2);
    let dt = (t1 - t0) / (samples - 1) as f64;

    (0..samples)
        .map(|i| if i == samples - 1 { t1 } else { t0 + i as f64 * dt })
        .map_while(|t| model.exact_solution(t).map(|state| (t, state[0])))
        .collect()
}

fn draw_trajectory_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model: &dyn OdeModel,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to plot".into());
    }

    let points = trajectory.points(0);
    let t0 = trajectory.time_points[0];
    let t1 = trajectory.time_points[trajectory.len() - 1];
    let exact = exact_curve(model, t0, t1, config.reference_samples);

    let (y_min, y_max) = points
        .iter()
        .chain(exact.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

    let mut chart = chart::build_chart(
        root,
        config,
        chart::padded_range(t0, t1, AXIS_MARGIN),
        chart::padded_range(y_min, y_max, AXIS_MARGIN),
    )?;

    let stroke = config.stroke_px();
    let radius = config.marker_radius_px();
    let exact_style = config.reference_color.stroke_width(stroke);
    let approx_style = config.approximation_color.stroke_width(stroke);
    let marker_style = config.approximation_color.filled();

    // ── 1. Exact solution, dashed ────────────────────────────────────────────
    if !exact.is_empty() {
        chart
            .draw_series(
                chart::dash_pattern(&exact, DASH_SAMPLES)
                    .into_iter()
                    .map(|dash| PathElement::new(dash, exact_style)),
            )?
            .label(config.reference_label.as_str())
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (7, 0)], exact_style)
                    + PathElement::new(vec![(13, 0), (20, 0)], exact_style)
            });
    }

    // ── 2. Numerical trajectory: polyline and markers ────────────────────────
    let line = chart.draw_series(LineSeries::new(points.iter().copied(), approx_style))?;
    if let Some(label) = &config.approximation_label {
        line.label(label.as_str()).legend(move |(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(0, 0), (20, 0)], approx_style)
                + Circle::new((10, 0), radius, marker_style)
        });
    }

    chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, marker_style)))?;

    chart::draw_legend(&mut chart, config, SeriesLabelPosition::UpperRight)?;

    root.present()?;

    log::info!("Rendered '{}' ({} points)", config.title, trajectory.len());
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
