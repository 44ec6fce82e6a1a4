//! The four course figures
//!
//! Each procedure computes its data from its own constants, renders one image
//! into `images_dir` and returns the computed data.
//!
//! | Procedure | Output file |
//! |-----------|-------------|
//! | [`render_rectangles`] | `003_rectangles.png` |
//! | [`render_trapezoids`] | `004_trapezoids.png` |
//! | [`render_euler`] | `005_euler.png` |
//! | [`render_rk4`] | `006_rk4.png` |
//!
//! The directory must already exist; a missing directory is reported as the
//! backend error.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use plotters::style::RGBColor;

use crate::models::{ExponentialDecay, Parabola, ScalarFunction};
use crate::output::visualization::{plot_rectangles, plot_trajectory, plot_trapezoids, PlotConfig};
use crate::quadrature::{Bar, Interval, QuadratureRule, RectangleRule, Trapezoid, TrapezoidRule};
use crate::solver::{EulerSolver, RK4Solver, Solver, StepConfiguration, Trajectory};

pub const RECTANGLES_FILE: &str = "003_rectangles.png";
pub const TRAPEZOIDS_FILE: &str = "004_trapezoids.png";
pub const EULER_FILE: &str = "005_euler.png";
pub const RK4_FILE: &str = "006_rk4.png";

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const GREEN: RGBColor = RGBColor(0, 128, 0);

// =================================================================================================
// Demo parameters
// =================================================================================================

/// Integration interval of the quadrature figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationDemo {
    pub a: f64,
    pub b: f64,
    pub n: usize,
    /// Samples of the continuous curve
    pub samples: usize,
}

impl IntegrationDemo {
    /// [0.5, 3.5] split into 4 sub-intervals (h = 0.75)
    pub fn course() -> Self {
        Self { a: 0.5, b: 3.5, n: 4, samples: 100 }
    }

    pub fn interval(&self) -> Result<Interval, String> {
        Interval::new(self.a, self.b, self.n)
    }
}

/// Initial value problem dx/dt = -x of the solver figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdeDemo {
    pub x0: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub step: f64,
}

impl OdeDemo {
    /// x(0) = 1 on [0, 2] with T = 0.5
    pub fn course() -> Self {
        Self { x0: 1.0, t_start: 0.0, t_end: 2.0, step: 0.5 }
    }

    pub fn model(&self) -> ExponentialDecay {
        ExponentialDecay::new(1.0, self.x0)
    }

    pub fn step_configuration(&self) -> StepConfiguration {
        StepConfiguration::new(self.t_start, self.t_end, self.step)
    }

    fn title(&self, method: &str) -> String {
        format!("{}: dx/dt = -x, x(0) = {}", method, self.x0)
    }
}

// =================================================================================================
// Figures
// =================================================================================================

fn output_path(images_dir: &Path, file_name: &str) -> Result<String, Box<dyn Error>> {
    let path = images_dir.join(file_name);
    let path = path.to_str().ok_or("Output path is not valid UTF-8")?;
    Ok(path.to_string())
}

/// Left rectangle rule on f(x) = (x - 2)² / 4 + 1
pub fn render_rectangles(images_dir: &Path) -> Result<Vec<Bar>, Box<dyn Error>> {
    let demo = IntegrationDemo::course();
    let function = Parabola::default();
    let interval = demo.interval()?;

    let curve = interval.sample(&function, demo.samples);
    let bars = RectangleRule.cells(&function, &interval);

    log::info!(
        "{} on [{}, {}], n = {}: {:.6} (exact {:.6})",
        RectangleRule.name(),
        demo.a,
        demo.b,
        demo.n,
        RectangleRule.approximate(&function, &interval),
        function.exact_integral(demo.a, demo.b)
    );

    let mut config = PlotConfig::integration("Метод левых прямоугольников");
    config.reference_label = function.name().to_string();

    plot_rectangles(&curve, &bars, &output_path(images_dir, RECTANGLES_FILE)?, Some(&config))?;
    Ok(bars)
}

/// Trapezoid rule on the same function and interval
pub fn render_trapezoids(images_dir: &Path) -> Result<Vec<Trapezoid>, Box<dyn Error>> {
    let demo = IntegrationDemo::course();
    let function = Parabola::default();
    let interval = demo.interval()?;

    let curve = interval.sample(&function, demo.samples);
    let trapezoids = TrapezoidRule.cells(&function, &interval);

    log::info!(
        "{} on [{}, {}], n = {}: {:.6} (exact {:.6})",
        TrapezoidRule.name(),
        demo.a,
        demo.b,
        demo.n,
        TrapezoidRule.approximate(&function, &interval),
        function.exact_integral(demo.a, demo.b)
    );

    let mut config = PlotConfig::integration("Метод трапеций");
    config.reference_label = function.name().to_string();
    config.fill_color = ORANGE;

    plot_trapezoids(&curve, &trapezoids, &output_path(images_dir, TRAPEZOIDS_FILE)?, Some(&config))?;
    Ok(trapezoids)
}

/// Solve the demo problem and plot it against the exact solution
fn render_solver(
    solver: &dyn Solver,
    images_dir: &Path,
    file_name: &str,
    config: &mut PlotConfig,
) -> Result<Trajectory, Box<dyn Error>> {
    let demo = OdeDemo::course();
    let model = demo.model();

    let trajectory = solver.solve(&model, &demo.step_configuration())?;

    if let Some(error) = trajectory.max_abs_error(&model) {
        log::info!(
            "{}: {} steps of T = {}, max |x - exact| = {:.3e}",
            solver.name(),
            trajectory.len() - 1,
            demo.step,
            error
        );
    }

    config.reference_label = "Точное решение".to_string();
    plot_trajectory(&model, &trajectory, &output_path(images_dir, file_name)?, Some(config))?;
    Ok(trajectory)
}

/// Forward Euler on dx/dt = -x
pub fn render_euler(images_dir: &Path) -> Result<Trajectory, Box<dyn Error>> {
    let mut config = PlotConfig::ode(OdeDemo::course().title("Метод Эйлера"));
    config.approximation_label = Some("Метод Эйлера".to_string());

    render_solver(&EulerSolver, images_dir, EULER_FILE, &mut config)
}

/// RK4 on dx/dt = -x
pub fn render_rk4(images_dir: &Path) -> Result<Trajectory, Box<dyn Error>> {
    let mut config = PlotConfig::ode(OdeDemo::course().title("Метод Рунге-Кутта 4"));
    config.approximation_label = Some("Метод RK4".to_string());
    config.approximation_color = GREEN;

    render_solver(&RK4Solver, images_dir, RK4_FILE, &mut config)
}

/// Render all four figures in order, writing one progress line after each
///
/// The first failure stops the run and is returned.
pub fn generate_all<W: Write>(images_dir: &Path, out: &mut W) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Генерация графиков...")?;

    render_rectangles(images_dir)?;
    writeln!(out, "✓ Метод прямоугольников")?;

    render_trapezoids(images_dir)?;
    writeln!(out, "✓ Метод трапеций")?;

    render_euler(images_dir)?;
    writeln!(out, "✓ Метод Эйлера")?;

    render_rk4(images_dir)?;
    writeln!(out, "✓ Метод Рунге-Кутта 4")?;

    writeln!(out, "Все графики созданы!")?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
