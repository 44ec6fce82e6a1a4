//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates per step:
//!
//! ```text
//! k₁ = f(tₙ, xₙ)
//! k₂ = f(tₙ + T/2, xₙ + T/2 · k₁)
//! k₃ = f(tₙ + T/2, xₙ + T/2 · k₂)
//! k₄ = f(tₙ + T,   xₙ + T · k₃)
//!
//! xₙ₊₁ = xₙ + T/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(T⁴))
//! - **Complexity**: 4 function evaluations per step
//!
//! For dx/dt = -x each step multiplies x by 1 - T + T²/2 - T³/6 + T⁴/24,
//! the degree-4 Taylor polynomial of e^{-T}. With T = 0.5 that factor is
//! 0.6067708…, against e^{-0.5} = 0.6065306…

use nalgebra::DVector;

use crate::models::OdeModel;
use crate::solver::Solver;

/// Classical fourth-order Runge-Kutta solver
///
/// # Example
///
/// ```rust
/// use numplot_rs::models::ExponentialDecay;
/// use numplot_rs::solver::{RK4Solver, Solver, StepConfiguration};
///
/// let solver = RK4Solver::new();
/// assert_eq!(solver.name(), "Runge Kutta (RK4)");
///
/// let trajectory = solver.solve(&ExponentialDecay::default(), &StepConfiguration::new(0.0, 2.0, 0.5))?;
/// assert_eq!(trajectory.len(), 5);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn step(&self, model: &dyn OdeModel, t: f64, state: &DVector<f64>, dt: f64) -> DVector<f64> {
        let half = dt / 2.0;

        // Slope at the beginning of the interval
        let k1 = model.rhs(t, state);

        // Two midpoint slopes, each from an Euler prediction with the previous one
        let k2 = model.rhs(t + half, &(state + &k1 * half));
        let k3 = model.rhs(t + half, &(state + &k2 * half));

        // Slope at the end of the interval
        let k4 = model.rhs(t + dt, &(state + &k3 * dt));

        // Simpson weights 1/6, 2/6, 2/6, 1/6
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        state + weighted_slope * (dt / 6.0)
    }

    fn evaluations_per_step(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }
}
