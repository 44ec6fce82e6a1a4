//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The simplest explicit scheme for dx/dt = f(t, x):
//!
//! ```text
//! x_{n+1} = x_n + T · f(t_n, x_n)
//! t_{n+1} = t_n + T
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(T))
//! - **Stability**: for dx/dt = λx, stable when |1 + λT| ≤ 1
//! - **Complexity**: 1 function evaluation per step
//!
//! For the course equation dx/dt = -x with T = 0.5, every step multiplies x
//! by (1 - T) = 0.5, giving 1, 0.5, 0.25, 0.125, 0.0625.

use nalgebra::DVector;

use crate::models::OdeModel;
use crate::solver::Solver;

/// Forward Euler time-stepping solver
///
/// # Example
///
/// ```rust
/// use numplot_rs::models::ExponentialDecay;
/// use numplot_rs::solver::{EulerSolver, Solver, StepConfiguration};
///
/// let trajectory = EulerSolver::new()
///     .solve(&ExponentialDecay::default(), &StepConfiguration::new(0.0, 2.0, 0.5))?;
///
/// assert_eq!(trajectory.len(), 5);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn step(&self, model: &dyn OdeModel, t: f64, state: &DVector<f64>, dt: f64) -> DVector<f64> {
        // x_{n+1} = x_n + T · f(t_n, x_n)
        state + model.rhs(t, state) * dt
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}
