//! Fixed-step ODE solvers
//!
//! A solver applies a numerical method to the right-hand side provided by an
//! [`OdeModel`](crate::models::OdeModel).
//!
//! # Core Concepts
//!
//! 1. **Model** (`OdeModel`) - WHAT to solve: dx/dt = f(t, x) and x₀
//! 2. **Configuration** (`StepConfiguration`) - HOW to step: t_start, t_end, T
//! 3. **Solver** (`Solver` trait) - the numerical method
//!
//! The same model can be integrated by different solvers, which is exactly
//! what the Euler and RK4 figures compare.
//!
//! # Stepping Rule
//!
//! Starting from (t_start, x₀), the solver checks `t < t_end`, takes one
//! step, and appends the new (t, x) pair. The trajectory therefore holds
//! `ceil((t_end - t_start) / T) + 1` points.
//!
//! # Quick Start
//!
//! ```rust
//! use numplot_rs::models::ExponentialDecay;
//! use numplot_rs::solver::{EulerSolver, Solver, StepConfiguration};
//!
//! let model = ExponentialDecay::default();
//! let config = StepConfiguration::new(0.0, 2.0, 0.5);
//!
//! let trajectory = EulerSolver::new().solve(&model, &config)?;
//! assert_eq!(trajectory.component(0), vec![1.0, 0.5, 0.25, 0.125, 0.0625]);
//! # Ok::<(), String>(())
//! ```
//!
//! # Error Handling
//!
//! All solver methods return `Result<T, String>`. Common errors:
//! - invalid configuration (non-positive step, end before start)
//! - numerical instability (NaN or Inf in a state)

// =================================================================================================
// Module Declarations
// =================================================================================================

mod traits;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Solver, StepConfiguration, Trajectory, MAX_STEPS};
pub use methods::{EulerSolver, RK4Solver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a state for numerical issues
///
/// # Arguments
///
/// * `state` - State to validate
/// * `step` - Step index (for error reporting)
///
/// # Returns
///
/// `Ok(())` if every component is finite, `Err(msg)` otherwise
pub(crate) fn validate_state(state: &DVector<f64>, step: usize) -> Result<(), String> {
    if state.iter().any(|x| x.is_nan()) {
        return Err(format!(
            "NaN detected at step {}. This indicates numerical instability. \
             Try reducing the step size.",
            step
        ));
    }

    if state.iter().any(|x| x.is_infinite()) {
        return Err(format!(
            "Infinity detected at step {}. This indicates numerical overflow. \
             Try reducing the step size.",
            step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
