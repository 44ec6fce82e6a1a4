//! Model traits
//!
//! Two kinds of closed-form functions are plotted:
//! - `ScalarFunction`: y = f(x), the integrand of the quadrature demos
//! - `OdeModel`: dx/dt = f(t, x), the right-hand side of the solver demos

use nalgebra::DVector;

// =================================================================================================
// Scalar function (quadrature integrand)
// =================================================================================================

/// A scalar function of one variable
///
/// # Example
///
/// ```rust
/// use numplot_rs::models::{Parabola, ScalarFunction};
///
/// let f = Parabola::default();
/// assert_eq!(f.evaluate(2.0), 1.0);
/// ```
pub trait ScalarFunction {
    /// Evaluate f(x)
    fn evaluate(&self, x: f64) -> f64;

    /// Human readable name, used in logs and legends
    fn name(&self) -> &str;
}

// =================================================================================================
// ODE model (solver right-hand side)
// =================================================================================================

/// Right-hand side of an ordinary differential equation dx/dt = f(t, x)
///
/// The state is a `DVector<f64>` so that systems can be integrated with the
/// same solvers. The demos only use one-component states.
///
/// # Implementing
///
/// ```rust
/// use nalgebra::DVector;
/// use numplot_rs::models::OdeModel;
///
/// struct Constant;
///
/// impl OdeModel for Constant {
///     fn rhs(&self, _t: f64, state: &DVector<f64>) -> DVector<f64> {
///         DVector::from_element(state.len(), 1.0)
///     }
///     fn initial_state(&self) -> DVector<f64> { DVector::from_vec(vec![0.0]) }
///     fn name(&self) -> &str { "Constant" }
/// }
/// ```
pub trait OdeModel {
    /// Evaluate f(t, x)
    fn rhs(&self, t: f64, state: &DVector<f64>) -> DVector<f64>;

    /// State at the start of the integration
    fn initial_state(&self) -> DVector<f64>;

    /// Exact solution at time `t`, when known in closed form
    ///
    /// Models with a closed form assume the integration starts at t = 0.
    fn exact_solution(&self, _t: f64) -> Option<DVector<f64>> {
        None
    }

    /// Human readable name, used in logs and legends
    fn name(&self) -> &str;
}
