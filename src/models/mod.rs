//! Closed-form functions plotted by the demos
//!
//! The numerical methods never look inside these functions: quadrature rules
//! only call [`ScalarFunction::evaluate`], solvers only call
//! [`OdeModel::rhs`]. Exact values are used for the reference curves.
//!
//! # Available Models
//!
//! ## [`Parabola`]: integrand of the quadrature demos
//!
//! f(x) = (x - 2)² / 4 + 1 by default.
//!
//! ## [`ExponentialDecay`]: right-hand side of the solver demos
//!
//! dx/dt = -x with exact solution x(t) = x₀·exp(-t) by default.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod traits;
pub mod parabola;
pub mod exponential_decay;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{OdeModel, ScalarFunction};
pub use parabola::Parabola;
pub use exponential_decay::ExponentialDecay;
