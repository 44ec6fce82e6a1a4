//! numplot-rs: Figures for an introductory numerical methods course
//!
//! Renders the four classic pictures of a first numerical methods lecture:
//! left rectangles and trapezoids under a curve, and the Euler and RK4
//! trajectories of dx/dt = -x against the exact solution.
//!
//! # Architecture
//!
//! numplot-rs keeps three concerns apart:
//!
//! 1. **Models** define what is evaluated (integrands, ODE right-hand sides)
//! 2. **Methods** define how it is approximated (quadrature rules, solvers)
//! 3. **Output** draws precomputed data and writes images
//!
//! # Quick Start
//!
//! ```rust
//! use numplot_rs::models::{ExponentialDecay, Parabola};
//! use numplot_rs::quadrature::{Interval, QuadratureRule, TrapezoidRule};
//! use numplot_rs::solver::{EulerSolver, Solver, StepConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Approximate an integral
//! let interval = Interval::new(0.5, 3.5, 4)?;
//! let area = TrapezoidRule.approximate(&Parabola::default(), &interval);
//! assert!((area - 3.6328125).abs() < 1e-12);
//!
//! // 2. Integrate an ODE
//! let config = StepConfiguration::new(0.0, 2.0, 0.5);
//! let trajectory = EulerSolver::new().solve(&ExponentialDecay::default(), &config)?;
//! assert_eq!(trajectory.len(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`models`]: Integrands and ODE models
//! - [`quadrature`]: Interval partitions and quadrature rules
//! - [`solver`]: Fixed-step ODE solvers
//! - [`output`]: Figure rendering
//! - [`figures`]: The four course figures and the full run

pub mod models;
pub mod quadrature;
pub mod solver;

pub mod output;
pub mod figures;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use numplot_rs::prelude::*;
    //! ```
    pub use crate::models::{ExponentialDecay,
                            OdeModel,
                            Parabola,
                            ScalarFunction};
    pub use crate::quadrature::{Interval,
                                QuadratureRule,
                                RectangleRule,
                                TrapezoidRule};
    pub use crate::solver::{Solver,
                            StepConfiguration,
                            Trajectory,
                            EulerSolver,
                            RK4Solver};
    pub use crate::output::PlotConfig;
}
