//! Numerical methods for ordinary differential equations
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! | Method | Order | Evals/Step | Global error |
//! |--------|-------|------------|--------------|
//! | [`EulerSolver`] | 1 | 1 | O(T)  |
//! | [`RK4Solver`]   | 4 | 4 | O(T⁴) |
//!
//! Each solver is stateless and can be reused for any number of integrations.

mod euler;
mod rk4;

pub use euler::EulerSolver;
pub use rk4::RK4Solver;
