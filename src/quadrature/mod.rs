//! Composite quadrature on a uniform partition
//!
//! This module produces the geometry of the integration demos:
//!
//! - [`Interval`]: bounds and partition (a, b, n), width h = (b - a) / n
//! - [`RectangleRule`]: one [`Bar`] per sub-interval, height f(x_i)
//! - [`TrapezoidRule`]: one [`Trapezoid`] per sub-interval, chord f(x_i) → f(x_{i+1})
//!
//! # Example
//!
//! ```rust
//! use numplot_rs::models::Parabola;
//! use numplot_rs::quadrature::{Interval, QuadratureRule, RectangleRule};
//!
//! let f = Parabola::default();
//! let interval = Interval::new(0.5, 3.5, 4)?;
//!
//! let bars = RectangleRule.cells(&f, &interval);
//! assert_eq!(bars.len(), 4);
//!
//! let area = RectangleRule.approximate(&f, &interval);
//! assert!((area - 3.6328125).abs() < 1e-12);
//! # Ok::<(), String>(())
//! ```

mod interval;
mod rules;

pub use interval::{Interval, SamplePoint};
pub use rules::{Area, Bar, QuadratureRule, RectangleRule, Trapezoid, TrapezoidRule};
