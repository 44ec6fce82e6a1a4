//! Shifted parabola used by the quadrature demos
//!
//! ```text
//! f(x) = (x - center)² / scale + offset
//! ```
//!
//! The defaults give the integrand of the course material,
//! f(x) = (x - 2)² / 4 + 1, whose minimum f(2) = 1 sits inside [0.5, 3.5].

use super::traits::ScalarFunction;

/// Shifted and scaled parabola
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    /// Abscissa of the vertex
    pub center: f64,

    /// Divisor of the squared term (must be non-zero)
    pub scale: f64,

    /// Value at the vertex
    pub offset: f64,
}

impl Parabola {
    pub fn new(center: f64, scale: f64, offset: f64) -> Self {
        Self { center, scale, offset }
    }

    /// Closed-form antiderivative F(x), with F(center) = 0
    pub fn antiderivative(&self, x: f64) -> f64 {
        let u = x - self.center;
        u.powi(3) / (3.0 * self.scale) + self.offset * u
    }

    /// Exact integral over [a, b]
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl Default for Parabola {
    fn default() -> Self {
        Self::new(2.0, 4.0, 1.0)
    }
}

impl ScalarFunction for Parabola {
    fn evaluate(&self, x: f64) -> f64 {
        (x - self.center).powi(2) / self.scale + self.offset
    }

    fn name(&self) -> &str {
        "f(x)"
    }
}
