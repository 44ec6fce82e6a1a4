//! Mock models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating quadrature and solver accuracy.

use nalgebra::DVector;
use numplot_rs::models::{OdeModel, ScalarFunction};

// =================================================================================================
// Cubic: f(x) = x³
// =================================================================================================

/// f(x) = x³, ∫_a^b f = (b⁴ - a⁴) / 4
pub struct Cubic;

impl Cubic {
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        (b.powi(4) - a.powi(4)) / 4.0
    }
}

impl ScalarFunction for Cubic {
    fn evaluate(&self, x: f64) -> f64 {
        x * x * x
    }

    fn name(&self) -> &str {
        "x^3"
    }
}

// =================================================================================================
// Logistic growth: dx/dt = r·x·(1 - x)
// =================================================================================================

/// Logistic growth, nonlinear with closed form
///
/// Analytical solution: x(t) = 1 / (1 + (1/x₀ - 1)·e^{-rt})
pub struct LogisticGrowth {
    pub rate: f64,
    pub x0: f64,
}

impl OdeModel for LogisticGrowth {
    fn rhs(&self, _t: f64, state: &DVector<f64>) -> DVector<f64> {
        state.map(|x| self.rate * x * (1.0 - x))
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.x0])
    }

    fn exact_solution(&self, t: f64) -> Option<DVector<f64>> {
        let x = 1.0 / (1.0 + (1.0 / self.x0 - 1.0) * (-self.rate * t).exp());
        Some(DVector::from_vec(vec![x]))
    }

    fn name(&self) -> &str {
        "Logistic Growth"
    }
}

// =================================================================================================
// Harmonic oscillator: x'' = -ω²x
// =================================================================================================

/// Two-component system (x, v), starting at rest from x = 1
pub struct HarmonicOscillator {
    pub omega: f64,
}

impl OdeModel for HarmonicOscillator {
    fn rhs(&self, _t: f64, state: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![state[1], -self.omega * self.omega * state[0]])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![1.0, 0.0])
    }

    fn exact_solution(&self, t: f64) -> Option<DVector<f64>> {
        Some(DVector::from_vec(vec![
            (self.omega * t).cos(),
            -self.omega * (self.omega * t).sin(),
        ]))
    }

    fn name(&self) -> &str {
        "Harmonic Oscillator"
    }
}
