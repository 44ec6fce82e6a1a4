//! Exponential decay: dx/dt = -k·x
//!
//! Analytical solution: x(t) = x₀·exp(-k·t)
//!
//! With k = 1 and x₀ = 1 this is the test equation of the Euler and RK4
//! demos, dx/dt = -x, x(0) = 1.

use nalgebra::DVector;

use super::traits::OdeModel;

/// Exponential decay model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// k in dx/dt = -k·x
    pub decay_rate: f64,

    /// x(0)
    pub initial_value: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64, initial_value: f64) -> Self {
        Self { decay_rate, initial_value }
    }

    /// Scalar closed-form solution x₀·exp(-k·t)
    pub fn analytical_solution(&self, t: f64) -> f64 {
        self.initial_value * (-self.decay_rate * t).exp()
    }
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl OdeModel for ExponentialDecay {
    fn rhs(&self, _t: f64, state: &DVector<f64>) -> DVector<f64> {
        state * (-self.decay_rate)
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(1, self.initial_value)
    }

    fn exact_solution(&self, t: f64) -> Option<DVector<f64>> {
        Some(DVector::from_element(1, self.analytical_solution(t)))
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}
