//! Numerical solver traits and types
//!
//! - `StepConfiguration`: fixed-step time grid (HOW to step)
//! - `Trajectory`: ordered (t, x) pairs produced by a solver
//! - `Solver`: the numerical method, independent of the model

use std::collections::HashMap;

use nalgebra::DVector;

use crate::models::OdeModel;
use super::validate_state;

/// Tolerance on (t_end - t_start) / step before rounding up.
///
/// Keeps 2.0 / 0.5 at 4 steps when the quotient lands a few ulps above 4.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest number of steps a configuration may request
pub const MAX_STEPS: usize = u32::MAX as usize;

// =================================================================================================
// Step configuration
// =================================================================================================

/// Fixed-step time grid
///
/// The solver advances from `t_start` in steps of `step` while `t < t_end`,
/// checking the condition before each step. The number of steps is therefore
/// `ceil((t_end - t_start) / step)`, and the last time point may overshoot
/// `t_end` when the span is not a multiple of the step.
///
/// # Example
///
/// ```rust
/// use numplot_rs::solver::StepConfiguration;
///
/// let config = StepConfiguration::new(0.0, 2.0, 0.5);
/// config.validate()?;
/// assert_eq!(config.step_count(), 4);
/// assert_eq!(config.time_at(3), 1.5);
/// # Ok::<(), String>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfiguration {
    /// Initial time
    pub t_start: f64,

    /// Integration stops once t ≥ t_end
    pub t_end: f64,

    /// Fixed step T
    pub step: f64,
}

impl StepConfiguration {
    pub fn new(t_start: f64, t_end: f64, step: f64) -> Self {
        Self { t_start, t_end, step }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.t_start.is_finite() || !self.t_end.is_finite() {
            return Err(format!(
                "Time bounds must be finite, got [{}, {}]",
                self.t_start, self.t_end
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(format!("Step must be positive, got {}", self.step));
        }
        if self.t_end < self.t_start {
            return Err(format!(
                "End time {} is before start time {}",
                self.t_end, self.t_start
            ));
        }

        let steps = ((self.t_end - self.t_start) / self.step - STEP_COUNT_TOLERANCE).ceil();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(format!(
                "Step {} over [{}, {}] needs more than {} steps",
                self.step, self.t_start, self.t_end, MAX_STEPS
            ));
        }
        Ok(())
    }

    /// Number of steps taken before t ≥ t_end
    pub fn step_count(&self) -> usize {
        let span = self.t_end - self.t_start;
        if span <= 0.0 {
            return 0;
        }
        (span / self.step - STEP_COUNT_TOLERANCE).ceil().max(0.0) as usize
    }

    /// Time after `k` steps, t_k = t_start + k·T
    ///
    /// Computed from the index, not by accumulation.
    pub fn time_at(&self, k: usize) -> f64 {
        self.t_start + k as f64 * self.step
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Ordered sequence of (t, x) pairs, starting at (t_start, x₀)
///
/// Grows by exactly one element per solver step.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// t_0, t_1, ..., t_N
    pub time_points: Vec<f64>,

    /// x_0, x_1, ..., x_N
    pub states: Vec<DVector<f64>>,

    metadata: HashMap<String, String>,
}

impl Trajectory {
    pub fn new(time_points: Vec<f64>, states: Vec<DVector<f64>>) -> Result<Self, String> {
        if time_points.len() != states.len() {
            return Err(format!(
                "Time points and states must have same length, got {} and {}",
                time_points.len(),
                states.len()
            ));
        }
        Ok(Self { time_points, states, metadata: HashMap::new() })
    }

    /// Number of (t, x) pairs
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    pub fn final_state(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    /// Values of one state component over time
    pub fn component(&self, index: usize) -> Vec<f64> {
        self.states.iter().map(|state| state[index]).collect()
    }

    /// (t, x_index) pairs, ready for plotting
    pub fn points(&self, index: usize) -> Vec<(f64, f64)> {
        self.time_points
            .iter()
            .zip(self.states.iter())
            .map(|(t, state)| (*t, state[index]))
            .collect()
    }

    /// Absolute error against the model's exact solution at every time point
    ///
    /// Uses the largest component-wise difference. Returns `None` when the
    /// model has no closed form.
    pub fn errors_against(&self, model: &dyn OdeModel) -> Option<Vec<f64>> {
        self.time_points
            .iter()
            .zip(self.states.iter())
            .map(|(t, state)| {
                model
                    .exact_solution(*t)
                    .map(|exact| (state - exact).amax())
            })
            .collect()
    }

    /// Largest absolute error over the whole trajectory
    pub fn max_abs_error(&self, model: &dyn OdeModel) -> Option<f64> {
        self.errors_against(model)
            .map(|errors| errors.into_iter().fold(0.0, f64::max))
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Solver
// =================================================================================================

/// Fixed-step explicit ODE solver
///
/// Implementors provide the single-step update; the stepping loop, storage
/// and validation are shared.
pub trait Solver {
    /// Advance `state` from `t` to `t + dt`
    fn step(&self, model: &dyn OdeModel, t: f64, state: &DVector<f64>, dt: f64) -> DVector<f64>;

    /// Right-hand side evaluations per step
    fn evaluations_per_step(&self) -> usize;

    fn name(&self) -> &'static str;

    /// Integrate `model` over the configured time grid
    ///
    /// # Errors
    ///
    /// - invalid configuration
    /// - NaN or Inf in a state
    fn solve(&self, model: &dyn OdeModel, config: &StepConfiguration) -> Result<Trajectory, String> {
        config.validate()?;

        let steps = config.step_count();
        let dt = config.step;
        let capacity = steps
            .checked_add(1)
            .ok_or_else(|| format!("Step count {} overflows the trajectory length", steps))?;

        let mut state = model.initial_state();
        validate_state(&state, 0)?;

        let mut time_points = Vec::with_capacity(capacity);
        let mut states = Vec::with_capacity(capacity);

        time_points.push(config.t_start);
        states.push(state.clone());

        for k in 0..steps {
            let t = config.time_at(k);

            state = self.step(model, t, &state, dt);
            validate_state(&state, k + 1)?;

            log::debug!(
                "{} step {}: t = {:.4}, x = {:?}",
                self.name(),
                k + 1,
                config.time_at(k + 1),
                state.as_slice()
            );

            time_points.push(config.time_at(k + 1));
            states.push(state.clone());
        }

        let mut trajectory = Trajectory::new(time_points, states)?;

        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("model", model.name());
        trajectory.add_metadata("time steps", &steps.to_string());
        trajectory.add_metadata("dt", &dt.to_string());
        trajectory.add_metadata(
            "function evaluations",
            &(self.evaluations_per_step() * steps).to_string(),
        );

        Ok(trajectory)
    }
}
