//! Integration interval and uniform partition
//!
//! An [`Interval`] is the triple (a, b, n): bounds a < b split into n ≥ 1
//! sub-intervals of equal width h = (b - a) / n.

use crate::models::ScalarFunction;

/// A derived (x, f(x)) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    /// Evaluate `function` at `x`
    pub fn of<F: ScalarFunction + ?Sized>(function: &F, x: f64) -> Self {
        Self { x, y: function.evaluate(x) }
    }
}

/// Bounded interval [a, b] with a uniform partition into `n` sub-intervals
///
/// # Example
///
/// ```rust
/// use numplot_rs::quadrature::Interval;
///
/// let interval = Interval::new(0.5, 3.5, 4)?;
/// assert_eq!(interval.step(), 0.75);
/// assert_eq!(interval.node(2), 2.0);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
    n: usize,
}

impl Interval {
    /// Create a partitioned interval
    ///
    /// # Errors
    ///
    /// - a or b is not finite
    /// - a ≥ b
    /// - n = 0
    pub fn new(a: f64, b: f64, n: usize) -> Result<Self, String> {
        if !a.is_finite() || !b.is_finite() {
            return Err(format!("Interval bounds must be finite, got [{}, {}]", a, b));
        }
        if a >= b {
            return Err(format!("Lower bound {} must be strictly less than upper bound {}", a, b));
        }
        if n == 0 {
            return Err("Partition count must be greater than 0".to_string());
        }

        Ok(Self { a, b, n })
    }

    pub fn lower(&self) -> f64 {
        self.a
    }

    pub fn upper(&self) -> f64 {
        self.b
    }

    /// Number of sub-intervals
    pub fn partitions(&self) -> usize {
        self.n
    }

    /// Sub-interval width h = (b - a) / n
    pub fn step(&self) -> f64 {
        (self.b - self.a) / self.n as f64
    }

    /// Partition node x_i = a + i·h, for i in 0..=n
    ///
    /// Computed from the index, not by accumulation.
    pub fn node(&self, i: usize) -> f64 {
        if i == self.n {
            return self.b;
        }
        self.a + i as f64 * self.step()
    }

    /// All n + 1 partition nodes
    pub fn nodes(&self) -> Vec<f64> {
        (0..=self.n).map(|i| self.node(i)).collect()
    }

    /// `count` evenly spaced points from a to b (both included)
    pub fn linspace(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.a],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            self.b
                        } else {
                            self.a + (self.b - self.a) * (i as f64 / last)
                        }
                    })
                    .collect()
            }
        }
    }

    /// Evaluate `function` on `count` evenly spaced points
    ///
    /// Used for the dense reference curve drawn under the approximation.
    pub fn sample<F: ScalarFunction + ?Sized>(&self, function: &F, count: usize) -> Vec<SamplePoint> {
        self.linspace(count)
            .into_iter()
            .map(|x| SamplePoint::of(function, x))
            .collect()
    }
}
