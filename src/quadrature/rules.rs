//! Rectangle and trapezoid rules
//!
//! Both rules turn a function and a partitioned interval into one geometric
//! cell per sub-interval. The cells are what the figures draw; the sum of
//! their areas is the approximate integral.
//!
//! ```text
//! Rectangle (left):  A_i = h · f(x_i)
//! Trapezoid:         A_i = h · (f(x_i) + f(x_{i+1})) / 2
//! ```

use crate::models::ScalarFunction;
use super::interval::{Interval, SamplePoint};

// =================================================================================================
// Cells
// =================================================================================================

/// Anything with a signed area under the curve
pub trait Area {
    fn area(&self) -> f64;
}

/// Rectangle of the left-endpoint rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left edge x_i
    pub left: f64,

    /// Sub-interval width h
    pub width: f64,

    /// f(x_i)
    pub height: f64,
}

impl Bar {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Centre of the sub-interval
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Opposite corners, bottom-left then top-right
    pub fn corners(&self) -> [(f64, f64); 2] {
        [(self.left, 0.0), (self.right(), self.height)]
    }
}

impl Area for Bar {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Quadrilateral of the trapezoid rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    /// (x_i, f(x_i))
    pub left: SamplePoint,

    /// (x_{i+1}, f(x_{i+1}))
    pub right: SamplePoint,
}

impl Trapezoid {
    /// Vertices in drawing order: (x_i, 0), (x_i, y_i), (x_{i+1}, y_{i+1}), (x_{i+1}, 0)
    pub fn vertices(&self) -> [(f64, f64); 4] {
        [
            (self.left.x, 0.0),
            (self.left.x, self.left.y),
            (self.right.x, self.right.y),
            (self.right.x, 0.0),
        ]
    }
}

impl Area for Trapezoid {
    fn area(&self) -> f64 {
        (self.right.x - self.left.x) * (self.left.y + self.right.y) / 2.0
    }
}

// =================================================================================================
// Rules
// =================================================================================================

/// A composite quadrature rule on a uniform partition
pub trait QuadratureRule {
    /// Geometry produced for each sub-interval
    type Cell: Area;

    /// One cell per sub-interval, in order
    fn cells<F: ScalarFunction + ?Sized>(&self, function: &F, interval: &Interval) -> Vec<Self::Cell>;

    /// Approximate ∫_a^b f(x) dx as the sum of cell areas
    fn approximate<F: ScalarFunction + ?Sized>(&self, function: &F, interval: &Interval) -> f64 {
        self.cells(function, interval).iter().map(Area::area).sum()
    }

    fn name(&self) -> &'static str;
}

/// Left-endpoint rectangle rule
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleRule;

impl QuadratureRule for RectangleRule {
    type Cell = Bar;

    fn cells<F: ScalarFunction + ?Sized>(&self, function: &F, interval: &Interval) -> Vec<Bar> {
        let h = interval.step();

        (0..interval.partitions())
            .map(|i| {
                let x_i = interval.node(i);
                Bar { left: x_i, width: h, height: function.evaluate(x_i) }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "Left Rectangles"
    }
}

/// Composite trapezoid rule
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidRule;

impl QuadratureRule for TrapezoidRule {
    type Cell = Trapezoid;

    fn cells<F: ScalarFunction + ?Sized>(&self, function: &F, interval: &Interval) -> Vec<Trapezoid> {
        // Each node is evaluated once and shared by two neighbouring cells
        let samples: Vec<SamplePoint> = interval
            .nodes()
            .into_iter()
            .map(|x| SamplePoint::of(function, x))
            .collect();

        samples
            .windows(2)
            .map(|pair| Trapezoid { left: pair[0], right: pair[1] })
            .collect()
    }

    fn name(&self) -> &'static str {
        "Trapezoids"
    }
}
