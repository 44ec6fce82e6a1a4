//! Performance benchmarks for the four numerical methods
//!
//! # What We're Measuring
//!
//! 1. **Solvers** (Euler vs RK4) on dx/dt = -x:
//!    - Euler: 1 function evaluation per step
//!    - RK4: 4 function evaluations per step
//!    - Expected ratio RK4 / Euler ≈ 4
//!
//! 2. **Quadrature rules** (left rectangles vs trapezoids) on the course
//!    parabola:
//!    - Rectangles: n evaluations
//!    - Trapezoids: n + 1 evaluations
//!    - Expected ratio ≈ 1
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench method_performance
//!
//! # Run only solver comparison
//! cargo bench --bench method_performance "Solver Comparison"
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use numplot_rs::models::{ExponentialDecay, Parabola};
use numplot_rs::quadrature::{Interval, QuadratureRule, RectangleRule, TrapezoidRule};
use numplot_rs::solver::{EulerSolver, RK4Solver, Solver, StepConfiguration};

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Euler and RK4 on the same problem, for growing step counts
///
/// Total time is fixed at 10, so the step is 10 / time_steps. Throughput is
/// reported in right-hand side evaluations.
fn benchmark_solver_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver Comparison");
    let model = ExponentialDecay::default();

    for time_steps in [100usize, 1_000, 10_000] {
        let config = StepConfiguration::new(0.0, 10.0, 10.0 / time_steps as f64);

        let solvers: [&dyn Solver; 2] = [&EulerSolver, &RK4Solver];
        for solver in solvers {
            group.throughput(Throughput::Elements(
                (time_steps * solver.evaluations_per_step()) as u64,
            ));

            group.bench_with_input(
                BenchmarkId::new(solver.name(), time_steps),
                &config,
                |b, config| {
                    b.iter(|| solver.solve(black_box(&model), black_box(config)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Cell construction and area sum for both quadrature rules
fn benchmark_quadrature_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadrature Rules");
    let function = Parabola::default();

    for n in [4usize, 100, 10_000] {
        let interval = Interval::new(0.5, 3.5, n).unwrap();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new(RectangleRule.name(), n), &interval, |b, interval| {
            b.iter(|| RectangleRule.approximate(black_box(&function), black_box(interval)));
        });

        group.bench_with_input(BenchmarkId::new(TrapezoidRule.name(), n), &interval, |b, interval| {
            b.iter(|| TrapezoidRule.approximate(black_box(&function), black_box(interval)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_solver_comparison,
    benchmark_quadrature_rules,
);
criterion_main!(benches);
