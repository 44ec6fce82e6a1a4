//! Convergence tests for numerical methods
//!
//! These tests verify that solvers and quadrature rules exhibit the
//! expected convergence rates when refining the step.

use numplot_rs::models::ExponentialDecay;
use numplot_rs::quadrature::{Interval, QuadratureRule, RectangleRule, TrapezoidRule};
use numplot_rs::solver::{EulerSolver, RK4Solver, Solver, StepConfiguration};

mod common;
use common::{convergence_ratios, Cubic, HarmonicOscillator, LogisticGrowth};

/// Absolute error of x(t_end) for a given solver and step
fn final_error(solver: &dyn Solver, model: &ExponentialDecay, t_end: f64, dt: f64) -> f64 {
    let trajectory = solver
        .solve(model, &StepConfiguration::new(0.0, t_end, dt))
        .unwrap();

    (trajectory.final_state().unwrap()[0] - model.analytical_solution(t_end)).abs()
}

#[test]
fn test_euler_first_order_convergence() {
    // Euler should have first-order convergence: error ~ O(dt)
    // When dt → dt/2, error should → error/2
    let model = ExponentialDecay::new(0.3, 1.0);
    let total_time = 10.0;

    let errors: Vec<f64> = [100, 200, 400, 800]
        .iter()
        .map(|&steps| final_error(&EulerSolver, &model, total_time, total_time / steps as f64))
        .collect();

    for (i, ratio) in convergence_ratios(&errors).iter().enumerate() {
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 2 for first-order
        assert!(
            *ratio > 1.8 && *ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt^4)
    // When dt → dt/2, error should → error/16
    let model = ExponentialDecay::new(0.3, 1.0);
    let total_time = 5.0;

    let errors: Vec<f64> = [10, 20, 40, 80]
        .iter()
        .map(|&steps| final_error(&RK4Solver, &model, total_time, total_time / steps as f64))
        .collect();

    for (i, ratio) in convergence_ratios(&errors).iter().enumerate() {
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 16 for fourth-order
        assert!(
            *ratio > 12.0 && *ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_rectangle_first_order_convergence() {
    // Left rectangles on x³ over [0, 2]: error = 4h - h²
    let exact = Cubic.exact_integral(0.0, 2.0);

    let errors: Vec<f64> = [10, 20, 40, 80]
        .iter()
        .map(|&n| {
            let interval = Interval::new(0.0, 2.0, n).unwrap();
            (RectangleRule.approximate(&Cubic, &interval) - exact).abs()
        })
        .collect();

    for ratio in convergence_ratios(&errors) {
        assert!(ratio > 1.8 && ratio < 2.2, "Convergence ratio {} not first-order", ratio);
    }
}

#[test]
fn test_trapezoid_second_order_convergence() {
    // Trapezoids on x³ over [0, 2]: error = h²
    let exact = Cubic.exact_integral(0.0, 2.0);

    let errors: Vec<f64> = [10, 20, 40, 80]
        .iter()
        .map(|&n| {
            let interval = Interval::new(0.0, 2.0, n).unwrap();
            (TrapezoidRule.approximate(&Cubic, &interval) - exact).abs()
        })
        .collect();

    for ratio in convergence_ratios(&errors) {
        assert!(ratio > 3.6 && ratio < 4.4, "Convergence ratio {} not second-order", ratio);
    }
}

#[test]
fn test_nonlinear_model_rk4_beats_euler() {
    let model = LogisticGrowth { rate: 1.0, x0: 0.1 };
    let config = StepConfiguration::new(0.0, 5.0, 0.05);

    let euler_error = EulerSolver.solve(&model, &config).unwrap().max_abs_error(&model).unwrap();
    let rk4_error = RK4Solver.solve(&model, &config).unwrap().max_abs_error(&model).unwrap();

    assert!(
        rk4_error * 100.0 < euler_error,
        "RK4 error {} not far below Euler error {}",
        rk4_error,
        euler_error
    );
}

#[test]
fn test_oscillator_energy() {
    // Euler spirals outwards, RK4 stays on the circle x² + v² = 1
    let model = HarmonicOscillator { omega: 1.0 };
    let period = 2.0 * std::f64::consts::PI;
    let config = StepConfiguration::new(0.0, period, period / 200.0);

    let energy = |solver: &dyn Solver| {
        let trajectory = solver.solve(&model, &config).unwrap();
        let state = trajectory.final_state().unwrap().clone();
        state[0] * state[0] + state[1] * state[1]
    };

    assert!(energy(&EulerSolver) > 1.1);
    assert!((energy(&RK4Solver) - 1.0).abs() < 1e-6);
}
