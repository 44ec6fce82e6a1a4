//! Visualization module for quadrature and ODE demos
//!
//! This module renders figures using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **quadrature**: Curve with rectangles or trapezoids underneath
//! - **trajectory**: Exact solution against a numerical trajectory
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use numplot_rs::output::visualization::{plot_trajectory, PlotConfig};
//!
//! let trajectory = EulerSolver.solve(&model, &StepConfiguration::new(0.0, 2.0, 0.5))?;
//!
//! // Default config
//! plot_trajectory(&model, &trajectory, "euler.png", None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::ode("Euler");
//! config.approximation_label = Some("Euler".to_string());
//! plot_trajectory(&model, &trajectory, "euler.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Module
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Left rectangle rule | `quadrature` | `plot_rectangles` |
//! | Trapezoid rule | `quadrature` | `plot_trapezoids` |
//! | Euler / RK4 against exact solution | `trajectory` | `plot_trajectory` |

pub mod config;
mod chart;
pub mod quadrature;
pub mod trajectory;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use quadrature::{plot_rectangles, plot_trapezoids};

pub use trajectory::plot_trajectory;
