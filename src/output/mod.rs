//! Output module for demo figures
//!
//! Figures are written as PNG or SVG images, chosen by file extension.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── chart.rs
//!     ├── quadrature.rs
//!     └── trajectory.rs
//! ```
//!
//! Renderers only draw: they receive precomputed samples, cells and
//! trajectories and never evaluate a method themselves.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_rectangles,
    plot_trajectory,
    plot_trapezoids,
    PlotConfig,
};
