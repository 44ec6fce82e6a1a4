//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{Cubic, HarmonicOscillator, LogisticGrowth};
pub use test_helpers::{
    assert_image_written,
    assert_series_close,
    convergence_ratios,
    relative_error,
};
