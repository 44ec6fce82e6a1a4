//! Helper functions for integration tests

use std::path::Path;

/// Assert that two series are close element-wise (within tolerance)
pub fn assert_series_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Length mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Ratios error[i] / error[i+1] between successive refinements
pub fn convergence_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|pair| pair[0] / pair[1]).collect()
}

/// Assert that an image file exists and is not empty
pub fn assert_image_written(path: &Path) {
    let metadata = std::fs::metadata(path)
        .unwrap_or_else(|e| panic!("{} was not written: {}", path.display(), e));
    assert!(metadata.len() > 0, "{} is empty", path.display());
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
