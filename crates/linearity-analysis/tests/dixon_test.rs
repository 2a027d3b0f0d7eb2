//! Reference cases for Dixon Q outlier detection.
//!
//! Each case pins the flagged values and the cleaned sample for a
//! documented replicate set, across significance levels and one-sided
//! configurations.

use linearity_analysis::outliers::{detect, DixonConfig, DixonOutcome};
use linearity_core::errors::OutlierError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config(left: bool, right: bool, alpha: f64) -> DixonConfig {
    DixonConfig { left, right, alpha }
}

fn run(data: &[f64], cfg: DixonConfig) -> DixonOutcome {
    detect(data, cfg).expect("valid detection input")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn flags_gross_high_outlier() {
    let data = [0.100, 0.150, 0.200, 0.100, 0.200, 10.0];
    let outcome = run(&data, config(true, true, 0.05));
    assert_eq!(outcome.outliers, vec![10.0]);
    assert_eq!(outcome.outlier_indices, vec![5]);
    assert_eq!(outcome.cleaned, vec![0.100, 0.150, 0.200, 0.100, 0.200]);
}

#[test]
fn flags_low_outlier_at_five_percent() {
    let data = [0.142, 0.153, 0.135, 0.002, 0.175];
    let outcome = run(&data, config(true, true, 0.05));
    assert_eq!(outcome.outliers, vec![0.002]);
    assert_eq!(outcome.outlier_indices, vec![3]);
    assert_eq!(outcome.cleaned, vec![0.142, 0.153, 0.135, 0.175]);
}

#[test]
fn borderline_sample_is_kept_at_five_percent() {
    // With 0.542 in the sample neither extreme exceeds the 5% threshold.
    let data = [0.542, 0.153, 0.135, 0.002, 0.175];
    let outcome = run(&data, config(true, true, 0.05));
    assert!(outcome.outliers.is_empty());
    assert_eq!(outcome.cleaned, data.to_vec());
}

#[test]
fn borderline_sample_is_flagged_at_ten_percent() {
    let data = [0.542, 0.153, 0.135, 0.002, 0.175];
    let outcome = run(&data, config(true, true, 0.10));
    assert_eq!(outcome.outliers, vec![0.542]);
    assert_eq!(outcome.outlier_indices, vec![0]);
    assert_eq!(outcome.cleaned, vec![0.153, 0.135, 0.002, 0.175]);
}

#[test]
fn right_sided_test_ignores_low_extreme() {
    let data = [0.142, 0.153, 0.135, 0.002, 0.175, 0.542];
    let outcome = run(&data, config(false, true, 0.05));
    assert_eq!(outcome.outliers, vec![0.542]);
    assert_eq!(outcome.cleaned, vec![0.142, 0.153, 0.135, 0.002, 0.175]);
}

#[test]
fn left_sided_test_ignores_high_extreme() {
    let data = [0.142, 0.153, 0.135, 0.002, 0.175];
    let outcome = run(&data, config(true, false, 0.05));
    assert_eq!(outcome.outliers, vec![0.002]);
    assert_eq!(outcome.cleaned, vec![0.142, 0.153, 0.135, 0.175]);
}

#[test]
fn single_removal_per_invocation() {
    // Two gross extremes: only the larger Q statistic is removed.
    let data = [0.001, 0.150, 0.151, 0.152, 0.149, 25.0];
    let outcome = run(&data, config(true, true, 0.05));
    assert_eq!(outcome.outliers.len(), 1);
    assert_eq!(outcome.cleaned.len(), 5);
}

#[test]
fn sample_size_outside_window_is_untouched() {
    let small = [1.0, 100.0];
    let outcome = run(&small, config(true, true, 0.05));
    assert!(outcome.outliers.is_empty());
    assert_eq!(outcome.cleaned, small.to_vec());

    let large: Vec<f64> = (0..31).map(f64::from).collect();
    let outcome = run(&large, config(true, true, 0.05));
    assert!(outcome.outliers.is_empty());
    assert_eq!(outcome.cleaned, large);
}

#[test]
fn rejects_unsupported_alpha() {
    let data = [0.1, 0.2, 0.3];
    for alpha in [0.0, 0.02, 0.5, 1.0, -0.05] {
        let err = detect(&data, config(true, true, alpha)).unwrap_err();
        assert_eq!(err, OutlierError::AlphaNotValid(alpha));
    }
}

#[test]
fn rejects_empty_and_non_numeric_samples() {
    let err = detect(&[], config(true, true, 0.05)).unwrap_err();
    assert_eq!(err, OutlierError::DataIsEmpty);

    let err = detect(&[0.1, f64::NAN, 0.3], config(true, true, 0.05)).unwrap_err();
    assert_eq!(err, OutlierError::DataNotNumber);
}
