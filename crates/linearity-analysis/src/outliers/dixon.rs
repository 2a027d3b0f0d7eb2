//! Dixon's Q-test for a single outlier in a small sample.

use linearity_core::constants::{DIXON_MAX_SAMPLE, DIXON_MIN_SAMPLE};
use linearity_core::errors::OutlierError;

use super::qtable;
use super::types::{DixonConfig, DixonOutcome};

/// Run Dixon's Q-test on one replicate set.
///
/// Preconditions, first failure wins: alpha must be a tabulated level,
/// the sample must be non-empty, and every value must be finite. A sample
/// size outside [3, 30] skips the test and returns the input untouched;
/// the statistic is undefined there, so skipping is correct, not an error.
///
/// The minimum is tested when `config.left` is set, the maximum when
/// `config.right` is set. Q statistics are rounded to 3 decimals (the
/// published tables carry 3 significant figures). A zero range makes both
/// statistics undefined: no candidate, no division panic.
pub fn detect(data: &[f64], config: DixonConfig) -> Result<DixonOutcome, OutlierError> {
    if !qtable::supported_alpha(config.alpha) {
        return Err(OutlierError::AlphaNotValid(config.alpha));
    }
    if data.is_empty() {
        return Err(OutlierError::DataIsEmpty);
    }
    if data.len() < DIXON_MIN_SAMPLE || data.len() > DIXON_MAX_SAMPLE {
        return Ok(DixonOutcome::untouched(data));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(OutlierError::DataNotNumber);
    }

    let n = data.len();
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let range = sorted[n - 1] - sorted[0];

    let q_left = (config.left && range != 0.0)
        .then(|| round3((sorted[1] - sorted[0]).abs() / range.abs()));
    let q_right = (config.right && range != 0.0)
        .then(|| round3((sorted[n - 2] - sorted[n - 1]).abs() / range.abs()));

    // Lookup cannot fail: alpha and n were both checked above.
    let Some(critical) = qtable::critical_value(config.alpha, n) else {
        return Ok(DixonOutcome::untouched(data));
    };

    let exceeds = |q: Option<f64>| q.is_some_and(|q| q > critical);

    // Two equal statistics cannot single out an extreme, so no outlier.
    if q_left == q_right {
        return Ok(DixonOutcome::untouched(data));
    }
    if exceeds(q_left) {
        Ok(remove(data, sorted[0]))
    } else if exceeds(q_right) {
        Ok(remove(data, sorted[n - 1]))
    } else {
        Ok(DixonOutcome::untouched(data))
    }
}

/// Remove the first occurrence of `value`, tracking its original index.
fn remove(data: &[f64], value: f64) -> DixonOutcome {
    // The extreme came out of a sort of this very slice.
    let Some(index) = data.iter().position(|v| *v == value) else {
        return DixonOutcome::untouched(data);
    };
    let cleaned = data
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, v)| *v)
        .collect();
    DixonOutcome {
        outliers: vec![value],
        outlier_indices: vec![index],
        cleaned,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
