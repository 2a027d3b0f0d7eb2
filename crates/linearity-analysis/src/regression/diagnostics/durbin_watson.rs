//! Durbin-Watson first-order autocorrelation statistic.

use linearity_core::constants::{DURBIN_WATSON_LOWER, DURBIN_WATSON_UPPER};
use linearity_core::errors::RegressionError;

/// Compute the Durbin-Watson statistic over ordered residuals:
/// d = Σ(e_t − e_{t−1})² / Σe_t².
///
/// The statistic lies in [0, 4] by construction (2 means no
/// autocorrelation). A result outside that interval can only come from a
/// computation fault and is reported as such rather than passed downstream.
pub fn durbin_watson(residuals: &[f64]) -> Result<f64, RegressionError> {
    if residuals.len() < 2 {
        return Err(RegressionError::InsufficientData {
            needed: 2,
            got: residuals.len(),
        });
    }
    let denominator: f64 = residuals.iter().map(|e| e * e).sum();
    if denominator == 0.0 {
        // All-zero residuals: a perfect fit has no autocorrelation signal.
        return Ok(2.0);
    }
    let numerator: f64 = residuals.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let value = numerator / denominator;
    if !(DURBIN_WATSON_LOWER..=DURBIN_WATSON_UPPER).contains(&value) {
        return Err(RegressionError::DurbinWatsonOutOfRange { value });
    }
    Ok(value)
}
