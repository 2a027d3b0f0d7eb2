//! Dixon Q critical values.
//!
//! Reference tables from Rorabacher, "Statistical treatment for rejection of
//! deviant values" (Anal. Chem. 1991), two-tailed, keyed by sample size
//! n = 3..=30 at confidence levels 90%, 95% and 99%. Stateless reference
//! data: plain const arrays, no lifecycle.

use linearity_core::constants::{DIXON_MAX_SAMPLE, DIXON_MIN_SAMPLE};

/// Critical values for alpha = 0.10, n = 3..=30.
const Q_ALPHA_10: [f64; 28] = [
    0.941, 0.765, 0.642, 0.560, 0.507, 0.468, 0.437, 0.412, 0.392, 0.376, 0.361, 0.349, 0.338,
    0.329, 0.320, 0.313, 0.306, 0.300, 0.295, 0.290, 0.285, 0.281, 0.277, 0.273, 0.269, 0.266,
    0.263, 0.260,
];

/// Critical values for alpha = 0.05, n = 3..=30.
const Q_ALPHA_05: [f64; 28] = [
    0.970, 0.829, 0.710, 0.625, 0.568, 0.526, 0.493, 0.466, 0.444, 0.426, 0.410, 0.396, 0.384,
    0.374, 0.365, 0.356, 0.349, 0.342, 0.337, 0.331, 0.326, 0.321, 0.317, 0.312, 0.308, 0.305,
    0.301, 0.290,
];

/// Critical values for alpha = 0.01, n = 3..=30.
const Q_ALPHA_01: [f64; 28] = [
    0.994, 0.926, 0.821, 0.740, 0.680, 0.634, 0.598, 0.568, 0.542, 0.522, 0.503, 0.488, 0.475,
    0.463, 0.452, 0.442, 0.433, 0.425, 0.418, 0.411, 0.404, 0.399, 0.393, 0.388, 0.384, 0.380,
    0.376, 0.372,
];

/// Look up the critical value for the given alpha and sample size.
///
/// Returns `None` when alpha is not one of {0.01, 0.05, 0.10} or the sample
/// size falls outside the tabulated window.
pub fn critical_value(alpha: f64, n: usize) -> Option<f64> {
    if !(DIXON_MIN_SAMPLE..=DIXON_MAX_SAMPLE).contains(&n) {
        return None;
    }
    let table = if (alpha - 0.10).abs() < f64::EPSILON {
        &Q_ALPHA_10
    } else if (alpha - 0.05).abs() < f64::EPSILON {
        &Q_ALPHA_05
    } else if (alpha - 0.01).abs() < f64::EPSILON {
        &Q_ALPHA_01
    } else {
        return None;
    };
    Some(table[n - DIXON_MIN_SAMPLE])
}

/// Whether the given alpha has a tabulated critical-value column.
pub fn supported_alpha(alpha: f64) -> bool {
    linearity_core::constants::VALID_ALPHAS
        .iter()
        .any(|a| (a - alpha).abs() < f64::EPSILON)
}
