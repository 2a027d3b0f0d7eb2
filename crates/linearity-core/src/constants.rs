//! Fixed thresholds and reference ranges used across the engine.

/// Minimum coefficient of determination for an acceptable calibration
/// curve (ANVISA RDC 166/2017). Not configurable.
pub const R_SQUARED_MIN: f64 = 0.990;

/// Significance levels with published Dixon Q critical-value tables.
pub const VALID_ALPHAS: [f64; 3] = [0.01, 0.05, 0.10];

/// Default significance level for all hypothesis tests.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Smallest sample size the Dixon Q-test is defined for.
pub const DIXON_MIN_SAMPLE: usize = 3;

/// Largest sample size covered by the Dixon Q critical-value tables.
pub const DIXON_MAX_SAMPLE: usize = 30;

/// Lower bound of the Durbin-Watson statistic's domain.
pub const DURBIN_WATSON_LOWER: f64 = 0.0;

/// Upper bound of the Durbin-Watson statistic's domain.
pub const DURBIN_WATSON_UPPER: f64 = 4.0;
