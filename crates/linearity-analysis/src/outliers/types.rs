//! Core types for outlier detection.

use serde::{Deserialize, Serialize};

use linearity_core::constants::DEFAULT_ALPHA;

/// Dixon Q-test parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DixonConfig {
    /// Q-test the minimum of the ordered sample.
    pub left: bool,
    /// Q-test the maximum of the ordered sample.
    pub right: bool,
    /// Significance level; must be 0.01, 0.05 or 0.10.
    pub alpha: f64,
}

impl Default for DixonConfig {
    fn default() -> Self {
        Self {
            left: true,
            right: true,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Result of one Dixon Q-test invocation.
///
/// At most one value is removed per invocation; `outlier_indices` point
/// into the *original* input order so a paired series can drop the same
/// positions without value lookup (which breaks under duplicates).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DixonOutcome {
    /// Values flagged and removed as outliers.
    pub outliers: Vec<f64>,
    /// Positions of the removed values in the original input.
    pub outlier_indices: Vec<usize>,
    /// The input with outliers removed, original order preserved.
    pub cleaned: Vec<f64>,
}

impl DixonOutcome {
    /// An outcome that leaves the sample untouched.
    pub fn untouched(data: &[f64]) -> Self {
        Self {
            outliers: Vec::new(),
            outlier_indices: Vec::new(),
            cleaned: data.to_vec(),
        }
    }
}
