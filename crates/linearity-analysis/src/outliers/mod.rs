//! Outlier detection for small replicate sets.
//!
//! Dixon's Q-test, the reference method for analytical chemistry replicate
//! sets (3 <= n <= 30). Outside that window the test is statistically
//! undefined and detection is a deliberate no-op, not an error.

pub mod dixon;
pub mod qtable;
pub mod types;

pub use dixon::detect;
pub use types::{DixonConfig, DixonOutcome};
