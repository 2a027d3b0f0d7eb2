//! Ordinary least-squares calibration model and residual diagnostics.

pub mod diagnostics;
pub mod ols;
pub mod tails;

pub use ols::FittedOls;
