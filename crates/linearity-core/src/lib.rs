//! Core foundation for the linearity validation engine.
//!
//! Shared error enums, regulatory constants, configuration structs, and
//! tracing setup. The statistical machinery lives in `linearity-analysis`;
//! this crate has no numerics beyond threshold constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::ValidationConfig;
pub use errors::{
    AnovaError, DataError, ErrorCode, OutlierError, RegressionError, ValidationError,
};
