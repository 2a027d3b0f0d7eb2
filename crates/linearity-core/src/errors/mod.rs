//! Error handling for the linearity engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod anova_error;
pub mod data_error;
pub mod error_code;
pub mod outlier_error;
pub mod regression_error;
pub mod validation_error;

pub use anova_error::AnovaError;
pub use data_error::DataError;
pub use error_code::ErrorCode;
pub use outlier_error::OutlierError;
pub use regression_error::RegressionError;
pub use validation_error::ValidationError;
