//! Top-level error aggregation for the transport boundary.

use super::error_code::ErrorCode;
use super::{AnovaError, DataError, OutlierError, RegressionError};

/// Aggregates subsystem errors via `From` conversions so callers outside
/// the engine can hold one error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Outlier(#[from] OutlierError),

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Anova(#[from] AnovaError),
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Data(e) => e.error_code(),
            Self::Outlier(e) => e.error_code(),
            Self::Regression(e) => e.error_code(),
            Self::Anova(e) => e.error_code(),
        }
    }
}
