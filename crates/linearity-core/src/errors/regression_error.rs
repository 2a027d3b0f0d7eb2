//! Regression and diagnostics errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while fitting or reading the regression model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    #[error("There is no fitted regression model. Call fit() first.")]
    NotFitted,

    /// The Durbin-Watson statistic lies in [0, 4] by construction; a value
    /// outside that interval signals a computation fault, not a data issue.
    #[error("Durbin-Watson statistic {value} is outside [0, 4].")]
    DurbinWatsonOutOfRange { value: f64 },

    #[error("Not enough observations to fit a regression: need {needed}, got {got}.")]
    InsufficientData { needed: usize, got: usize },

    /// All concentrations identical; the slope is undefined.
    #[error("The concentration values are all identical; the regression cannot be fitted.")]
    ConstantPredictor,
}

impl ErrorCode for RegressionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFitted => error_code::DATA_WAS_NOT_FITTED,
            Self::DurbinWatsonOutOfRange { .. } => error_code::DURBIN_WATSON_OUT_OF_RANGE,
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::ConstantPredictor => error_code::INSUFFICIENT_DATA,
        }
    }
}
