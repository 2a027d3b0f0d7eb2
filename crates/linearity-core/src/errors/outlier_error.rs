//! Dixon Q-test precondition errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while checking Dixon Q-test preconditions.
///
/// The original taxonomy also named `DirectionNotBoolean` and a Dixon-side
/// `DataNotList`; both are unrepresentable here because the directions are
/// `bool` fields and the sample is a slice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutlierError {
    #[error("The alpha value must be 0.01, 0.05 or 0.10, got {0}.")]
    AlphaNotValid(f64),

    #[error("The given data set is empty.")]
    DataIsEmpty,

    #[error("One of the given data points is not a number.")]
    DataNotNumber,
}

impl ErrorCode for OutlierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AlphaNotValid(_) => error_code::ALPHA_NOT_VALID,
            Self::DataIsEmpty => error_code::DATA_IS_EMPTY,
            Self::DataNotNumber => error_code::DATA_NOT_NUMBER,
        }
    }
}
