//! ANOVA precondition errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while validating ANOVA input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnovaError {
    #[error("One of the given values or group means is not a number.")]
    ValueNotNumber,

    #[error("Negative values are not valid for analytical signal or means.")]
    NegativeValue,

    #[error("Got {means} group means for {groups} groups.")]
    GroupCountMismatch { groups: usize, means: usize },
}

impl ErrorCode for AnovaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ValueNotNumber => error_code::VALUE_NOT_NUMBER,
            Self::NegativeValue => error_code::NEGATIVE_VALUE,
            Self::GroupCountMismatch { .. } => error_code::GROUP_COUNT_MISMATCH,
        }
    }
}
