//! Input sanitation errors.
//!
//! Raised by the value normalizer and the data handler while turning raw
//! external matrices into clean numeric ones. The `Display` strings are the
//! fixed client-facing messages the transport layer forwards verbatim.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while validating and cleaning external data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("The given data is not a list.")]
    NotList,

    #[error("The given data is not a list of lists.")]
    NotListOfLists,

    #[error("One of the given values is not a valid number.")]
    ValueNotValid,

    #[error("Negative values are not valid.")]
    NegativeValue,

    #[error("The analytical data and the concentration data are not symmetric.")]
    NotSymmetric,
}

impl ErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotList => error_code::DATA_NOT_LIST,
            Self::NotListOfLists => error_code::DATA_NOT_LIST_OF_LISTS,
            Self::ValueNotValid => error_code::VALUE_NOT_VALID,
            Self::NegativeValue => error_code::NEGATIVE_VALUE,
            Self::NotSymmetric => error_code::DATA_NOT_SYMMETRIC,
        }
    }
}
