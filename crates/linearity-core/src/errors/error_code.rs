//! ErrorCode trait for the transport boundary.

/// Trait for converting engine errors to stable code strings.
/// Every error enum implements this so the request-handling layer can map
/// each failure kind to a fixed code and message without matching on
/// concrete Rust types.
pub trait ErrorCode {
    /// Returns the stable error code string (e.g., "DATA_NOT_LIST").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the transport boundary.
pub const DATA_NOT_LIST: &str = "DATA_NOT_LIST";
pub const DATA_NOT_LIST_OF_LISTS: &str = "DATA_NOT_LIST_OF_LISTS";
pub const VALUE_NOT_VALID: &str = "VALUE_NOT_VALID";
pub const NEGATIVE_VALUE: &str = "NEGATIVE_VALUE";
pub const DATA_NOT_SYMMETRIC: &str = "DATA_NOT_SYMMETRIC";
pub const ALPHA_NOT_VALID: &str = "ALPHA_NOT_VALID";
pub const DATA_IS_EMPTY: &str = "DATA_IS_EMPTY";
pub const DATA_NOT_NUMBER: &str = "DATA_NOT_NUMBER";
pub const DATA_WAS_NOT_FITTED: &str = "DATA_WAS_NOT_FITTED";
pub const DURBIN_WATSON_OUT_OF_RANGE: &str = "DURBIN_WATSON_OUT_OF_RANGE";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const VALUE_NOT_NUMBER: &str = "VALUE_NOT_NUMBER";
pub const GROUP_COUNT_MISMATCH: &str = "GROUP_COUNT_MISMATCH";
