//! Scalar normalization for raw external values.
//!
//! Lab spreadsheets arrive with decimal commas, stray quotes, and padding
//! whitespace; the frontend forwards them untouched. This module converts a
//! single raw scalar into a validated non-negative float, or keeps the null
//! marker for the handler to elide later.

use serde_json::Value;

use linearity_core::errors::DataError;

/// Normalize one raw external scalar.
///
/// * Null stays null: "no observation" is valid here and is removed later
///   by the data handler, position-paired with its counterpart.
/// * Booleans are numerically convertible but semantically invalid.
/// * Strings are trimmed of whitespace and stray quote characters, a decimal
///   comma becomes a decimal point, then the standard float parser applies
///   (exponent forms, leading sign, and overflow-to-infinity included).
/// * Negative numbers are rejected; zero is valid.
pub fn normalize(raw: &Value) -> Result<Option<f64>, DataError> {
    match raw {
        Value::Null => Ok(None),
        Value::Bool(_) => Err(DataError::ValueNotValid),
        Value::Number(n) => {
            let parsed = n.as_f64().ok_or(DataError::ValueNotValid)?;
            check_sign(parsed).map(Some)
        }
        Value::String(s) => {
            let trimmed = s.trim().trim_matches(|c| c == '"' || c == '\'');
            let dotted = trimmed.replace(',', ".");
            let parsed: f64 = dotted.parse().map_err(|_| DataError::ValueNotValid)?;
            check_sign(parsed).map(Some)
        }
        Value::Array(_) | Value::Object(_) => Err(DataError::ValueNotValid),
    }
}

fn check_sign(value: f64) -> Result<f64, DataError> {
    if value < 0.0 {
        Err(DataError::NegativeValue)
    } else {
        Ok(value)
    }
}
