//! # Error Types
//!
//! Structured error types for roi_core. Errors carry enough context to be
//! handled programmatically by a presentation shell, not just shown as text.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_sqft: f64) -> CalcResult<()> {
//!     if area_sqft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_sqft",
//!             area_sqft.to_string(),
//!             "Area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roi_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
///
/// Note that an unmatched delivery city and a zero-downtime ROI are NOT
/// errors: they surface as [`crate::calculations::freight::ResolvedCity::Fallback`]
/// and [`crate::calculations::roi::Roi::NotApplicable`] in the result record.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive divisor, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error at the shell boundary
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("area_sqft", "-500", "Area must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_input("x", "0", "bad").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            CalcError::serialization("truncated").error_code(),
            "SERIALIZATION_ERROR"
        );
    }
}
