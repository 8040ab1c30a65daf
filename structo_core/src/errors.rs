//! # Error Types
//!
//! Structured error types for structo_core. These errors are designed to be
//! informative for both humans and machines, providing enough context to
//! understand and fix issues programmatically.
//!
//! Only input-validation failures are modeled as errors. "Failure-like"
//! engineering outcomes (no adequate section in the catalog, an LTB check
//! that cannot be completed) are ordinary results carrying an unsafe or
//! indeterminate status, because a user must be able to inspect them.
//!
//! ## Example
//!
//! ```rust
//! use structo_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for structo_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the design engine.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A load unit token does not match the recognized vocabulary
    #[error("Unknown load unit: '{token}' (expected one of kN, kN/m, kN/m², kg, kg/m, kg/m²)")]
    UnknownUnit { token: String },

    /// Steel grade not found in the selected code regime's table
    #[error("Steel grade '{grade}' not found in the {regime} grade table")]
    GradeNotFound { grade: String, regime: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create an UnknownUnit error
    pub fn unknown_unit(token: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            token: token.into(),
        }
    }

    /// Create a GradeNotFound error
    pub fn grade_not_found(grade: impl Into<String>, regime: impl Into<String>) -> Self {
        CalcError::GradeNotFound {
            grade: grade.into(),
            regime: regime.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::GradeNotFound { .. } => "GRADE_NOT_FOUND",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_unit("lbs").error_code(), "UNKNOWN_UNIT");
        assert_eq!(
            CalcError::grade_not_found("St 99", "Egyptian").error_code(),
            "GRADE_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::grade_not_found("A36", "Egyptian");
        let msg = error.to_string();
        assert!(msg.contains("A36"));
        assert!(msg.contains("Egyptian"));
    }
}
