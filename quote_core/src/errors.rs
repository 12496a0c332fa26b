//! # Error Types
//!
//! Structured error types for quote_core. The pricing engine itself never
//! fails — malformed input degrades to a floored quote — so these errors
//! live at the input boundary: request validation on behalf of the order
//! form, and JSON decoding in callers such as the CLI.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn check_quantity(quantity: u32) -> QuoteResult<()> {
//!     if quantity == 0 {
//!         return Err(QuoteError::invalid_input(
//!             "quantity",
//!             quantity.to_string(),
//!             "Quantity must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core boundary operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for request validation and serialization.
///
/// Each variant carries enough context for the storefront to render a
/// field-level message without string parsing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// An input value is invalid (out of range, wrong ordering, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The request's form type is not one of the supported shapes
    #[error("Unknown shape: '{form_type}'")]
    UnknownShape { form_type: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl QuoteError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(form_type: impl Into<String>) -> Self {
        QuoteError::UnknownShape {
            form_type: form_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput { .. } => "INVALID_INPUT",
            QuoteError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::invalid_input("width_mm", "-5", "Width cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuoteError::unknown_shape("Tube").error_code(),
            "UNKNOWN_SHAPE"
        );
        assert_eq!(
            QuoteError::invalid_input("f", "v", "r").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_display_message() {
        let error = QuoteError::unknown_shape("Tube");
        assert_eq!(error.to_string(), "Unknown shape: 'Tube'");
    }
}
