//! # Error Types
//!
//! Structured error types for motion_core. Each variant carries enough
//! context to explain the cause of a failure to a human reading a console
//! report or to a caller handling it programmatically.
//!
//! ## Example
//!
//! ```rust
//! use motion_core::errors::{MotionError, MotionResult};
//!
//! fn validate_time(time_s: f64) -> MotionResult<()> {
//!     if time_s < 0.0 {
//!         return Err(MotionError::InvalidInput {
//!             field: "time_s".to_string(),
//!             value: time_s.to_string(),
//!             reason: "Elapsed time cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for motion_core operations
pub type MotionResult<T> = Result<T, MotionError>;

/// Structured error type for projection operations.
///
/// Distinguishes bad inputs from physically impossible results: the latter
/// means every argument was individually valid but the formula produced a
/// value the model cannot represent (negative speed, negative fuel mass).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MotionError {
    /// An input value is non-finite or violates its non-negativity constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field or option value is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Valid inputs combined into a physically impossible output
    #[error("Physically invalid result for '{quantity}': {value} - {reason}")]
    PhysicallyInvalidResult {
        quantity: String,
        value: String,
        reason: String,
    },
}

impl MotionError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MotionError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        MotionError::MissingField {
            field: field.into(),
        }
    }

    /// Create a PhysicallyInvalidResult error
    pub fn physically_invalid_result(
        quantity: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MotionError::PhysicallyInvalidResult {
            quantity: quantity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MotionError::InvalidInput { .. } => "INVALID_INPUT",
            MotionError::MissingField { .. } => "MISSING_FIELD",
            MotionError::PhysicallyInvalidResult { .. } => "PHYSICALLY_INVALID_RESULT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MotionError::invalid_input("time_s", "-5.0", "Elapsed time cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: MotionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MotionError::missing_field("velocity_kmh").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            MotionError::physically_invalid_result("remaining_fuel_kg", "-100", "tank empty")
                .error_code(),
            "PHYSICALLY_INVALID_RESULT"
        );
    }

    #[test]
    fn test_display_message() {
        let error = MotionError::invalid_input("time_s", "NaN", "Value is not a finite number");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'time_s': NaN - Value is not a finite number"
        );
    }
}
