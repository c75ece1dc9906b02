//! # Shared Input Validation
//!
//! Every calculation input shares the same discipline: each field must be a
//! finite real number, and the physically non-negative quantities (speed,
//! time, distance, fuel mass, burn rate) must be >= 0. These helpers keep
//! that discipline in one place so the three updaters cannot drift apart.

use crate::errors::{MotionError, MotionResult};

/// Reject NaN and infinities.
///
/// Returns the value unchanged so checks can be chained at the call site.
pub fn require_finite(field: &str, value: f64) -> MotionResult<f64> {
    if !value.is_finite() {
        return Err(MotionError::invalid_input(
            field,
            value.to_string(),
            "Value is not a finite number",
        ));
    }
    Ok(value)
}

/// Reject NaN, infinities, and negative values.
///
/// For quantities whose physical meaning does not admit a negative
/// representation in this model (non-negativity constraint).
pub fn require_non_negative(field: &str, value: f64) -> MotionResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(MotionError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_accepts_negatives() {
        assert_eq!(require_finite("acceleration_ms2", -9.81).unwrap(), -9.81);
        assert_eq!(require_finite("acceleration_ms2", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = require_finite("time_s", bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_non_negative_rejects_negatives() {
        let err = require_non_negative("remaining_fuel_kg", -1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("remaining_fuel_kg"));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("time_s", 0.0).unwrap(), 0.0);
    }
}
