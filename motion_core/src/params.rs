//! # Motion Parameters
//!
//! The single input record for a projection. Created once by the caller and
//! never mutated; each updater produces a new scalar result rather than
//! writing back into the record.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "velocity_kmh": 10000.0,
//!   "acceleration_ms2": 3.0,
//!   "time_s": 3600.0,
//!   "initial_distance_km": 0.0,
//!   "remaining_fuel_kg": 5000.0,
//!   "fuel_burn_rate_kgs": 0.5
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::MotionResult;
use crate::validate::{require_finite, require_non_negative};

/// Input parameters for a single forward projection.
///
/// All fields are raw f64 with unit suffixes in their names; the typed
/// wrappers in [`crate::units`] handle conversion inside the formulas.
/// Acceleration is the only field permitted to be negative (deceleration).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionParameters {
    /// Current speed in km/h (non-negative scalar)
    pub velocity_kmh: f64,

    /// Acceleration in m/s²; negative means deceleration
    pub acceleration_ms2: f64,

    /// Elapsed time for the projection interval, in seconds
    pub time_s: f64,

    /// Distance already travelled at the start of the interval, in km
    pub initial_distance_km: f64,

    /// Fuel mass on board at the start of the interval, in kg
    pub remaining_fuel_kg: f64,

    /// Fuel consumption rate in kg/s
    pub fuel_burn_rate_kgs: f64,
}

impl MotionParameters {
    /// Validate the whole record up front.
    ///
    /// Each updater re-validates its own arguments as well, so a record that
    /// passes here cannot fail input validation downstream.
    pub fn validate(&self) -> MotionResult<()> {
        require_non_negative("velocity_kmh", self.velocity_kmh)?;
        require_finite("acceleration_ms2", self.acceleration_ms2)?;
        require_non_negative("time_s", self.time_s)?;
        require_non_negative("initial_distance_km", self.initial_distance_km)?;
        require_non_negative("remaining_fuel_kg", self.remaining_fuel_kg)?;
        require_non_negative("fuel_burn_rate_kgs", self.fuel_burn_rate_kgs)?;
        Ok(())
    }
}

impl Default for MotionParameters {
    /// The historical demo parameter set: one hour of travel at 10000 km/h
    /// under 3 m/s² acceleration, burning 0.5 kg of fuel per second.
    fn default() -> Self {
        MotionParameters {
            velocity_kmh: 10000.0,
            acceleration_ms2: 3.0,
            time_s: 3600.0,
            initial_distance_km: 0.0,
            remaining_fuel_kg: 5000.0,
            fuel_burn_rate_kgs: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        MotionParameters::default().validate().unwrap();
    }

    #[test]
    fn test_negative_acceleration_is_valid() {
        let params = MotionParameters {
            acceleration_ms2: -2.5,
            ..Default::default()
        };
        params.validate().unwrap();
    }

    #[test]
    fn test_negative_velocity_rejected() {
        let params = MotionParameters {
            velocity_kmh: -1.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("velocity_kmh"));
    }

    #[test]
    fn test_nan_time_rejected() {
        let params = MotionParameters {
            time_s: f64::NAN,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_roundtrip() {
        let params = MotionParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let roundtrip: MotionParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, roundtrip);
    }

    #[test]
    fn test_json_missing_field_rejected() {
        // Deserializing a record with a dropped field must fail loudly, not
        // default the value.
        let json = r#"{
            "velocity_kmh": 10000.0,
            "acceleration_ms2": 3.0,
            "time_s": 3600.0,
            "initial_distance_km": 0.0,
            "remaining_fuel_kg": 5000.0
        }"#;
        assert!(serde_json::from_str::<MotionParameters>(json).is_err());
    }
}
