//! # Projection Calculations
//!
//! This module contains the three updater calculations. Each follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, MotionError>` - Pure calculation function
//!
//! The updaters are independent: they share the parameter record but no
//! data flows between them, and none touches state outside its input.
//!
//! ## Available Calculations
//!
//! - [`velocity`] - New speed under constant acceleration
//! - [`distance`] - New distance at constant speed
//! - [`fuel`] - Remaining fuel at constant burn rate

pub mod distance;
pub mod fuel;
pub mod velocity;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use distance::{DistanceInput, DistanceResult};
pub use fuel::{FuelInput, FuelResult};
pub use velocity::{VelocityInput, VelocityResult};

use crate::errors::MotionResult;
use crate::params::MotionParameters;

/// Combined results of one forward projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "new_velocity_kmh": 48880.0,
///   "new_distance_km": 10000.0,
///   "remaining_fuel_kg": 3200.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Speed at the end of the interval, in km/h
    pub new_velocity_kmh: f64,

    /// Total distance at the end of the interval, in km
    pub new_distance_km: f64,

    /// Fuel mass left at the end of the interval, in kg
    pub remaining_fuel_kg: f64,
}

/// Run all three updaters against one parameter record.
///
/// The distance updater receives the record's initial velocity, per the
/// constant-velocity simplification documented on [`distance::calculate`].
/// The first failure aborts the projection; no partial results are returned.
pub fn project(params: &MotionParameters) -> MotionResult<ProjectionResult> {
    let velocity = velocity::calculate(&VelocityInput {
        velocity_kmh: params.velocity_kmh,
        acceleration_ms2: params.acceleration_ms2,
        time_s: params.time_s,
    })?;

    let distance = distance::calculate(&DistanceInput {
        initial_distance_km: params.initial_distance_km,
        velocity_kmh: params.velocity_kmh,
        time_s: params.time_s,
    })?;

    let fuel = fuel::calculate(&FuelInput {
        remaining_fuel_kg: params.remaining_fuel_kg,
        fuel_burn_rate_kgs: params.fuel_burn_rate_kgs,
        time_s: params.time_s,
    })?;

    Ok(ProjectionResult {
        new_velocity_kmh: velocity.new_velocity_kmh,
        new_distance_km: distance.new_distance_km,
        remaining_fuel_kg: fuel.remaining_fuel_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_default_parameter_projection() {
        let result = project(&MotionParameters::default()).unwrap();

        assert!((result.new_velocity_kmh - 48880.0).abs() < TOL);
        assert!((result.new_distance_km - 10000.0).abs() < TOL);
        assert!((result.remaining_fuel_kg - 3200.0).abs() < TOL);
    }

    #[test]
    fn test_fuel_exhaustion_aborts_projection() {
        let params = MotionParameters {
            remaining_fuel_kg: 100.0,
            fuel_burn_rate_kgs: 1.0,
            time_s: 200.0,
            ..Default::default()
        };
        let err = project(&params).unwrap_err();
        assert_eq!(err.error_code(), "PHYSICALLY_INVALID_RESULT");
    }

    #[test]
    fn test_invalid_field_surfaces_single_error() {
        let params = MotionParameters {
            time_s: f64::NAN,
            ..Default::default()
        };
        let err = project(&params).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("time_s"));
    }

    #[test]
    fn test_fuel_update_honors_record_not_defaults() {
        // Overriding the fuel fields must flow through to the result; the
        // updater reads its own arguments, never an ambient default set.
        let params = MotionParameters {
            remaining_fuel_kg: 10.0,
            fuel_burn_rate_kgs: 0.0,
            ..Default::default()
        };
        let result = project(&params).unwrap();
        assert!((result.remaining_fuel_kg - 10.0).abs() < TOL);
    }

    #[test]
    fn test_result_serialization() {
        let result = project(&MotionParameters::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.new_velocity_kmh - result.new_velocity_kmh).abs() < TOL);
    }
}
