//! # Distance Update
//!
//! Computes the new distance after travelling at a given speed for a fixed
//! interval.
//!
//! ## Assumptions
//!
//! - Velocity is constant over the interval. This updater does NOT integrate
//!   the acceleration used by the velocity updater; a caller wanting a
//!   velocity-consistent distance passes an appropriately time-averaged
//!   velocity. This is a documented modeling simplification.
//!
//! ## Example
//!
//! ```rust
//! use motion_core::calculations::distance::{DistanceInput, calculate};
//!
//! let input = DistanceInput {
//!     initial_distance_km: 0.0,
//!     velocity_kmh: 10000.0,
//!     time_s: 3600.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.new_distance_km, 10000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MotionError, MotionResult};
use crate::units::{Hours, Seconds};
use crate::validate::require_non_negative;

/// Input parameters for the distance update.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_distance_km": 0.0,
///   "velocity_kmh": 10000.0,
///   "time_s": 3600.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistanceInput {
    /// Distance already travelled at the start of the interval, in km
    pub initial_distance_km: f64,

    /// Speed held over the interval, in km/h
    pub velocity_kmh: f64,

    /// Elapsed time in seconds
    pub time_s: f64,
}

impl DistanceInput {
    /// Validate input parameters.
    pub fn validate(&self) -> MotionResult<()> {
        require_non_negative("initial_distance_km", self.initial_distance_km)?;
        require_non_negative("velocity_kmh", self.velocity_kmh)?;
        require_non_negative("time_s", self.time_s)?;
        Ok(())
    }
}

/// Results from the distance update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Total distance at the end of the interval, in km
    pub new_distance_km: f64,

    /// Distance covered within this interval alone, in km
    pub distance_travelled_km: f64,
}

/// Compute the new distance: d' = d0 + v * (t / 3600).
///
/// Time is converted from seconds to hours so the product with a km/h
/// velocity lands in kilometers.
pub fn calculate(input: &DistanceInput) -> MotionResult<DistanceResult> {
    input.validate()?;

    let hours: Hours = Seconds(input.time_s).into();
    let travelled_km = input.velocity_kmh * hours.value();
    let new_distance_km = input.initial_distance_km + travelled_km;

    if !new_distance_km.is_finite() {
        return Err(MotionError::physically_invalid_result(
            "new_distance_km",
            new_distance_km.to_string(),
            "Computed distance overflowed the representable range",
        ));
    }

    Ok(DistanceResult {
        new_distance_km,
        distance_travelled_km: travelled_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_reference_scenario() {
        let input = DistanceInput {
            initial_distance_km: 0.0,
            velocity_kmh: 10000.0,
            time_s: 3600.0,
        };
        let result = calculate(&input).unwrap();

        // d' = 0 + 10000 * (3600/3600) = 10000 km
        assert!((result.new_distance_km - 10000.0).abs() < TOL);
        assert!((result.distance_travelled_km - 10000.0).abs() < TOL);
    }

    #[test]
    fn test_fractional_hour() {
        // 90 km/h for 20 minutes on top of 12.5 km already travelled
        let input = DistanceInput {
            initial_distance_km: 12.5,
            velocity_kmh: 90.0,
            time_s: 1200.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.new_distance_km - 42.5).abs() < TOL);
        assert!((result.distance_travelled_km - 30.0).abs() < TOL);
    }

    #[test]
    fn test_zero_velocity_holds_position() {
        let input = DistanceInput {
            initial_distance_km: 7.0,
            velocity_kmh: 0.0,
            time_s: 500.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.new_distance_km - 7.0).abs() < TOL);
    }

    #[test]
    fn test_negative_arguments_rejected() {
        let base = DistanceInput {
            initial_distance_km: 1.0,
            velocity_kmh: 50.0,
            time_s: 60.0,
        };

        for input in [
            DistanceInput {
                initial_distance_km: -1.0,
                ..base
            },
            DistanceInput {
                velocity_kmh: -50.0,
                ..base
            },
            DistanceInput { time_s: -60.0, ..base },
        ] {
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_overflowing_result_fails() {
        // 1e308 km/h held for ~3 million years overflows f64
        let input = DistanceInput {
            initial_distance_km: 0.0,
            velocity_kmh: 1e308,
            time_s: 1e14,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "PHYSICALLY_INVALID_RESULT");
        assert!(err.to_string().contains("new_distance_km"));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let input = DistanceInput {
                initial_distance_km: 0.0,
                velocity_kmh: bad,
                time_s: 60.0,
            };
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }
}
