//! # Velocity Update
//!
//! Computes the new speed after a constant acceleration has acted for a
//! fixed interval.
//!
//! ## Assumptions
//!
//! - Acceleration is constant over the whole interval
//! - Velocity is a non-negative speed scalar, not a signed vector component
//!
//! ## Example
//!
//! ```rust
//! use motion_core::calculations::velocity::{VelocityInput, calculate};
//!
//! let input = VelocityInput {
//!     velocity_kmh: 10000.0,
//!     acceleration_ms2: 3.0,
//!     time_s: 3600.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.new_velocity_kmh, 48880.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MotionError, MotionResult};
use crate::units::{KmPerHourPerSec, MetersPerSec2};
use crate::validate::{require_finite, require_non_negative};

/// Input parameters for the velocity update.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity_kmh": 10000.0,
///   "acceleration_ms2": 3.0,
///   "time_s": 3600.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VelocityInput {
    /// Current speed in km/h
    pub velocity_kmh: f64,

    /// Acceleration in m/s²; negative means deceleration
    pub acceleration_ms2: f64,

    /// Elapsed time in seconds
    pub time_s: f64,
}

impl VelocityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> MotionResult<()> {
        require_non_negative("velocity_kmh", self.velocity_kmh)?;
        require_finite("acceleration_ms2", self.acceleration_ms2)?;
        require_non_negative("time_s", self.time_s)?;
        Ok(())
    }
}

/// Results from the velocity update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VelocityResult {
    /// Speed at the end of the interval, in km/h
    pub new_velocity_kmh: f64,

    /// Signed speed change contributed by the acceleration term, in km/h
    pub velocity_gain_kmh: f64,
}

/// Compute the new velocity: v' = v + a * 3.6 * t.
///
/// The acceleration is converted from m/s² to km/h-per-second before being
/// multiplied by the time in seconds, so the gain lands in the same km/h
/// unit as the initial speed.
///
/// Fails with `PhysicallyInvalidResult` if the computed speed is negative:
/// under constant deceleration the vehicle would have reversed direction
/// before the interval elapsed, and speed is a non-negative scalar here.
pub fn calculate(input: &VelocityInput) -> MotionResult<VelocityResult> {
    input.validate()?;

    let per_sec: KmPerHourPerSec = MetersPerSec2(input.acceleration_ms2).into();
    let gain_kmh = per_sec.value() * input.time_s;
    let new_velocity_kmh = input.velocity_kmh + gain_kmh;

    if !new_velocity_kmh.is_finite() {
        return Err(MotionError::physically_invalid_result(
            "new_velocity_kmh",
            new_velocity_kmh.to_string(),
            "Computed velocity overflowed the representable range",
        ));
    }
    if new_velocity_kmh < 0.0 {
        return Err(MotionError::physically_invalid_result(
            "new_velocity_kmh",
            new_velocity_kmh.to_string(),
            "Deceleration would reverse the vehicle before the interval elapsed",
        ));
    }

    Ok(VelocityResult {
        new_velocity_kmh,
        velocity_gain_kmh: gain_kmh,
    })
}
