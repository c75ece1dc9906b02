//! # Fuel Update
//!
//! Computes the fuel mass remaining after burning at a constant rate for a
//! fixed interval.
//!
//! ## Assumptions
//!
//! - Burn rate is constant over the whole interval
//! - A tank cannot hold a negative fuel mass; exhausting the tank mid-interval
//!   is a failure, not a negative result
//!
//! ## Example
//!
//! ```rust
//! use motion_core::calculations::fuel::{FuelInput, calculate};
//!
//! let input = FuelInput {
//!     remaining_fuel_kg: 5000.0,
//!     fuel_burn_rate_kgs: 0.5,
//!     time_s: 3600.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.remaining_fuel_kg, 3200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MotionError, MotionResult};
use crate::validate::require_non_negative;

/// Input parameters for the fuel update.
///
/// The updater reads only this struct. It never falls back to any ambient
/// or default parameter set, so a caller-supplied override is always
/// honored.
///
/// ## JSON Example
///
/// ```json
/// {
///   "remaining_fuel_kg": 5000.0,
///   "fuel_burn_rate_kgs": 0.5,
///   "time_s": 3600.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelInput {
    /// Fuel mass on board at the start of the interval, in kg
    pub remaining_fuel_kg: f64,

    /// Fuel consumption rate in kg/s
    pub fuel_burn_rate_kgs: f64,

    /// Elapsed time in seconds
    pub time_s: f64,
}

impl FuelInput {
    /// Validate input parameters.
    pub fn validate(&self) -> MotionResult<()> {
        require_non_negative("remaining_fuel_kg", self.remaining_fuel_kg)?;
        require_non_negative("fuel_burn_rate_kgs", self.fuel_burn_rate_kgs)?;
        require_non_negative("time_s", self.time_s)?;
        Ok(())
    }
}

/// Results from the fuel update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelResult {
    /// Fuel mass left at the end of the interval, in kg
    pub remaining_fuel_kg: f64,

    /// Fuel mass consumed within this interval, in kg
    pub fuel_burned_kg: f64,
}

/// Compute the remaining fuel: f' = f0 - rate * t.
///
/// Fails with `PhysicallyInvalidResult` when the burn over the interval
/// exceeds the fuel on board. An unguarded subtraction would silently return
/// a negative fuel mass, which the model cannot represent.
pub fn calculate(input: &FuelInput) -> MotionResult<FuelResult> {
    input.validate()?;

    let burned_kg = input.fuel_burn_rate_kgs * input.time_s;
    let remaining_kg = input.remaining_fuel_kg - burned_kg;

    if !remaining_kg.is_finite() {
        return Err(MotionError::physically_invalid_result(
            "remaining_fuel_kg",
            remaining_kg.to_string(),
            "Computed fuel mass overflowed the representable range",
        ));
    }
    if remaining_kg < 0.0 {
        return Err(MotionError::physically_invalid_result(
            "remaining_fuel_kg",
            remaining_kg.to_string(),
            "Fuel burned over the interval exceeds the fuel on board",
        ));
    }

    Ok(FuelResult {
        remaining_fuel_kg: remaining_kg,
        fuel_burned_kg: burned_kg,
    })
}
