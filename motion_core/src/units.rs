//! # Unit Types
//!
//! Type-safe wrappers for the metric units used by the projection formulas.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The projection model uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! - Speed: kilometers per hour (km/h)
//! - Acceleration: meters per second squared (m/s²), and the derived
//!   km/h-per-second form the velocity formula works in
//! - Time: seconds (s), hours (h)
//! - Distance: kilometers (km)
//! - Mass: kilograms (kg)
//! - Mass flow: kilograms per second (kg/s)
//!
//! ## Example
//!
//! ```rust
//! use motion_core::units::{KmPerHourPerSec, MetersPerSec2, Hours, Seconds};
//!
//! let accel = MetersPerSec2(3.0);
//! let per_sec: KmPerHourPerSec = accel.into();
//! assert_eq!(per_sec.0, 10.8);
//!
//! let t = Seconds(1800.0);
//! let h: Hours = t.into();
//! assert_eq!(h.0, 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHour(pub f64);

// ============================================================================
// Acceleration Units
// ============================================================================

/// Acceleration in meters per second squared
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSec2(pub f64);

/// Acceleration expressed as km/h gained per second
///
/// This is the form the velocity formula multiplies directly against a time
/// in seconds to obtain a km/h speed change.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHourPerSec(pub f64);

/// 1 m/s² gains 3.6 km/h each second (3600 s/h divided by 1000 m/km)
pub const MS2_TO_KMH_PER_SEC: f64 = 3.6;

impl From<MetersPerSec2> for KmPerHourPerSec {
    fn from(a: MetersPerSec2) -> Self {
        KmPerHourPerSec(a.0 * MS2_TO_KMH_PER_SEC)
    }
}

impl From<KmPerHourPerSec> for MetersPerSec2 {
    fn from(a: KmPerHourPerSec) -> Self {
        MetersPerSec2(a.0 / MS2_TO_KMH_PER_SEC)
    }
}

// ============================================================================
// Time Units
// ============================================================================

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Time in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

pub const SECONDS_PER_HOUR: f64 = 3600.0;

impl From<Seconds> for Hours {
    fn from(s: Seconds) -> Self {
        Hours(s.0 / SECONDS_PER_HOUR)
    }
}

impl From<Hours> for Seconds {
    fn from(h: Hours) -> Self {
        Seconds(h.0 * SECONDS_PER_HOUR)
    }
}

// ============================================================================
// Distance Units
// ============================================================================

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass flow in kilograms per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSec(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(KmPerHour);
impl_arithmetic!(MetersPerSec2);
impl_arithmetic!(KmPerHourPerSec);
impl_arithmetic!(Seconds);
impl_arithmetic!(Hours);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Kilograms);
impl_arithmetic!(KgPerSec);
