//! # motion_core - Motion Projection Engine
//!
//! `motion_core` computes closed-form kinematic and fuel-consumption
//! projections for a moving vehicle over a fixed time interval. It performs
//! exactly one forward projection per invocation; it is a calculation
//! utility, not a stepped simulation engine.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Loud Failure**: Invalid or unit-inconsistent input fails with a
//!   structured error instead of silently producing wrong numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use motion_core::calculations::project;
//! use motion_core::params::MotionParameters;
//!
//! let params = MotionParameters::default();
//! let result = project(&params).unwrap();
//!
//! assert_eq!(result.new_velocity_kmh, 48880.0);
//! assert_eq!(result.new_distance_km, 10000.0);
//! assert_eq!(result.remaining_fuel_kg, 3200.0);
//! ```
//!
//! ## Modules
//!
//! - [`params`] - The immutable projection parameter record
//! - [`calculations`] - The three updaters and the combined projection
//! - [`units`] - Type-safe unit wrappers
//! - [`validate`] - Shared finiteness and non-negativity checks
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod params;
pub mod units;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use calculations::{project, ProjectionResult};
pub use errors::{MotionError, MotionResult};
pub use params::MotionParameters;
