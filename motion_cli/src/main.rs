//! # Motion Projection CLI
//!
//! Runs one forward projection and prints the three corrected values, or a
//! single error line if the inputs are invalid or physically inconsistent.
//!
//! Defaults come from `MotionParameters::default()`; each recognized option
//! overrides one field:
//!
//! ```text
//! motion_cli --velocity 10000 --acceleration 3 --time 3600 \
//!            --initial-distance 0 --remaining-fuel 5000 --fuel-burn-rate 0.5
//! ```

use std::env;

use motion_core::calculations::project;
use motion_core::errors::{MotionError, MotionResult};
use motion_core::params::MotionParameters;

const USAGE: &str = "\
motion_cli - single forward motion and fuel projection

USAGE:
    motion_cli [OPTIONS]

OPTIONS (each overrides the built-in default):
    --velocity <km/h>            initial velocity
    --acceleration <m/s^2>       acceleration (negative = deceleration)
    --time <s>                   elapsed time
    --initial-distance <km>      distance already travelled
    --remaining-fuel <kg>        fuel on board
    --fuel-burn-rate <kg/s>      fuel consumption rate
    --help                       print this help";

/// Parse a single option value into f64.
///
/// A missing value maps to MissingField and a non-numeric value to
/// InvalidInput, both naming the offending option.
fn parse_value(option: &str, value: Option<String>) -> MotionResult<f64> {
    let raw = value.ok_or_else(|| MotionError::missing_field(option))?;
    raw.parse::<f64>()
        .map_err(|_| MotionError::invalid_input(option, raw.as_str(), "Value is not a number"))
}

/// Build the parameter record from command-line options over the defaults.
fn parse_args(args: impl Iterator<Item = String>) -> MotionResult<MotionParameters> {
    let mut params = MotionParameters::default();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        // Accept both `--opt value` and `--opt=value`
        let (option, mut value) = match arg.split_once('=') {
            Some((opt, val)) => (opt.to_string(), Some(val.to_string())),
            None => (arg, None),
        };

        if option == "--help" || option == "-h" {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        if value.is_none() {
            // A following `--option` token is the next option, not this
            // option's value; negative numbers ("-5") are still values.
            value = match args.peek() {
                Some(next) if next.starts_with("--") => None,
                _ => args.next(),
            };
        }

        match option.as_str() {
            "--velocity" => params.velocity_kmh = parse_value(&option, value)?,
            "--acceleration" => params.acceleration_ms2 = parse_value(&option, value)?,
            "--time" => params.time_s = parse_value(&option, value)?,
            "--initial-distance" => params.initial_distance_km = parse_value(&option, value)?,
            "--remaining-fuel" => params.remaining_fuel_kg = parse_value(&option, value)?,
            "--fuel-burn-rate" => params.fuel_burn_rate_kgs = parse_value(&option, value)?,
            other => {
                return Err(MotionError::invalid_input(
                    other,
                    "",
                    "Unrecognized option (see --help)",
                ));
            }
        }
    }

    params.validate()?;
    Ok(params)
}

fn main() {
    // Failures are reported on a single line and the process ends normally;
    // a bad input is not a crash.
    let params = match parse_args(env::args().skip(1)) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match project(&params) {
        Ok(result) => {
            println!("Corrected New Velocity: {} km/h", result.new_velocity_kmh);
            println!("Corrected New Distance: {} km", result.new_distance_km);
            println!("Corrected Remaining Fuel: {} kg", result.remaining_fuel_kg);
        }
        Err(e) => {
            eprintln!("{}", e);
        }
    }
}
