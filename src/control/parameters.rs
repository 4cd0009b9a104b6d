use std::f64::consts::FRAC_PI_2;

use crate::constants::{
    DEFAULT_LAUNCH_ANGLE, DEFAULT_MASS, DEFAULT_THRUST, DEFAULT_WIND_SPEED, GRAVITY, MIN_MASS,
    MIN_THRUST, POWERED_CLIMB_DISTANCE,
};

/// Raw, string-typed configuration as supplied by an external form or
/// storage collaborator. Empty or malformed fields are valid input.
#[derive(Debug, Clone, Default)]
pub struct RawRocketConfig {
    pub mass: String,
    pub thrust: String,
    pub launch_angle: String,
    pub wind_speed: String,
}

/// Validated launch parameters, immutable for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketParameters {
    pub mass: f64,         // kg
    pub thrust: f64,       // N
    pub launch_angle: f64, // radians, [0, π/2]
    pub wind_speed: f64,   // m/s, sign carries direction
}

impl RocketParameters {
    /// Clamp numeric inputs into a usable parameter set. The angle is given
    /// in degrees. Never fails: a NaN mass or thrust lands on its floor,
    /// a NaN angle on the default.
    pub fn new(mass: f64, thrust: f64, launch_angle_deg: f64, wind_speed: f64) -> Self {
        let angle_deg = if launch_angle_deg.is_nan() {
            DEFAULT_LAUNCH_ANGLE
        } else {
            launch_angle_deg
        };

        RocketParameters {
            mass: mass.max(MIN_MASS),
            thrust: thrust.max(MIN_THRUST),
            launch_angle: angle_deg.to_radians().clamp(0.0, FRAC_PI_2),
            wind_speed,
        }
    }

    /// Parse a raw configuration, substituting the documented default for
    /// every field that fails to parse, then clamp as in `new`.
    pub fn from_raw(raw: &RawRocketConfig) -> Self {
        RocketParameters::new(
            parse_or(&raw.mass, DEFAULT_MASS),
            parse_or(&raw.thrust, DEFAULT_THRUST),
            parse_or(&raw.launch_angle, DEFAULT_LAUNCH_ANGLE),
            parse_or(&raw.wind_speed, DEFAULT_WIND_SPEED),
        )
    }

    /// Net vertical acceleration while the motor burns: thrust over mass
    /// minus gravity.
    pub fn net_acceleration(&self) -> f64 {
        self.thrust / self.mass - GRAVITY
    }

    /// Speed at the end of the nominal powered climb. Underpowered
    /// configurations fall back to the thrust-energy speed so the flight
    /// still shows visible motion.
    pub fn initial_speed(&self) -> f64 {
        let net = self.net_acceleration();
        if net > 0.0 {
            (2.0 * net * POWERED_CLIMB_DISTANCE).sqrt()
        } else {
            (2.0 * self.thrust / self.mass).sqrt()
        }
    }
}

// A parse that yields NaN counts as a failed parse: "NaN" is accepted by
// the float grammar but is not a usable field value.
fn parse_or(field: &str, default: f64) -> f64 {
    match field.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => default,
    }
}
