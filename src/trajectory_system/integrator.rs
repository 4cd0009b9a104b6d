use crate::constants::{
    BALLISTIC_WIND_DRAG, GRAVITY, LAUNCH_WIND_FACTOR, MAX_FLIGHT_TIME, POWERED_PHASE_DURATION,
    POWERED_WIND_DRAG, TIME_STEP,
};
use crate::control::parameters::RocketParameters;
use crate::utils::vector2d::Vector2D;

/// A single instant of the flight, in launch-site coordinates.
///
/// Coordinates are stored raw: a pathological parameter set can push them
/// non-finite, and the consumers (statistics, viewport) are the ones that
/// neutralize such values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub x: f64,    // m downrange
    pub y: f64,    // m above ground
    pub time: f64, // s since ignition
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Powered,
    Ballistic,
}

impl FlightPhase {
    /// Phase a given simulated instant belongs to. The burn lasts a fixed
    /// two seconds from ignition.
    pub fn at_time(time: f64) -> Self {
        if time < POWERED_PHASE_DURATION {
            FlightPhase::Powered
        } else {
            FlightPhase::Ballistic
        }
    }
}

// Mutable integration state. Position and velocity advance together with
// explicit Euler steps; the two phases differ in the vertical term and in
// the wind drag factor.
struct FlightState {
    position: Vector2D,
    velocity: Vector2D,
    time: f64,
}

impl FlightState {
    fn on_pad(params: &RocketParameters) -> Self {
        let v0 = params.initial_speed();
        FlightState {
            position: Vector2D::new(0.0, 0.0),
            velocity: Vector2D::new(
                v0 * params.launch_angle.cos() - params.wind_speed * LAUNCH_WIND_FACTOR,
                v0 * params.launch_angle.sin(),
            ),
            time: 0.0,
        }
    }

    fn powered_step(&mut self, net_acceleration: f64, wind_speed: f64) {
        self.position += self.velocity * TIME_STEP;
        self.velocity.y += (net_acceleration - GRAVITY) * TIME_STEP;
        self.velocity.x -= wind_speed * POWERED_WIND_DRAG * TIME_STEP;
        self.time += TIME_STEP;
    }

    fn ballistic_step(&mut self, wind_speed: f64) {
        self.position += self.velocity * TIME_STEP;
        self.velocity.y -= GRAVITY * TIME_STEP;
        self.velocity.x -= wind_speed * BALLISTIC_WIND_DRAG * TIME_STEP;
        self.time += TIME_STEP;
    }

    fn airborne(&self) -> bool {
        self.position.y >= 0.0
    }

    fn sample(&self) -> TrajectorySample {
        TrajectorySample {
            x: self.position.x,
            y: self.position.y,
            time: self.time,
        }
    }
}

/// Run the two-phase flight to completion and return the retained samples.
///
/// Pure function of the parameters: identical inputs produce identical
/// sequences. Samples are retained only while the rocket is at or above
/// ground level, and each carries the post-step time, so timestamps start
/// at one step and increase strictly by `TIME_STEP`.
pub fn simulate(params: &RocketParameters) -> Vec<TrajectorySample> {
    let net_acceleration = params.net_acceleration();
    let mut state = FlightState::on_pad(params);
    let mut samples = Vec::new();

    // Powered phase: the burn always runs its full two seconds. Sub-ground
    // instants are dropped rather than ending the flight.
    while state.time < POWERED_PHASE_DURATION {
        state.powered_step(net_acceleration, params.wind_speed);
        if state.airborne() {
            samples.push(state.sample());
        }
    }

    // Ballistic phase: until ground contact or the hard time cutoff for
    // pathological wind/mass ratios.
    while state.airborne() && state.time < MAX_FLIGHT_TIME {
        state.ballistic_step(params.wind_speed);
        if state.airborne() {
            samples.push(state.sample());
        }
    }

    samples
}
