// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Integration Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const POWERED_PHASE_DURATION: f64 = 2.0; // s (fixed burn)
pub const MAX_FLIGHT_TIME: f64 = 300.0; // s (ballistic cutoff)
pub const POWERED_CLIMB_DISTANCE: f64 = 10.0; // m (nominal climb behind the initial speed)

// Wind Coupling
pub const LAUNCH_WIND_FACTOR: f64 = 0.5; // share of the wind speed taken off the initial vx
pub const POWERED_WIND_DRAG: f64 = 0.1; // wind drag factor during the burn
pub const BALLISTIC_WIND_DRAG: f64 = 0.05; // wind drag factor after burnout

// Input Normalization
pub const DEFAULT_MASS: f64 = 1.0; // kg
pub const DEFAULT_THRUST: f64 = 100.0; // N
pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0; // degrees
pub const DEFAULT_WIND_SPEED: f64 = 0.0; // m/s
pub const MIN_MASS: f64 = 0.1; // kg
pub const MIN_THRUST: f64 = 10.0; // N

// Playback / Rendering
pub const PLAYBACK_INTERVAL_MS: u64 = 50; // ms per cursor step
pub const VIEW_MARGIN: f64 = 1.2; // head-room factor for axis scaling
