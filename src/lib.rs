pub mod constants;
pub mod control;
pub mod errors;
pub mod playback_system;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::parameters::{RawRocketConfig, RocketParameters};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::{simulate, FlightPhase, TrajectorySample};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::summary::{finite_or_zero, FlightSummary};
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used items from playback_system
pub use playback_system::playback::Playback;
pub use playback_system::viewport::{ViewScale, Viewport};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
