pub mod summary;
pub mod telemetry;
