use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Viewport error: {0}")]
    ViewportError(String),
}
