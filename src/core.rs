// Core error types shared by every space.

/// Recoverable errors across the spaces API.
#[derive(thiserror::Error, Debug)]
pub enum GymError {
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
    #[error("Invalid space: {0}")]
    InvalidSpace(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using GymError.
pub type Result<T> = std::result::Result<T, GymError>;
