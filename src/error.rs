use crate::config::ConfigError;
use crate::domain::DrainError;
use thiserror::Error;

/// Errors surfaced by the `logplex-drain` binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Drain(#[from] DrainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}
