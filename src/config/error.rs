//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Snapshot directory must not be empty")]
    EmptySnapshotDir,

    #[error("Crisis lines must not be empty")]
    EmptyCrisisLines,

    #[error("Clinic URL has invalid format")]
    InvalidClinicUrl,
}
