//! Error types for the TV guide domain

use thiserror::Error;

/// Guide domain errors
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Invalid callback payload: {0}")]
    InvalidPayload(String),

    #[error("Name cannot be used in a callback payload: {0}")]
    InvalidCatalog(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Result type alias for guide operations
pub type GuideResult<T> = Result<T, GuideError>;

/// Configuration errors raised while reading the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingEnvVar(String),

    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: String, value: String },
}
