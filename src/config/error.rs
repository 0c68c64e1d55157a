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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format (expected sqlite:)")]
    InvalidDatabaseUrl,

    #[error("Pool size must be between 1 and 100")]
    InvalidPoolSize,

    #[error("AI timeout must be between 1 and 60 seconds")]
    InvalidAiTimeout,

    #[error("Invalid AI base URL: {0}")]
    InvalidAiBaseUrl(String),

    #[error("Request timeout must exceed the AI timeout so the area fallback can complete")]
    RequestTimeoutNotAboveAiTimeout,

    #[error("Brand name cannot be empty")]
    EmptyBrandName,

    #[error("Brand name may only contain letters, digits, spaces, '_' and '-': {0}")]
    InvalidBrandName(String),

    #[error("Session idle timeout and sweep interval must be positive")]
    InvalidSessionTimeout,
}
