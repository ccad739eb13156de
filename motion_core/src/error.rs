//! Error types for configuration and simulation operations.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors raised by operations that address a specific entity.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("entity no longer exists")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    #[error("component lookup failed: {0}")]
    Component(#[from] hecs::ComponentError),
    #[error("entity is missing a required component: {0}")]
    Query(#[from] hecs::QueryOneError),
}
