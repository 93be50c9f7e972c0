//! Error types for shape feed operations.

use thiserror::Error;

/// Result type for shape feed operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while decoding or producing shape descriptors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Frame serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Descriptor carries a NaN or infinite number.
    #[error("Non-finite value in descriptor: {0}")]
    NonFinite(String),

    /// Colour string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Continuous space has an empty or inverted extent.
    #[error("Invalid continuous space: {0}")]
    InvalidSpace(String),
}
