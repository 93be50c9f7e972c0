//! Renderer error types.

use continuous_core::CoreError;
use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while managing or drawing on a surface.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Surface dimensions must both be positive.
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Surface allocation or attachment failed.
    #[error("Surface error: {0}")]
    Surface(String),

    /// A drawing primitive failed on the backend.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Encoding the surface contents failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Writing exported data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Shape feed error (frame decoding, colour parsing).
    #[error(transparent)]
    Core(#[from] CoreError),
}
