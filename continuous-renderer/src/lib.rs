//! # Continuous Renderer
//!
//! Draws shape descriptor frames onto a fixed-size 2D surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │   SurfaceManager  (render / reset)          │
//! ├─────────────────────────────────────────────┤
//! │   ContinuousVisualization (fraction → px)   │
//! ├─────────────┬─────────────┬─────────────────┤
//! │ Pixmap      │ Recording   │ HTML canvas     │
//! │ (tiny-skia) │ (commands)  │ (wasm)          │
//! └─────────────┴─────────────┴─────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;
pub mod export;
pub mod module;
pub mod surface;
pub mod visualization;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use backend::{PixmapContainer, PixmapSurface, RecordingContainer, RecordingSurface};
pub use error::{RenderError, RenderResult};
pub use module::{SurfaceManager, SurfaceState};
pub use surface::{DrawSurface, PixelCircle, PixelRect, SurfaceContainer};
pub use visualization::ContinuousVisualization;

/// Configuration for allocated surfaces.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Enable anti-aliasing on raster surfaces.
    pub anti_aliasing: bool,
    /// Stroke width in pixels.
    pub line_width: f32,
    /// Colour a cleared surface holds (RGBA).
    pub background: [u8; 4],
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            anti_aliasing: true,
            line_width: 1.0,
            background: [0, 0, 0, 0], // Transparent, like clearRect
        }
    }
}
