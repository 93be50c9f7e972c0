//! Surface backend implementations.
//!
//! - [`pixmap`]: software raster surface (tiny-skia), used natively and
//!   for export.
//! - [`recording`]: records draw commands instead of rasterizing.
//! - `web`: HTML canvas with a 2D context (feature `wasm`).

pub mod pixmap;
pub mod recording;
#[cfg(feature = "wasm")]
pub mod web;

pub use pixmap::{PixmapContainer, PixmapSurface};
pub use recording::{DrawCommand, RecordingContainer, RecordingSurface};
#[cfg(feature = "wasm")]
pub use web::{WebContainer, WebSurface};
