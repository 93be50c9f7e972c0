//! Snapshot export for raster surfaces.
//!
//! Encodes the current contents of a [`PixmapSurface`] as PNG bytes, a PNG
//! file, or a `data:image/png;base64,...` URI for embedding in a page.

use std::path::Path;

use base64::Engine;

use crate::backend::PixmapSurface;
use crate::{RenderError, RenderResult};

impl PixmapSurface {
    /// Encode the surface as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Write the surface to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::debug!("Saved snapshot to {}", path.as_ref().display());
        Ok(())
    }

    /// Encode the surface as a base64 PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_data_uri(&self) -> RenderResult<String> {
        let bytes = self.encode_png()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:image/png;base64,{encoded}"))
    }
}
