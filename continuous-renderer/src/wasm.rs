//! WebAssembly bindings for the browser front-end.
//!
//! ```js
//! const module = new SimpleContinuousModule(500, 500, "elements");
//! module.render(JSON.stringify(frame));
//! module.reset();
//! ```

use wasm_bindgen::prelude::*;

use crate::backend::{WebContainer, WebSurface};
use crate::module::SurfaceManager;
use crate::SurfaceConfig;

/// Initialize the renderer WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A canvas attached to a page element, redrawn once per tick.
#[wasm_bindgen]
pub struct SimpleContinuousModule {
    manager: SurfaceManager<WebSurface>,
}

#[wasm_bindgen]
impl SimpleContinuousModule {
    /// Create a `canvas_width × canvas_height` canvas inside the element
    /// with id `container_id`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the container is missing or the canvas
    /// cannot be created.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        container_id: &str,
    ) -> Result<SimpleContinuousModule, String> {
        let mut container =
            WebContainer::by_id(container_id, SurfaceConfig::default()).map_err(|e| e.to_string())?;
        let manager = SurfaceManager::new(canvas_width, canvas_height, &mut container)
            .map_err(|e| e.to_string())?;
        Ok(Self { manager })
    }

    /// Redraw the canvas from a JSON frame of shape descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error string if the frame is not a JSON array.
    pub fn render(&mut self, data: &str) -> Result<(), String> {
        self.manager.render_json(data).map_err(|e| e.to_string())
    }

    /// Blank the canvas.
    pub fn reset(&mut self) {
        self.manager.reset();
    }
}
