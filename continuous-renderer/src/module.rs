//! Surface lifecycle: allocation, attachment and per-tick redraws.

use continuous_core::{decode_frame, ShapeDescriptor};

use crate::surface::{DrawSurface, SurfaceContainer};
use crate::visualization::ContinuousVisualization;
use crate::{RenderError, RenderResult};

/// What is currently on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Surface allocated and blank.
    Idle,
    /// Surface holds the shapes of the last render.
    Populated,
}

/// Owns one drawing surface and redraws it once per simulation tick.
pub struct SurfaceManager<S> {
    renderer: ContinuousVisualization<S>,
    state: SurfaceState,
}

impl<S: DrawSurface> SurfaceManager<S> {
    /// Allocate a `width × height` surface in `container`, attach it, and
    /// bind a renderer to it.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the container cannot
    /// allocate or attach the surface.
    pub fn new<C>(width: u32, height: u32, container: &mut C) -> RenderResult<Self>
    where
        C: SurfaceContainer<Surface = S>,
    {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let surface = container.create_surface(width, height)?;
        container.append(&surface)?;
        tracing::debug!("Surface manager ready: {width}x{height}");

        Ok(Self {
            renderer: ContinuousVisualization::new(surface),
            state: SurfaceState::Idle,
        })
    }

    /// Clear the surface and draw `shapes` in order.
    pub fn render(&mut self, shapes: &[ShapeDescriptor]) {
        self.renderer.reset_canvas();
        self.renderer.draw(shapes);
        self.state = SurfaceState::Populated;
    }

    /// Decode a wire frame and render it.
    ///
    /// The surface is left untouched if the frame cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is not a JSON array.
    pub fn render_json(&mut self, frame: &str) -> RenderResult<()> {
        let shapes = decode_frame(frame)?;
        self.render(&shapes);
        Ok(())
    }

    /// Clear the surface without drawing anything.
    pub fn reset(&mut self) {
        self.renderer.reset_canvas();
        self.state = SurfaceState::Idle;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Width of the managed surface.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.renderer.surface().width()
    }

    /// Height of the managed surface.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.renderer.surface().height()
    }

    /// The managed surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    /// Release the managed surface.
    pub fn into_surface(self) -> S {
        self.renderer.into_surface()
    }
}
