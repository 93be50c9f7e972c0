//! Drawing surfaces and the containers that host them.

use crate::RenderResult;

/// Axis-aligned rectangle in pixel space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PixelRect {
    /// Centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same area with non-negative width and height.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCircle {
    /// Centre x.
    pub cx: f64,
    /// Centre y.
    pub cy: f64,
    /// Radius in pixels.
    pub radius: f64,
}

/// An immediate-mode 2D drawing surface of fixed pixel size.
///
/// Colours are passed through as the CSS strings received from the feed;
/// each backend interprets them.
pub trait DrawSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Clear the whole surface and discard any open path.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the operation.
    fn clear(&mut self) -> RenderResult<()>;

    /// Fill a rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the colour or geometry cannot be drawn.
    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()>;

    /// Stroke a rectangle outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the colour or geometry cannot be drawn.
    fn stroke_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()>;

    /// Stroke a circle outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the colour or geometry cannot be drawn.
    fn stroke_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()>;

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the colour or geometry cannot be drawn.
    fn fill_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()>;
}

/// A place in the display that surfaces are attached to.
pub trait SurfaceContainer {
    /// The kind of surface this container hosts.
    type Surface: DrawSurface;

    /// Allocate a blank surface of exactly `width × height` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be allocated.
    fn create_surface(&mut self, width: u32, height: u32) -> RenderResult<Self::Surface>;

    /// Attach a surface to this container.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be attached.
    fn append(&mut self, surface: &Self::Surface) -> RenderResult<()>;
}

/// Record of a surface attached to an in-memory container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedSurface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
