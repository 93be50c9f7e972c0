//! Surface that records draw commands instead of rasterizing them.

use crate::surface::{AttachedSurface, DrawSurface, PixelCircle, PixelRect, SurfaceContainer};
use crate::{RenderError, RenderResult};

/// A single drawing call issued to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Surface cleared.
    Clear,
    /// Rectangle filled.
    FillRect {
        /// Pixel rectangle.
        rect: PixelRect,
        /// Colour string.
        color: String,
    },
    /// Rectangle outline stroked.
    StrokeRect {
        /// Pixel rectangle.
        rect: PixelRect,
        /// Colour string.
        color: String,
    },
    /// Circle outline stroked.
    StrokeCircle {
        /// Pixel circle.
        circle: PixelCircle,
        /// Colour string.
        color: String,
    },
    /// Circle filled.
    FillCircle {
        /// Pixel circle.
        circle: PixelCircle,
        /// Colour string.
        color: String,
    },
}

/// Headless surface keeping the full command log.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            commands: Vec::new(),
        })
    }

    /// Every command issued so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the last clear, i.e. what is on screen.
    #[must_use]
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |idx| idx + 1);
        &self.commands[start..]
    }

    /// Drain the command log.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> RenderResult<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        self.commands.push(DrawCommand::StrokeCircle {
            circle,
            color: color.to_string(),
        });
        Ok(())
    }

    fn fill_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        self.commands.push(DrawCommand::FillCircle {
            circle,
            color: color.to_string(),
        });
        Ok(())
    }
}

/// In-memory container for recording surfaces.
#[derive(Debug, Clone, Default)]
pub struct RecordingContainer {
    attached: Vec<AttachedSurface>,
}

impl RecordingContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surfaces attached so far, in attachment order.
    #[must_use]
    pub fn attached(&self) -> &[AttachedSurface] {
        &self.attached
    }
}

impl SurfaceContainer for RecordingContainer {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> RenderResult<RecordingSurface> {
        RecordingSurface::new(width, height)
    }

    fn append(&mut self, surface: &RecordingSurface) -> RenderResult<()> {
        self.attached.push(AttachedSurface {
            width: surface.width,
            height: surface.height,
        });
        Ok(())
    }
}
