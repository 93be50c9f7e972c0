//! Translates fractional shape descriptors into pixel-space drawing.

use continuous_core::ShapeDescriptor;

use crate::surface::{DrawSurface, PixelCircle, PixelRect};
use crate::RenderResult;

/// Pixel rectangle for a descriptor centred on `(x, y)` with fractional
/// extents `w × h`, on a `width × height` surface.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn rect_geometry(x: f64, y: f64, w: f64, h: f64, width: u32, height: u32) -> PixelRect {
    let (width, height) = (f64::from(width), f64::from(height));
    let dx = w * width;
    let dy = h * height;
    PixelRect {
        x: x * width - 0.5 * dx,
        y: y * height - 0.5 * dy,
        width: dx,
        height: dy,
    }
}

/// Pixel circle for a descriptor centred on `(x, y)`.
///
/// The radius is already in pixels and is not scaled by the surface size.
#[must_use]
pub fn circle_geometry(x: f64, y: f64, r: f64, width: u32, height: u32) -> PixelCircle {
    PixelCircle {
        cx: x * f64::from(width),
        cy: y * f64::from(height),
        radius: r,
    }
}

/// Draws descriptor frames onto a surface it owns.
pub struct ContinuousVisualization<S> {
    surface: S,
}

impl<S: DrawSurface> ContinuousVisualization<S> {
    /// Bind a renderer to a surface.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// The bound surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the bound surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draw every shape in order; later shapes land on top.
    pub fn draw(&mut self, shapes: &[ShapeDescriptor]) {
        tracing::trace!(
            "Draw {} shapes on {}x{}",
            shapes.len(),
            self.surface.width(),
            self.surface.height()
        );

        for shape in shapes {
            match shape {
                ShapeDescriptor::Rect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    filled,
                } => self.draw_rectangle(*x, *y, *w, *h, color, *filled),
                ShapeDescriptor::Circle {
                    x,
                    y,
                    r,
                    color,
                    filled,
                } => self.draw_circle(*x, *y, *r, color, *filled),
            }
        }
    }

    /// Stroke a circle outline, then fill it too when `filled`.
    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64, color: &str, filled: bool) {
        let circle = circle_geometry(x, y, r, self.surface.width(), self.surface.height());
        tracing::trace!(
            "Render circle at ({}, {}) r={} color={color} filled={filled}",
            circle.cx,
            circle.cy,
            circle.radius
        );

        let result = self.surface.stroke_circle(circle, color).and_then(|()| {
            if filled {
                self.surface.fill_circle(circle, color)
            } else {
                Ok(())
            }
        });
        skip_on_error("circle", result);
    }

    /// Fill or stroke (never both) a rectangle centred on `(x, y)`.
    #[allow(clippy::many_single_char_names)]
    pub fn draw_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, filled: bool) {
        let rect = rect_geometry(x, y, w, h, self.surface.width(), self.surface.height());
        tracing::trace!(
            "Render rect at ({}, {}) size {}x{} color={color} filled={filled}",
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );

        let result = if filled {
            self.surface.fill_rect(rect, color)
        } else {
            self.surface.stroke_rect(rect, color)
        };
        skip_on_error("rect", result);
    }

    /// Blank the whole surface.
    pub fn reset_canvas(&mut self) {
        skip_on_error("clear", self.surface.clear());
    }
}

fn skip_on_error(what: &str, result: RenderResult<()>) {
    if let Err(e) = result {
        tracing::debug!("Skipping {what}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, RecordingSurface};

    fn renderer(width: u32, height: u32) -> ContinuousVisualization<RecordingSurface> {
        ContinuousVisualization::new(RecordingSurface::new(width, height).expect("surface"))
    }

    #[test]
    fn test_rect_geometry_is_centred() {
        let rect = rect_geometry(0.5, 0.5, 0.2, 0.1, 400, 300);
        assert!((rect.x - 160.0).abs() < 1e-9);
        assert!((rect.y - 135.0).abs() < 1e-9);
        assert!((rect.width - 80.0).abs() < 1e-9);
        assert!((rect.height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_radius_not_scaled() {
        let circle = circle_geometry(0.25, 0.5, 7.0, 400, 300);
        assert_eq!(
            circle,
            PixelCircle {
                cx: 100.0,
                cy: 150.0,
                radius: 7.0
            }
        );
    }

    #[test]
    fn test_filled_rect_only_fills() {
        let mut r = renderer(100, 100);
        r.draw_rectangle(0.5, 0.5, 0.2, 0.2, "red", true);
        assert!(matches!(
            r.surface().commands(),
            [DrawCommand::FillRect { .. }]
        ));
    }

    #[test]
    fn test_unfilled_rect_only_strokes() {
        let mut r = renderer(100, 100);
        r.draw_rectangle(0.5, 0.5, 0.2, 0.2, "red", false);
        assert!(matches!(
            r.surface().commands(),
            [DrawCommand::StrokeRect { .. }]
        ));
    }

    #[test]
    fn test_filled_circle_strokes_then_fills() {
        let mut r = renderer(100, 100);
        r.draw_circle(0.5, 0.5, 3.0, "red", true);
        assert!(matches!(
            r.surface().commands(),
            [
                DrawCommand::StrokeCircle { .. },
                DrawCommand::FillCircle { .. }
            ]
        ));
    }

    #[test]
    fn test_unfilled_circle_only_strokes() {
        let mut r = renderer(100, 100);
        r.draw_circle(0.5, 0.5, 3.0, "red", false);
        assert!(matches!(
            r.surface().commands(),
            [DrawCommand::StrokeCircle { .. }]
        ));
    }

    #[test]
    fn test_draw_dispatches_in_order() {
        let mut r = renderer(200, 100);
        r.draw(&[
            ShapeDescriptor::circle(0.1, 0.1, 2.0, "a", false),
            ShapeDescriptor::rect(0.5, 0.5, 0.1, 0.1, "b", true),
            ShapeDescriptor::rect(0.9, 0.9, 0.1, 0.1, "c", false),
        ]);
        let colors: Vec<&str> = r
            .surface()
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::FillRect { color, .. }
                | DrawCommand::StrokeRect { color, .. }
                | DrawCommand::StrokeCircle { color, .. }
                | DrawCommand::FillCircle { color, .. } => color.as_str(),
                DrawCommand::Clear => "clear",
            })
            .collect();
        assert_eq!(colors, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reset_canvas_clears() {
        let mut r = renderer(10, 10);
        r.draw_circle(0.5, 0.5, 1.0, "red", true);
        r.reset_canvas();
        assert!(r.surface().visible().is_empty());
    }
}
