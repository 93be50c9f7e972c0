//! Software raster surface backed by a tiny-skia pixmap.

use continuous_core::Color;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::surface::{AttachedSurface, DrawSurface, PixelCircle, PixelRect, SurfaceContainer};
use crate::{RenderError, RenderResult, SurfaceConfig};

/// A raster surface holding RGBA pixels in memory.
pub struct PixmapSurface {
    pub(crate) pixmap: Pixmap,
    config: SurfaceConfig,
}

impl PixmapSurface {
    /// Allocate a blank surface.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the pixmap cannot be
    /// allocated.
    pub fn new(width: u32, height: u32, config: SurfaceConfig) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::Surface(format!("Failed to allocate {width}x{height} pixmap"))
        })?;

        let mut surface = Self { pixmap, config };
        surface.fill_background();
        Ok(surface)
    }

    /// The configuration this surface was created with.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Read a pixel as a straight-alpha colour.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Whether every pixel holds the background colour.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let [r, g, b, a] = self.config.background;
        let background = tiny_skia::Color::from_rgba8(r, g, b, a)
            .premultiply()
            .to_color_u8();
        self.pixmap.pixels().iter().all(|p| *p == background)
    }

    fn fill_background(&mut self) {
        let [r, g, b, a] = self.config.background;
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn paint(&self, color: &str) -> RenderResult<Paint<'static>> {
        let color = Color::parse(color)?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
        paint.anti_alias = self.config.anti_aliasing;
        Ok(paint)
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.config.line_width,
            ..Stroke::default()
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_skia_rect(rect: PixelRect) -> Option<tiny_skia::Rect> {
    let rect = rect.normalized();
    tiny_skia::Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

#[allow(clippy::cast_possible_truncation)]
fn to_skia_circle(circle: PixelCircle) -> RenderResult<Option<tiny_skia::Path>> {
    if circle.radius < 0.0 {
        return Err(RenderError::Backend(format!(
            "Negative radius {}",
            circle.radius
        )));
    }
    Ok(PathBuilder::from_circle(
        circle.cx as f32,
        circle.cy as f32,
        circle.radius as f32,
    ))
}

impl DrawSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) -> RenderResult<()> {
        self.fill_background();
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        let paint = self.paint(color)?;
        if let Some(rect) = to_skia_rect(rect) {
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        let paint = self.paint(color)?;
        let stroke = self.stroke();
        if let Some(rect) = to_skia_rect(rect) {
            let path = PathBuilder::from_rect(rect);
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        Ok(())
    }

    fn stroke_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        let paint = self.paint(color)?;
        let stroke = self.stroke();
        if let Some(path) = to_skia_circle(circle)? {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        Ok(())
    }

    fn fill_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        let paint = self.paint(color)?;
        if let Some(path) = to_skia_circle(circle)? {
            self.pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }
}

/// In-memory display container for pixmap surfaces.
#[derive(Debug, Clone)]
pub struct PixmapContainer {
    id: String,
    config: SurfaceConfig,
    attached: Vec<AttachedSurface>,
}

impl PixmapContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new(id: impl Into<String>, config: SurfaceConfig) -> Self {
        Self {
            id: id.into(),
            config,
            attached: Vec::new(),
        }
    }

    /// Container identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Surfaces attached so far, in attachment order.
    #[must_use]
    pub fn attached(&self) -> &[AttachedSurface] {
        &self.attached
    }
}

impl Default for PixmapContainer {
    fn default() -> Self {
        Self::new("elements", SurfaceConfig::default())
    }
}

impl SurfaceContainer for PixmapContainer {
    type Surface = PixmapSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> RenderResult<PixmapSurface> {
        PixmapSurface::new(width, height, self.config.clone())
    }

    fn append(&mut self, surface: &PixmapSurface) -> RenderResult<()> {
        self.attached.push(AttachedSurface {
            width: surface.width(),
            height: surface.height(),
        });
        tracing::debug!(
            "Attached {}x{} pixmap to #{}",
            surface.width(),
            surface.height(),
            self.id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: u32, height: u32) -> PixmapSurface {
        PixmapSurface::new(width, height, SurfaceConfig::default()).expect("surface")
    }

    #[test]
    fn test_new_surface_is_blank() {
        let s = surface(40, 30);
        assert_eq!((s.width(), s.height()), (40, 30));
        assert!(s.is_blank());
        assert_eq!(s.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(s.pixel(40, 0), None);
    }

    #[test]
    fn test_pixel_outside_row_does_not_wrap() {
        let mut s = surface(10, 10);
        s.fill_rect(
            PixelRect {
                x: 0.0,
                y: 1.0,
                width: 1.0,
                height: 1.0,
            },
            "red",
        )
        .expect("fill");
        assert_eq!(s.pixel(0, 1), Some(Color::rgba(255, 0, 0, 255)));
        assert_eq!(s.pixel(10, 0), None);
        assert_eq!(s.pixel(0, 10), None);
        assert_eq!(s.pixel(u32::MAX, 0), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10, SurfaceConfig::default()),
            Err(RenderError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_rect_covers_exact_pixels() {
        let mut s = surface(20, 20);
        s.fill_rect(
            PixelRect {
                x: 5.0,
                y: 5.0,
                width: 10.0,
                height: 10.0,
            },
            "red",
        )
        .expect("fill");
        assert_eq!(s.pixel(5, 5), Some(Color::rgba(255, 0, 0, 255)));
        assert_eq!(s.pixel(14, 14), Some(Color::rgba(255, 0, 0, 255)));
        assert_eq!(s.pixel(4, 5), Some(Color::TRANSPARENT));
        assert_eq!(s.pixel(15, 15), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_stroke_rect_leaves_interior_empty() {
        let mut s = surface(20, 20);
        s.stroke_rect(
            PixelRect {
                x: 4.5,
                y: 4.5,
                width: 10.0,
                height: 10.0,
            },
            "blue",
        )
        .expect("stroke");
        assert!(s.pixel(4, 9).is_some_and(|c| c.alpha > 0 && c.red == 0));
        assert_eq!(s.pixel(9, 9), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_fill_circle_center() {
        let mut s = surface(20, 20);
        let circle = PixelCircle {
            cx: 10.0,
            cy: 10.0,
            radius: 5.0,
        };
        s.fill_circle(circle, "#00ff00").expect("fill");
        assert_eq!(s.pixel(10, 10), Some(Color::rgba(0, 255, 0, 255)));
        assert_eq!(s.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let mut s = surface(10, 10);
        let result = s.fill_rect(
            PixelRect {
                x: 0.0,
                y: 0.0,
                width: 5.0,
                height: 5.0,
            },
            "definitely-not-a-colour",
        );
        assert!(matches!(result, Err(RenderError::Core(_))));
        assert!(s.is_blank());
    }

    #[test]
    fn test_zero_and_negative_radius() {
        let mut s = surface(10, 10);
        let zero = PixelCircle {
            cx: 5.0,
            cy: 5.0,
            radius: 0.0,
        };
        assert!(s.fill_circle(zero, "red").is_ok());
        assert!(s.is_blank());

        let negative = PixelCircle { radius: -1.0, ..zero };
        assert!(matches!(
            s.stroke_circle(negative, "red"),
            Err(RenderError::Backend(_))
        ));
    }

    #[test]
    fn test_clear_restores_background() {
        let config = SurfaceConfig {
            background: [255, 255, 255, 255],
            ..SurfaceConfig::default()
        };
        let mut s = PixmapSurface::new(10, 10, config).expect("surface");
        assert!(s.is_blank());
        s.fill_circle(
            PixelCircle {
                cx: 5.0,
                cy: 5.0,
                radius: 3.0,
            },
            "black",
        )
        .expect("fill");
        assert!(!s.is_blank());
        s.clear().expect("clear");
        assert!(s.is_blank());
        assert_eq!(s.pixel(5, 5), Some(Color::rgba(255, 255, 255, 255)));
    }

    #[test]
    fn test_container_records_attachments() {
        let mut container = PixmapContainer::default();
        assert_eq!(container.id(), "elements");
        let s = container.create_surface(30, 20).expect("surface");
        container.append(&s).expect("append");
        assert_eq!(
            container.attached(),
            &[AttachedSurface {
                width: 30,
                height: 20
            }]
        );
    }
}
