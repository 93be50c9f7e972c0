//! HTML canvas backend for the browser front-end.
//!
//! Surfaces are `<canvas>` elements with a 2D context, appended to a DOM
//! element looked up once by id.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::surface::{DrawSurface, PixelCircle, PixelRect, SurfaceContainer};
use crate::{RenderError, RenderResult, SurfaceConfig};

const CANVAS_STYLE: &str = "border:1px dotted";

fn js_error(e: JsValue) -> RenderError {
    RenderError::Backend(format!("{e:?}"))
}

/// A DOM element hosting canvas surfaces.
pub struct WebContainer {
    document: Document,
    element: Element,
    config: SurfaceConfig,
}

impl WebContainer {
    /// Look up the container element by id.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no document or no element with `id`.
    pub fn by_id(id: &str, config: SurfaceConfig) -> RenderResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| RenderError::Surface("No document available".to_string()))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| RenderError::Surface(format!("No element with id '{id}'")))?;
        Ok(Self {
            document,
            element,
            config,
        })
    }
}

impl SurfaceContainer for WebContainer {
    type Surface = WebSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> RenderResult<WebSurface> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::Surface("Element is not a canvas".to_string()))?;
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .set_attribute("style", CANVAS_STYLE)
            .map_err(js_error)?;

        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| RenderError::Surface("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Surface("Context is not 2D".to_string()))?;
        context.set_line_width(f64::from(self.config.line_width));

        Ok(WebSurface {
            canvas,
            context,
            width,
            height,
        })
    }

    fn append(&mut self, surface: &WebSurface) -> RenderResult<()> {
        self.element
            .append_child(&surface.canvas)
            .map_err(js_error)?;
        tracing::debug!("Attached {}x{} canvas", surface.width, surface.height);
        Ok(())
    }
}

/// A `<canvas>` element and its 2D context.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl WebSurface {
    fn circle_path(&self, circle: PixelCircle) -> RenderResult<()> {
        self.context.begin_path();
        self.context
            .arc(circle.cx, circle.cy, circle.radius, 0.0, TAU)
            .map_err(js_error)?;
        self.context.close_path();
        Ok(())
    }
}

impl DrawSurface for WebSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> RenderResult<()> {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        );
        self.context.begin_path();
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: &str) -> RenderResult<()> {
        self.context.set_stroke_style_str(color);
        self.context
            .stroke_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        self.circle_path(circle)?;
        self.context.set_stroke_style_str(color);
        self.context.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, circle: PixelCircle, color: &str) -> RenderResult<()> {
        self.circle_path(circle)?;
        self.context.set_fill_style_str(color);
        self.context.fill();
        Ok(())
    }
}
