//! Canvas 2D drawing surface

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::field::ColorTag;
use crate::surface::DrawSurface;

/// Background canvas: fixed, full-viewport, behind content, click-through
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub const ELEMENT_ID: &'static str = "particle-canvas";

    /// Create the canvas and prepend it to `<body>`
    pub fn create(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(Self::ELEMENT_ID);

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "1")?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.prepend_with_node_1(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ColorTag, alpha: f32) {
        self.ctx.set_fill_style_str(color.hex());
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        // arc only fails for a negative radius
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: ColorTag, alpha: f32) {
        self.ctx.set_stroke_style_str(color.hex());
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }
}
