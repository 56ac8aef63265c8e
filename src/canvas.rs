use crate::core::{Hsl, Surface, Viewport};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` backed by a canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, viewport: Viewport) {
        // Assigning either dimension also clears the backing store
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsl, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
