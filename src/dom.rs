use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current `innerWidth` x `innerHeight`, or `None` if the host does not report numbers.
pub fn viewport_size(window: &web::Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(w.max(0.0) as u32, h.max(0.0) as u32))
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}
