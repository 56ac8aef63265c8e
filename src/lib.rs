#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOG_LEVEL};
use crate::core::{FieldParams, ParticleField};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod frame;

thread_local! {
    // The one running effect for this page, if any
    static ACTIVE: RefCell<Option<frame::Animation>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("sparks-web starting");

    // A missing canvas only disables the sparks; the rest of the page keeps working
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Start the effect again after `stop_sparks`. No-op while it is already running.
#[wasm_bindgen]
pub fn start_sparks() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

/// Cancel spawning and rendering together and release the particle field.
#[wasm_bindgen]
pub fn stop_sparks() {
    let active = ACTIVE.with(|a| a.borrow_mut().take());
    if let Some(mut animation) = active {
        animation.stop();
    }
}

fn init() -> anyhow::Result<()> {
    if ACTIVE.with(|a| a.borrow().is_some()) {
        log::warn!("sparks already running");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let surface = canvas::CanvasSurface::new(canvas)?;
    let field = ParticleField::new(FieldParams::default(), rand::random());

    let animation = frame::Animation::start(window, frame::FrameContext { field, surface })?;
    ACTIVE.with(|a| *a.borrow_mut() = Some(animation));
    Ok(())
}
