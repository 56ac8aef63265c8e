use crate::canvas::CanvasSurface;
use crate::constants::SPAWN_INTERVAL_MS;
use crate::core::ParticleField;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Callback = Closure<dyn FnMut()>;

/// Everything the spawn timer, the frame loop and the resize listener share.
pub struct FrameContext {
    pub field: ParticleField,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.advance_frame(&mut self.surface);
    }

    pub fn spawn(&mut self) {
        let added = self.field.spawn_burst();
        log::debug!("[sparks] burst +{} live={}", added, self.field.len());
    }

    pub fn resize(&mut self, window: &web::Window) {
        match dom::viewport_size(window) {
            Some(vp) => {
                self.field.resize(&mut self.surface, vp);
                log::debug!("[sparks] resize {}x{}", vp.width, vp.height);
            }
            None => {
                let vp = self.field.viewport();
                log::warn!(
                    "[sparks] viewport size unavailable, keeping {}x{}",
                    vp.width,
                    vp.height
                );
            }
        }
    }
}

/// The running effect: resize listener, spawn interval and requestAnimationFrame
/// chain. `stop` (or dropping the value) tears all three down together.
pub struct Animation {
    window: web::Window,
    ctx: Rc<RefCell<FrameContext>>,
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Callback>>>,
    spawn: Option<Callback>,
    on_resize: Option<Callback>,
    interval_id: Option<i32>,
}

impl Animation {
    pub fn start(window: web::Window, ctx: FrameContext) -> anyhow::Result<Self> {
        let mut anim = Animation {
            window,
            ctx: Rc::new(RefCell::new(ctx)),
            running: Rc::new(Cell::new(true)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            spawn: None,
            on_resize: None,
            interval_id: None,
        };
        if let Err(e) = anim.wire() {
            anim.stop();
            return Err(e);
        }
        let vp = anim.ctx.borrow().field.viewport();
        log::info!("[sparks] running on {}x{}", vp.width, vp.height);
        Ok(anim)
    }

    fn wire(&mut self) -> anyhow::Result<()> {
        self.ctx.borrow_mut().resize(&self.window);

        let ctx_resize = self.ctx.clone();
        let window_resize = self.window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            ctx_resize.borrow_mut().resize(&window_resize);
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("resize listener: {:?}", e))?;
        self.on_resize = Some(on_resize);

        let ctx_spawn = self.ctx.clone();
        let spawn = Closure::wrap(Box::new(move || {
            ctx_spawn.borrow_mut().spawn();
        }) as Box<dyn FnMut()>);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                spawn.as_ref().unchecked_ref(),
                SPAWN_INTERVAL_MS,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        self.interval_id = Some(id);
        self.spawn = Some(spawn);

        self.start_loop();
        Ok(())
    }

    fn start_loop(&self) {
        let tick_clone = self.tick.clone();
        let ctx = self.ctx.clone();
        let running = self.running.clone();
        let raf_id = self.raf_id.clone();
        let window = self.window.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            if !running.get() {
                return;
            }
            ctx.borrow_mut().frame();
            request_frame(&window, &tick_clone, &raf_id);
        }) as Box<dyn FnMut()>));
        request_frame(&self.window, &self.tick, &self.raf_id);
    }

    /// Cancel the spawn timer, the pending frame and the resize listener as one unit.
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        if let Some(id) = self.raf_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        if let Some(cb) = self.on_resize.take() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        self.spawn = None;
        // breaks the tick -> tick reference cycle
        self.tick.borrow_mut().take();
        log::info!("[sparks] stopped, dropped {} live", self.ctx.borrow().field.len());
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(
    window: &web::Window,
    tick: &Rc<RefCell<Option<Callback>>>,
    raf_id: &Cell<Option<i32>>,
) {
    if let Some(cb) = tick.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
