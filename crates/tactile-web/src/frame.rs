use crate::canvas;
use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tactile_core::{ControlPanel, WaveformRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-surface state read and written once per animation frame.
pub struct FrameContext {
    pub renderer: WaveformRenderer,
    pub panel: Rc<RefCell<ControlPanel>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let params = *self.panel.borrow().params();
        let frame = self.renderer.render_by(&params, dt);
        canvas::paint_frame(&self.ctx, &frame);
    }
}

/// Owned requestAnimationFrame loop. Dropping or cancelling the handle
/// cancels the pending frame request and releases the callback.
pub struct AnimationHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationHandle {
    /// Schedule `on_frame` every display frame. `None` without a window.
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // Weak self-reference so the closure does not keep itself alive.
        let tick_weak = Rc::downgrade(&tick);
        let raf_id_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id_tick.set(None);
            on_frame();
            let Some(tick) = tick_weak.upgrade() else {
                return;
            };
            let Some(w) = web::window() else {
                return;
            };
            if let Some(cb) = tick.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => raf_id.set(Some(id)),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    return None;
                }
            }
        }
        Some(Self { raf_id, tick })
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[frame] animation loop cancelled");
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start the oscilloscope loop on an acquired 2D context.
pub fn start_loop(frame_ctx: FrameContext) -> Option<AnimationHandle> {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    AnimationHandle::start(move || frame_ctx.borrow_mut().frame())
}
