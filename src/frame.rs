use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas2d::Canvas2dSurface;
use crate::engine::{RevealEngine, Scheduling};
use crate::input::PointerState;

pub struct FrameContext {
    pub engine: RevealEngine,
    pub pointer: Rc<RefCell<PointerState>>,
    pub surface: Canvas2dSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let p = *self.pointer.borrow();
        self.engine.set_cursor(Vec2::new(p.x, p.y));
        self.engine.tick(&mut self.surface);
    }
}

/// Run the effect loop with the configured scheduling. The tick closure
/// re-arms itself each frame; there is no stop condition, the loop lives as
/// long as the page does.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, scheduling: Scheduling) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        schedule(scheduling, &tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(scheduling, &tick);
}

fn schedule(scheduling: Scheduling, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let callback = tick_ref.as_ref().unwrap();
    match scheduling {
        Scheduling::AnimationFrame => {
            _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
        Scheduling::Timer { interval_ms } => {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval_ms as i32,
            );
        }
    }
}
