//! Pointer-trail reveal effect for an HTML canvas.
//!
//! A hidden background pattern shows through a shape that follows the
//! pointer, trailed by noise-patterned echoes of recent positions. The
//! engine and its geometry are plain Rust and test natively; everything that
//! touches the DOM is gated to the wasm target.

pub mod constants;
pub mod engine;
pub mod input;
pub mod noise;
pub mod shape;
pub mod surface;
pub mod trail;

#[cfg(target_arch = "wasm32")]
mod canvas2d;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas2d::Canvas2dSurface;
    use crate::engine::{EffectParams, RevealEngine};
    use crate::input::PointerState;
    use crate::{dom, events, frame};
    use rand::Rng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("reveal-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas_el = document
            .get_element_by_id("effect-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #effect-canvas"))?;
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        wire_canvas_resize(&canvas);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // The engine must not run until both patterns exist; hold off wiring
        // the loop until these resolve.
        let source_pattern = dom::load_pattern(&ctx, &document, "background-image").await?;
        let noise_pattern = dom::load_pattern(&ctx, &document, "noise-image").await?;
        log::info!(
            "patterns ready, canvas {}x{}",
            canvas.width(),
            canvas.height()
        );

        let pointer = Rc::new(RefCell::new(PointerState::default()));
        events::wire_pointermove(&canvas, pointer.clone());

        let params = EffectParams::default();
        let scheduling = params.scheduling;
        let engine = RevealEngine::new(params, rand::thread_rng().gen());
        let surface = Canvas2dSurface::new(canvas, ctx, source_pattern, noise_pattern);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine,
            pointer,
            surface,
        }));
        frame::start_loop(frame_ctx, scheduling);

        Ok(())
    }
}
