use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::{self, PointerState};

/// Track pointer movement over the canvas. The handler only writes the
/// shared current-position cell; all drawing happens in the frame loop.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas_for_rect = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas_for_rect.get_bounding_client_rect();
        let bounds = input::SurfaceRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        };
        let pos = input::canvas_from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            bounds,
            canvas_for_rect.width() as f32,
            canvas_for_rect.height() as f32,
        );

        let mut ps = pointer.borrow_mut();
        ps.x = pos.x;
        ps.y = pos.y;
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
