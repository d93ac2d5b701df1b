use crate::core::{pointer_on_circle, OrbitController};
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<OrbitController>>,
}

impl OrbitWiring {
    fn circle(&self, ev: &web::MouseEvent) -> Vec2 {
        let pos = input::pointer_canvas_px(ev, &self.canvas);
        pointer_on_circle(
            pos.x,
            pos.y,
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        )
    }
}

pub fn wire_orbit_handlers(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let circle = w.circle(&ev);
        w.controller.borrow_mut().pointer_down(circle);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.controller.borrow().is_dragging() {
            return;
        }
        let circle = w.circle(&ev);
        w.controller.borrow_mut().pointer_move(circle);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.controller.borrow_mut().pointer_up();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        w.controller.borrow_mut().wheel(delta);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
