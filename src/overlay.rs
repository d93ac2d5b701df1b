use crate::constants::{FALLING_TEXT_CLASS, OVERLAY_CONTAINER_ID};
use crate::core::{spawn_burst, FallingText, MESSAGES, OVERLAY_BURST_INTERVAL_MS};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start the falling-text spawner: a burst every interval for the lifetime
/// of the page. Does nothing (with a warning) if the container is missing.
pub fn start_falling_text(document: &web::Document) {
    let Some(container) = document.get_element_by_id(OVERLAY_CONTAINER_ID) else {
        log::warn!("[overlay] #{} missing; falling text disabled", OVERLAY_CONTAINER_ID);
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let document = document.clone();
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let closure = Closure::wrap(Box::new(move || {
        let burst = spawn_burst(&mut *rng.borrow_mut(), MESSAGES);
        for text in &burst {
            if let Err(e) = spawn_one(&document, &container, text) {
                log::warn!("[overlay] spawn failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        OVERLAY_BURST_INTERVAL_MS as i32,
    ) {
        log::error!("[overlay] setInterval failed: {:?}", e);
    }
    closure.forget();
}

fn spawn_one(
    document: &web::Document,
    container: &web::Element,
    text: &FallingText,
) -> Result<(), wasm_bindgen::JsValue> {
    let el: web::HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(FALLING_TEXT_CLASS);
    el.set_inner_text(text.message);

    let style = el.style();
    style.set_property("left", &format!("{}%", text.left_percent))?;
    style.set_property("--scale", &text.scale.to_string())?;
    style.set_property("--drift", &format!("{}px", text.drift_px))?;
    style.set_property("font-size", &format!("{}pt", text.font_size_pt))?;
    style.set_property("animation-duration", &format!("{}s", text.duration_sec))?;
    container.append_child(&el)?;

    // Self-removal once the fall animation has finished
    let remove = Closure::once_into_js(move || el.remove());
    if let Some(w) = web::window() {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            text.removal_delay_ms(),
        )?;
    }
    Ok(())
}

#[inline]
pub fn show_scene_error(document: &web::Document, reason: &str) {
    dom::set_status_text(
        document,
        crate::constants::LOAD_STATUS_ID,
        &format!("Could not show the heart ({reason})"),
    );
}
