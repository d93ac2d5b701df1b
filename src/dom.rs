use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Show a short message in the optional status element, if the page has one.
pub fn set_status_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = html_element_by_id(document, id) {
        el.set_inner_text(text);
        _ = el.style().set_property("display", "block");
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
