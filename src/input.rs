use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels (origin top-left).
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    canvas_px_from_css(
        x_css,
        y_css,
        rect.width() as f32,
        rect.height() as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}

/// Scale a CSS-pixel offset into backing-store pixels. A collapsed layout
/// (zero CSS size) maps to the canvas centre.
#[inline]
pub fn canvas_px_from_css(
    x_css: f32,
    y_css: f32,
    css_w: f32,
    css_h: f32,
    px_w: f32,
    px_h: f32,
) -> Vec2 {
    if css_w > 0.0 && css_h > 0.0 {
        Vec2::new(x_css / css_w * px_w, y_css / css_h * px_h)
    } else {
        Vec2::new(px_w * 0.5, px_h * 0.5)
    }
}

/// Normalise a wheel delta to pixels (`deltaMode`: 0 pixel, 1 line, 2 page).
/// Zoom per unit is 0.00025 per pixel, 0.01 per line and 0.025 per page.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    match delta_mode {
        1 => (delta_y * 40.0) as f32,
        2 => (delta_y * 100.0) as f32,
        _ => delta_y as f32,
    }
}
