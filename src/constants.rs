/// Page wiring and rendering constants for the web front-end.
///
/// Geometry and timing tunables live in `heart-core`; these cover what only
/// the browser side needs (element ids, colours, GPU settings).
// Asset
pub const HEART_MODEL_URL: &str = "https://assets.codepen.io/127738/heart_2.obj";

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_CONTAINER_ID: &str = "falling-text-container";
pub const LOAD_STATUS_ID: &str = "load-status";
pub const FALLING_TEXT_CLASS: &str = "falling-text";

// Palette (sRGB hex, as authored)
pub const CLEAR_COLOR_HEX: u32 = 0xff8787;
pub const HEART_COLOR_HEX: u32 = 0xff5555;
pub const SPIKE_COLOR_HEX: u32 = 0xffffff;

// Multisample count for the scene pass (4 is always supported by WebGPU)
pub const MSAA_SAMPLES: u32 = 4;

/// Convert an sRGB hex colour to linear RGBA for an sRGB render target.
#[inline]
pub fn hex_to_linear_rgba(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0), 1.0]
}
