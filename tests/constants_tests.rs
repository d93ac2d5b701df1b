// Host-side tests for page constants and colour conversion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [CANVAS_ID, OVERLAY_CONTAINER_ID, LOAD_STATUS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(HEART_MODEL_URL.ends_with(".obj"));
}

#[test]
fn hex_extremes_map_to_unit_range() {
    assert_eq!(hex_to_linear_rgba(0x000000), [0.0, 0.0, 0.0, 1.0]);
    let white = hex_to_linear_rgba(0xffffff);
    for c in &white[..3] {
        assert!((c - 1.0).abs() < 1e-6);
    }
}

#[test]
fn palette_channels_decode_in_order() {
    let heart = hex_to_linear_rgba(HEART_COLOR_HEX);
    // 0xff5555: full red, equal and much darker green and blue
    assert!((heart[0] - 1.0).abs() < 1e-6);
    assert_eq!(heart[1], heart[2]);
    assert!(heart[1] < 0.15);

    let clear = hex_to_linear_rgba(CLEAR_COLOR_HEX);
    assert!(clear[1] > heart[1], "background is lighter than the heart");
}

#[test]
fn srgb_decoding_is_monotonic() {
    let mut prev = -1.0f32;
    for v in 0..=255u32 {
        let c = hex_to_linear_rgba(v << 16)[0];
        assert!(c > prev);
        prev = c;
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn msaa_count_is_webgpu_compatible() {
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}
