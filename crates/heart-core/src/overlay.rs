//! Parameters for the falling-text overlay.
//!
//! The DOM side only applies these values; everything random or derived
//! from depth is decided here so it can be checked off-browser.

use crate::constants::{
    OVERLAY_BURST_INTERVAL_MS, OVERLAY_BURST_SIZE, OVERLAY_DRIFT_SPAN_PX, OVERLAY_FALL_BASE_SEC,
    OVERLAY_FALL_SPAN_SEC, OVERLAY_FONT_BASE_PT, OVERLAY_FONT_SPAN_PT, OVERLAY_LEFT_MAX_PERCENT,
    OVERLAY_SCALE_BASE, OVERLAY_SCALE_SPAN,
};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

pub const MESSAGES: &[&str] = &[
    "Tùng rinh rinh 🌙🌙🌙",
    "Tùng tùng tùng rinh rinh 🔥🔥",
    "Trung thu vui vẻ hahahahaha 🌸",
    "M bớt hỏi xàmm",
    "Suốt ngày đòi block",
    "Khó chịu qài 🎁",
    "Đớp ít thoiii",
    "Nói lời mật ngọt đê",
    "M bớt bắt nạt taoo 🎈",
];

pub type Burst = SmallVec<[FallingText; OVERLAY_BURST_SIZE]>;

/// One floating message. `depth` in \[0, 1) runs from far (0) to near (1):
/// nearer text is larger and falls in less time.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingText {
    pub message: &'static str,
    pub left_percent: f32,
    pub depth: f32,
    pub scale: f32,
    pub drift_px: f32,
    pub font_size_pt: f32,
    pub duration_sec: f32,
}

impl FallingText {
    /// Derive the size and timing from `depth`.
    pub fn with_depth(message: &'static str, left_percent: f32, depth: f32, drift_px: f32) -> Self {
        Self {
            message,
            left_percent,
            depth,
            scale: OVERLAY_SCALE_BASE + depth * OVERLAY_SCALE_SPAN,
            drift_px,
            font_size_pt: OVERLAY_FONT_BASE_PT + depth * OVERLAY_FONT_SPAN_PT,
            duration_sec: OVERLAY_FALL_BASE_SEC + (1.0 - depth) * OVERLAY_FALL_SPAN_SEC,
        }
    }

    /// Random message, position, depth and drift. `None` for an empty list.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, messages: &[&'static str]) -> Option<Self> {
        let message = *messages.choose(rng)?;
        let left_percent = rng.gen::<f32>() * OVERLAY_LEFT_MAX_PERCENT;
        let depth = rng.gen::<f32>();
        let drift_px = (rng.gen::<f32>() - 0.5) * OVERLAY_DRIFT_SPAN_PX;
        Some(Self::with_depth(message, left_percent, depth, drift_px))
    }

    /// Delay before the element may be removed; never shorter than its animation.
    pub fn removal_delay_ms(&self) -> i32 {
        (self.duration_sec * 1000.0).ceil() as i32
    }
}

/// The elements spawned by one interval tick.
pub fn spawn_burst<R: Rng + ?Sized>(rng: &mut R, messages: &[&'static str]) -> Burst {
    (0..OVERLAY_BURST_SIZE)
        .filter_map(|_| FallingText::random(rng, messages))
        .collect()
}

/// Number of interval ticks that fire within `window_ms` of the spawner starting.
pub fn bursts_within(window_ms: u32) -> u32 {
    window_ms / OVERLAY_BURST_INTERVAL_MS
}
