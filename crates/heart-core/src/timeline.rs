//! Looping timelines sampled from elapsed time.
//!
//! Both timelines are pure functions of the scene clock, so a frame reads
//! the pulse and rotation for its own timestamp and tests can sample any
//! instant directly.

use crate::constants::{
    PULSE_FALL_SEC, PULSE_PEAK, PULSE_REST_SEC, PULSE_RISE_SEC, ROTATION_PERIOD_SEC,
};
use crate::state::SceneState;
use std::f32::consts::TAU;

/// Cubic ease-in (GSAP `power2.in`).
#[inline]
pub fn power2_in(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * x
}

/// Quartic ease-out (GSAP `power3.out`).
#[inline]
pub fn power3_out(x: f32) -> f32 {
    let inv = 1.0 - x.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Heartbeat: rise to `peak`, fall back to zero, rest, repeat.
#[derive(Clone, Debug, PartialEq)]
pub struct PulseTimeline {
    pub peak: f32,
    pub rise_sec: f32,
    pub fall_sec: f32,
    pub rest_sec: f32,
}

impl Default for PulseTimeline {
    fn default() -> Self {
        Self {
            peak: PULSE_PEAK,
            rise_sec: PULSE_RISE_SEC,
            fall_sec: PULSE_FALL_SEC,
            rest_sec: PULSE_REST_SEC,
        }
    }
}

impl PulseTimeline {
    pub fn period(&self) -> f32 {
        self.rise_sec.max(0.0) + self.fall_sec.max(0.0) + self.rest_sec.max(0.0)
    }

    pub fn sample(&self, elapsed_sec: f64) -> f32 {
        let period = self.period() as f64;
        if period <= 0.0 || !elapsed_sec.is_finite() {
            return 0.0;
        }
        let rise = self.rise_sec.max(0.0);
        let fall = self.fall_sec.max(0.0);
        let t = elapsed_sec.max(0.0).rem_euclid(period) as f32;
        let v = if t < rise {
            self.peak * power2_in(t / rise)
        } else if t - rise < fall {
            self.peak * (1.0 - power3_out((t - rise) / fall))
        } else {
            0.0
        };
        v.clamp(0.0, self.peak.max(0.0))
    }
}

/// Continuous linear spin, one revolution per `period_sec`.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationTimeline {
    pub period_sec: f32,
}

impl Default for RotationTimeline {
    fn default() -> Self {
        Self {
            period_sec: ROTATION_PERIOD_SEC,
        }
    }
}

impl RotationTimeline {
    /// Angle in radians, in \[0, 2π).
    pub fn sample(&self, elapsed_sec: f64) -> f32 {
        let period = self.period_sec as f64;
        if period <= 0.0 || !elapsed_sec.is_finite() {
            return 0.0;
        }
        let phase = elapsed_sec.max(0.0).rem_euclid(period) / period;
        let angle = phase as f32 * TAU;
        if angle >= TAU {
            0.0
        } else {
            angle
        }
    }
}

/// Both scene timelines, sampled together once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timelines {
    pub pulse: PulseTimeline,
    pub rotation: RotationTimeline,
}

impl Timelines {
    pub fn sample(&self, elapsed_sec: f64) -> SceneState {
        SceneState {
            time_ms: elapsed_sec * 1000.0,
            pulse: self.pulse.sample(elapsed_sec),
            rotation_y: self.rotation.sample(elapsed_sec),
        }
    }
}
