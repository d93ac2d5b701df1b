//! Smooth 4-D noise used for every organic motion in the scene.
//!
//! The field is stateless once built: the same inputs always give the same
//! output, so spikes and heart vertices sampled at the same point and time
//! move together.

use crate::constants::{NOISE_SEED, NOISE_SPATIAL_FREQ, NOISE_TIME_FREQ_PER_MS};
use glam::Vec3;
use ::noise::{NoiseFn, OpenSimplex};

#[derive(Clone)]
pub struct NoiseField {
    source: OpenSimplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            source: OpenSimplex::new(seed),
        }
    }

    /// Raw noise at `(x, y, z, w)`, roughly in \[-1, 1\].
    #[inline]
    pub fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f32 {
        self.source.get([x, y, z, w]) as f32
    }

    /// Biased noise in roughly \[0, 2\] for a point at a frame time in
    /// milliseconds. This is the value both spikes and the heart surface
    /// scale their displacement by.
    #[inline]
    pub fn displacement(&self, p: Vec3, time_ms: f64) -> f32 {
        let s = p * NOISE_SPATIAL_FREQ;
        self.sample(
            s.x as f64,
            s.y as f64,
            s.z as f64,
            time_ms * NOISE_TIME_FREQ_PER_MS,
        ) + 1.0
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(NOISE_SEED)
    }
}
