//! "Grass" spikes anchored on the heart surface.
//!
//! Each spike is a short radial line segment. Its root (`near`) rides the
//! same noise and pulse displacement as the surface; its tip (`far`) sits
//! exactly `scale` further out along the direction from the origin.

use crate::constants::{DISPLACEMENT_GAIN, SPIKE_BASE_LIFT, SPIKE_SCALE_MIN, SPIKE_SCALE_SPAN};
use crate::noise::NoiseField;
use crate::sampler::SurfaceSampler;
use crate::state::SceneState;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spike {
    pub origin: Vec3,
    pub scale: f32,
    pub near: Vec3,
    pub far: Vec3,
}

impl Spike {
    pub fn new(origin: Vec3, scale: f32) -> Self {
        Self {
            origin,
            scale,
            near: origin,
            far: origin,
        }
    }

    #[inline]
    pub fn update(&mut self, noise: &NoiseField, state: &SceneState) {
        let n = noise.displacement(self.origin, state.time_ms);
        self.near = self.origin * (SPIKE_BASE_LIFT + n * DISPLACEMENT_GAIN * state.pulse);
        self.far = self.near + self.near.normalize_or_zero() * self.scale;
    }
}

/// Fixed-size spike collection plus its line-list position buffer.
///
/// The buffer holds two points per spike (`near`, then `far`) and is
/// allocated once; `update` rewrites it in place every frame.
pub struct SpikeField {
    spikes: Vec<Spike>,
    points: Vec<Vec3>,
}

impl SpikeField {
    pub fn new(sampler: &mut SurfaceSampler, count: usize) -> Self {
        let spikes = (0..count)
            .map(|_| {
                let origin = sampler.sample();
                let scale = sampler
                    .rng()
                    .gen_range(SPIKE_SCALE_MIN..SPIKE_SCALE_MIN + SPIKE_SCALE_SPAN);
                Spike::new(origin, scale)
            })
            .collect::<Vec<_>>();
        let points = spikes.iter().flat_map(|s| [s.near, s.far]).collect();
        log::info!("[spikes] created {} spikes", count);
        Self { spikes, points }
    }

    pub fn update(&mut self, noise: &NoiseField, state: &SceneState) {
        for (spike, pair) in self.spikes.iter_mut().zip(self.points.chunks_exact_mut(2)) {
            spike.update(noise, state);
            pair[0] = spike.near;
            pair[1] = spike.far;
        }
    }

    pub fn spikes(&self) -> &[Spike] {
        &self.spikes
    }

    pub fn len(&self) -> usize {
        self.spikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spikes.is_empty()
    }

    /// Line-list endpoints, `near` then `far` for each spike.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}
