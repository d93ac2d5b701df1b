use crate::constants::SPIKE_COUNT;
use crate::mesh::{HeartMesh, MeshError};
use crate::noise::NoiseField;
use crate::sampler::SurfaceSampler;
use crate::spikes::SpikeField;
use crate::state::SceneState;
use rand::rngs::StdRng;

/// Everything that moves on the heart: surface, spikes and the shared noise.
pub struct HeartScene {
    pub mesh: HeartMesh,
    pub spikes: SpikeField,
    pub noise: NoiseField,
}

impl HeartScene {
    /// Seed `spike_count` spikes over the final (already placed) mesh.
    pub fn build(mesh: HeartMesh, rng: StdRng, spike_count: usize) -> Result<Self, MeshError> {
        let mut sampler = SurfaceSampler::new(mesh.positions(), rng)?;
        let spikes = SpikeField::new(&mut sampler, spike_count);
        Ok(Self {
            mesh,
            spikes,
            noise: NoiseField::default(),
        })
    }

    pub fn with_default_spikes(mesh: HeartMesh, rng: StdRng) -> Result<Self, MeshError> {
        Self::build(mesh, rng, SPIKE_COUNT)
    }

    /// Per-frame geometry update: spikes first, then the surface.
    pub fn update(&mut self, state: &SceneState) {
        self.spikes.update(&self.noise, state);
        self.mesh.deform(&self.noise, state);
    }
}
