use crate::mesh::MeshError;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

/// Draws points uniformly over a triangle soup, weighted by triangle area.
pub struct SurfaceSampler {
    triangles: Vec<[Vec3; 3]>,
    cumulative_area: Vec<f32>,
    rng: StdRng,
}

impl SurfaceSampler {
    pub fn new(positions: &[Vec3], rng: StdRng) -> Result<Self, MeshError> {
        let triangles = positions
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect::<Vec<_>>();
        let mut total = 0.0f32;
        let cumulative_area = triangles
            .iter()
            .map(|[a, b, c]| {
                total += 0.5 * (*b - *a).cross(*c - *a).length();
                total
            })
            .collect::<Vec<_>>();
        if !(total > 0.0) {
            return Err(MeshError::ZeroArea);
        }
        Ok(Self {
            triangles,
            cumulative_area,
            rng,
        })
    }

    pub fn total_area(&self) -> f32 {
        self.cumulative_area.last().copied().unwrap_or(0.0)
    }

    pub fn sample(&mut self) -> Vec3 {
        let r = self.rng.gen::<f32>() * self.total_area();
        let i = self
            .cumulative_area
            .partition_point(|&c| c <= r)
            .min(self.triangles.len() - 1);
        let [a, b, c] = self.triangles[i];
        let mut u = self.rng.gen::<f32>();
        let mut v = self.rng.gen::<f32>();
        // Fold the far half of the parallelogram back into the triangle
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        a + (b - a) * u + (c - a) * v
    }

    /// Gives access to the sampler's generator for other per-sample draws.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
