pub mod camera;
pub mod constants;
pub mod lifecycle;
pub mod mesh;
pub mod noise;
pub mod overlay;
pub mod sampler;
pub mod scene;
pub mod spikes;
pub mod state;
pub mod timeline;

pub use camera::*;
pub use constants::*;
pub use lifecycle::*;
pub use mesh::*;
pub use self::noise::NoiseField;
pub use overlay::*;
pub use sampler::*;
pub use scene::*;
pub use spikes::*;
pub use state::*;
pub use timeline::*;
