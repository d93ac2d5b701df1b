//! Per-frame animation state.
//!
//! Every update function takes this explicitly instead of reading shared
//! globals, so a frame can be reproduced by injecting fixed values.

use glam::Mat4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneState {
    /// Frame time in milliseconds since the scene clock started.
    pub time_ms: f64,
    /// Heartbeat intensity in \[0, 1.2\].
    pub pulse: f32,
    /// Group rotation about +Y, radians.
    pub rotation_y: f32,
}

impl SceneState {
    /// World transform of the heart group (mesh and spikes share it).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}
