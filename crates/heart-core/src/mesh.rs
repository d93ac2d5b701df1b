//! Heart geometry: OBJ parsing, load-time placement and per-frame deformation.
//!
//! Geometry is kept as a non-indexed triangle soup (three positions per
//! triangle), the same layout a browser OBJ loader hands to the renderer, so
//! the position buffer can be drawn directly as a triangle list.

use crate::constants::{DISPLACEMENT_GAIN, HEART_OFFSET, HEART_ROTATE_X_RAD, HEART_SCALE};
use crate::noise::NoiseField;
use crate::state::SceneState;
use glam::{Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: vertex needs x, y and z")]
    ShortVertex { line: usize },
    #[error("line {line}: vertex index {index} is out of range ({count} vertices defined)")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
    #[error("line {line}: face needs at least 3 vertices, got {got}")]
    DegenerateFace { line: usize, got: usize },
    #[error("no object with faces found")]
    NoGeometry,
    #[error("mesh has zero surface area")]
    ZeroArea,
}

/// One named object from an OBJ file, triangulated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjObject {
    pub name: String,
    pub positions: Vec<Vec3>,
}

impl ObjObject {
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Parse Wavefront OBJ text into its objects.
///
/// `o` and `g` both open a new object; an object that has not received any
/// faces yet is renamed instead. Vertices are shared across objects, as the
/// format requires. Polygons are fan-triangulated. Statements other than
/// `v`, `f`, `o` and `g` are skipped. Objects without faces are dropped.
pub fn parse_obj(src: &str) -> Result<Vec<ObjObject>, MeshError> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut objects: Vec<ObjObject> = vec![ObjObject::default()];
    let mut corners: Vec<Vec3> = Vec::with_capacity(8);

    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => {
                let mut xyz = [0.0f32; 3];
                for c in xyz.iter_mut() {
                    let token = tokens.next().ok_or(MeshError::ShortVertex { line })?;
                    *c = parse_f32(token, line)?;
                }
                vertices.push(Vec3::from_array(xyz));
            }
            "f" => {
                corners.clear();
                for token in tokens {
                    let index = resolve_index(token, vertices.len(), line)?;
                    corners.push(vertices[index]);
                }
                if corners.len() < 3 {
                    return Err(MeshError::DegenerateFace {
                        line,
                        got: corners.len(),
                    });
                }
                let current = objects.last_mut().ok_or(MeshError::NoGeometry)?;
                for k in 1..corners.len() - 1 {
                    current
                        .positions
                        .extend_from_slice(&[corners[0], corners[k], corners[k + 1]]);
                }
            }
            "o" | "g" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                match objects.last_mut() {
                    Some(current) if current.positions.is_empty() => current.name = name,
                    _ => objects.push(ObjObject {
                        name,
                        positions: Vec::new(),
                    }),
                }
            }
            _ => {}
        }
    }

    objects.retain(|o| !o.positions.is_empty());
    if objects.is_empty() {
        return Err(MeshError::NoGeometry);
    }
    Ok(objects)
}

fn parse_f32(token: &str, line: usize) -> Result<f32, MeshError> {
    token.parse::<f32>().map_err(|_| MeshError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

// Face corners look like `i`, `i/t`, `i//n` or `i/t/n`; only the position index matters.
fn resolve_index(token: &str, count: usize, line: usize) -> Result<usize, MeshError> {
    let head = token.split('/').next().unwrap_or(token);
    let index = head
        .parse::<i64>()
        .map_err(|_| MeshError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => count as i64 + i,
        _ => -1,
    };
    if resolved < 0 || resolved as usize >= count {
        return Err(MeshError::IndexOutOfRange { line, index, count });
    }
    Ok(resolved as usize)
}

/// Load-time placement that centres the heart upright in view.
///
/// Applied in order: rotate about X, scale uniformly, translate.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshTransform {
    pub rotate_x_rad: f32,
    pub scale: f32,
    pub translate: Vec3,
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self {
            rotate_x_rad: HEART_ROTATE_X_RAD,
            scale: HEART_SCALE,
            translate: Vec3::from_array(HEART_OFFSET),
        }
    }
}

impl MeshTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_x(self.rotate_x_rad)
    }
}

/// The heart surface with its rest pose.
///
/// The rest pose is captured once when the mesh is built and is the anchor
/// for every later deformation; it is never written again.
pub struct HeartMesh {
    positions: Vec<Vec3>,
    rest_pose: Box<[Vec3]>,
    dirty: bool,
}

impl HeartMesh {
    pub fn new(positions: Vec<Vec3>) -> Self {
        let rest_pose = positions.clone().into_boxed_slice();
        Self {
            positions,
            rest_pose,
            dirty: true,
        }
    }

    /// Parse OBJ text, keep its first object and place it with `transform`.
    pub fn from_obj(src: &str, transform: &MeshTransform) -> Result<Self, MeshError> {
        let first = parse_obj(src)?
            .into_iter()
            .next()
            .ok_or(MeshError::NoGeometry)?;
        let m = transform.matrix();
        let positions = first
            .positions
            .into_iter()
            .map(|p| m.transform_point3(p))
            .collect::<Vec<_>>();
        log::info!(
            "[mesh] object `{}`: {} vertices, {} triangles",
            first.name,
            positions.len(),
            positions.len() / 3
        );
        Ok(Self::new(positions))
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn rest_pose(&self) -> &[Vec3] {
        &self.rest_pose
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Flat `x, y, z` view of the current positions, ready for upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Recompute every vertex from its rest position:
    /// `v = v0 * (1 + displacement(v0, t) * gain * pulse)`.
    pub fn deform(&mut self, noise: &NoiseField, state: &SceneState) {
        let k = DISPLACEMENT_GAIN * state.pulse;
        for (v, v0) in self.positions.iter_mut().zip(self.rest_pose.iter()) {
            let n = noise.displacement(*v0, state.time_ms);
            *v = *v0 * (1.0 + n * k);
        }
        self.dirty = true;
    }

    /// Returns whether positions changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
