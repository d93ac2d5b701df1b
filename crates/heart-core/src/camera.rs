//! Perspective camera and a trackball-style orbit controller.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_START_Z, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_WHEEL_PER_PIXEL,
    ORBIT_ZOOM_SPEED,
};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }
}

/// Map a pointer position in viewport pixels (origin top-left) onto the
/// trackball's virtual circle: x spans \[-1, 1\] across the width and y is
/// scaled by the width so both axes rotate at the same rate.
#[inline]
pub fn pointer_on_circle(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    Vec2::new((px - w * 0.5) / (w * 0.5), (height - 2.0 * py) / w)
}

/// Trackball-style orbit around the camera target.
///
/// Pointer drags rotate the eye about the target and keep coasting after
/// release, shedding `damping` of the motion each update. Wheel input zooms
/// with the same easing. There is no panning. Distance to the target is
/// clamped to `[min_distance, max_distance]` at the end of every update.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    dragging: bool,
    move_prev: Vec2,
    move_curr: Vec2,
    last_axis: Vec3,
    last_angle: f32,
    zoom_start: f32,
    zoom_end: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            dragging: false,
            move_prev: Vec2::ZERO,
            move_curr: Vec2::ZERO,
            last_axis: Vec3::Y,
            last_angle: 0.0,
            zoom_start: 0.0,
            zoom_end: 0.0,
        }
    }
}

impl OrbitController {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// `circle` comes from [`pointer_on_circle`].
    pub fn pointer_down(&mut self, circle: Vec2) {
        self.dragging = true;
        self.move_curr = circle;
        self.move_prev = circle;
    }

    pub fn pointer_move(&mut self, circle: Vec2) {
        if self.dragging {
            self.move_prev = self.move_curr;
            self.move_curr = circle;
        }
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Queue a wheel zoom; positive `delta_y_px` (scrolling down) moves away.
    pub fn wheel(&mut self, delta_y_px: f32) {
        if delta_y_px.is_finite() {
            self.zoom_start -= delta_y_px * ORBIT_WHEEL_PER_PIXEL;
        }
    }

    /// Advance one frame. Call every frame so damped motion settles.
    pub fn update(&mut self, camera: &mut Camera) {
        let mut eye = camera.eye - camera.target;
        self.rotate(&mut eye, &mut camera.up);
        self.zoom(&mut eye);

        let eye = self.clamp_distance(eye);
        camera.eye = camera.target + eye;
    }

    fn rotate(&mut self, eye: &mut Vec3, up: &mut Vec3) {
        let delta = self.move_curr - self.move_prev;
        let angle = delta.length();
        if angle > 0.0 {
            let eye_dir = eye.normalize_or_zero();
            let up_dir = up.normalize_or_zero();
            let side_dir = up_dir.cross(eye_dir).normalize_or_zero();
            let move_dir = up_dir * delta.y + side_dir * delta.x;
            let axis = move_dir.cross(*eye).normalize_or_zero();
            if axis != Vec3::ZERO {
                let angle = angle * self.rotate_speed;
                let q = Quat::from_axis_angle(axis, angle);
                *eye = q * *eye;
                *up = q * *up;
                self.last_axis = axis;
                self.last_angle = angle;
            }
        } else if self.last_angle != 0.0 {
            self.last_angle *= (1.0 - self.damping).max(0.0).sqrt();
            if self.last_angle.abs() < 1e-6 {
                self.last_angle = 0.0;
            }
            let q = Quat::from_axis_angle(self.last_axis, self.last_angle);
            *eye = q * *eye;
            *up = q * *up;
        }
        self.move_prev = self.move_curr;
    }

    fn clamp_distance(&mut self, eye: Vec3) -> Vec3 {
        let len = eye.length();
        if len >= self.min_distance && len <= self.max_distance {
            return eye;
        }
        // Rescale before normalizing so huge or tiny vectors keep their direction
        let m = eye.abs().max_element();
        let dir = if m > 0.0 && m.is_finite() {
            (eye / m).normalize_or_zero()
        } else {
            Vec3::ZERO
        };
        let dir = if dir == Vec3::ZERO { Vec3::Z } else { dir };
        self.zoom_start = self.zoom_end;
        if len > self.max_distance {
            dir * self.max_distance
        } else {
            dir * self.min_distance
        }
    }

    fn zoom(&mut self, eye: &mut Vec3) {
        let factor = 1.0 + (self.zoom_end - self.zoom_start) * self.zoom_speed;
        if factor != 1.0 && factor > 0.0 {
            *eye *= factor;
        }
        self.zoom_start += (self.zoom_end - self.zoom_start) * self.damping;
    }
}
