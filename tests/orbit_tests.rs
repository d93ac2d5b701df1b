// Host-side tests for the camera and trackball-style orbit controller.

use glam::{Vec2, Vec3};
use heart_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 1e-4;

fn in_range(camera: &Camera) -> bool {
    let d = camera.distance();
    d >= ORBIT_MIN_DISTANCE - EPS && d <= ORBIT_MAX_DISTANCE + EPS
}

#[test]
fn camera_starts_one_unit_out_on_z() {
    let camera = Camera::default();
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 1.0));
    assert!((camera.distance() - 1.0).abs() < EPS);
    assert!((camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn viewport_sets_aspect_and_ignores_zero_height() {
    let mut camera = Camera::default();
    camera.set_viewport(1600, 800);
    assert!((camera.aspect - 2.0).abs() < 1e-6);
    camera.set_viewport(300, 0);
    assert!(camera.aspect.is_finite());
}

#[test]
fn circle_mapping_is_centred_and_width_scaled() {
    assert_eq!(pointer_on_circle(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    let right = pointer_on_circle(800.0, 300.0, 800.0, 600.0);
    assert!((right.x - 1.0).abs() < 1e-6);
    let top = pointer_on_circle(400.0, 0.0, 800.0, 600.0);
    assert!((top.y - 0.75).abs() < 1e-6);
}

#[test]
fn wheel_down_zooms_out_and_up_zooms_in() {
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    orbit.wheel(400.0);
    orbit.update(&mut camera);
    let out = camera.distance();
    assert!(out > 1.0);

    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    orbit.wheel(-400.0);
    orbit.update(&mut camera);
    assert!(camera.distance() < 1.0);
}

#[test]
fn distance_is_clamped_under_any_wheel_sequence() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    for _ in 0..2_000 {
        if rng.gen_bool(0.3) {
            orbit.wheel(rng.gen_range(-5_000.0..5_000.0));
        }
        orbit.update(&mut camera);
        assert!(in_range(&camera), "distance {}", camera.distance());
    }

    // Extreme deltas still land on the bounds
    orbit.wheel(1e9);
    orbit.update(&mut camera);
    assert!(in_range(&camera));
    orbit.wheel(-1e9);
    for _ in 0..50 {
        orbit.update(&mut camera);
        assert!(in_range(&camera));
    }
    orbit.wheel(f32::NAN);
    orbit.update(&mut camera);
    assert!(in_range(&camera));
}

#[test]
fn drag_rotates_without_changing_distance() {
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    orbit.pointer_down(Vec2::ZERO);
    assert!(orbit.is_dragging());
    for i in 1..=20 {
        orbit.pointer_move(Vec2::new(i as f32 * 0.02, 0.0));
        orbit.update(&mut camera);
        assert!((camera.distance() - 1.0).abs() < EPS);
    }
    // Dragging right swings the eye off the Z axis
    assert!(camera.eye.x.abs() > 0.1);
    assert!((camera.up.length() - 1.0).abs() < EPS);
}

#[test]
fn released_drag_coasts_then_settles() {
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    orbit.pointer_down(Vec2::ZERO);
    orbit.pointer_move(Vec2::new(0.1, 0.05));
    orbit.update(&mut camera);
    orbit.pointer_up();
    assert!(!orbit.is_dragging());

    let before = camera.eye;
    orbit.update(&mut camera);
    assert!((camera.eye - before).length() > 1e-4, "no inertia after release");

    for _ in 0..500 {
        orbit.update(&mut camera);
    }
    let settled = camera.eye;
    orbit.update(&mut camera);
    assert_eq!(camera.eye, settled);
    assert!((camera.distance() - 1.0).abs() < 1e-3);
}

#[test]
fn moves_without_a_press_are_ignored() {
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    orbit.pointer_move(Vec2::new(0.5, 0.5));
    orbit.update(&mut camera);
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn distance_stays_clamped_while_dragging_and_zooming() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut camera = Camera::default();
    let mut orbit = OrbitController::default();
    let mut cursor = Vec2::ZERO;
    for step in 0..3_000 {
        match step % 120 {
            0 => orbit.pointer_down(cursor),
            90 => orbit.pointer_up(),
            _ => {}
        }
        cursor += Vec2::new(rng.gen_range(-0.05..0.05), rng.gen_range(-0.05..0.05));
        orbit.pointer_move(cursor);
        if rng.gen_bool(0.25) {
            orbit.wheel(rng.gen_range(-3_000.0..3_000.0));
        }
        orbit.update(&mut camera);
        assert!(in_range(&camera), "distance {} at step {step}", camera.distance());
        assert!(camera.eye.is_finite());
    }
}
