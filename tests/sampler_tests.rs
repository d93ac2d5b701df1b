// Host-side tests for area-weighted surface sampling.

use glam::Vec3;
use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn samples_stay_inside_the_triangle() {
    let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let mut sampler = SurfaceSampler::new(&tri, StdRng::seed_from_u64(5)).unwrap();
    assert!((sampler.total_area() - 0.5).abs() < 1e-6);
    for _ in 0..2_000 {
        let p = sampler.sample();
        assert_eq!(p.z, 0.0);
        assert!(p.x >= 0.0 && p.y >= 0.0);
        assert!(p.x + p.y <= 1.0 + 1e-5);
    }
}

#[test]
fn larger_triangles_receive_proportionally_more_samples() {
    // Small triangle (area 0.5) at z = 0, large one (area 4.5) at z = 1
    let soup = [
        Vec3::ZERO,
        Vec3::X,
        Vec3::Y,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(3.0, 0.0, 1.0),
        Vec3::new(0.0, 3.0, 1.0),
    ];
    let mut sampler = SurfaceSampler::new(&soup, StdRng::seed_from_u64(9)).unwrap();
    let n = 20_000;
    let on_large = (0..n).filter(|_| sampler.sample().z > 0.5).count();
    let share = on_large as f32 / n as f32;
    assert!((share - 0.9).abs() < 0.02, "large share {share}");
}

#[test]
fn degenerate_or_empty_input_is_rejected() {
    let line = [Vec3::ZERO, Vec3::X, Vec3::X * 3.0];
    assert!(matches!(
        SurfaceSampler::new(&line, StdRng::seed_from_u64(0)),
        Err(MeshError::ZeroArea)
    ));
    assert!(matches!(
        SurfaceSampler::new(&[], StdRng::seed_from_u64(0)),
        Err(MeshError::ZeroArea)
    ));
}

#[test]
fn same_seed_gives_same_points() {
    let tri = [Vec3::ZERO, Vec3::X, Vec3::Z];
    let mut a = SurfaceSampler::new(&tri, StdRng::seed_from_u64(42)).unwrap();
    let mut b = SurfaceSampler::new(&tri, StdRng::seed_from_u64(42)).unwrap();
    for _ in 0..32 {
        assert_eq!(a.sample(), b.sample());
    }
}
