// Host-side tests for the shared noise field.

use glam::Vec3;
use heart_core::*;

#[test]
fn noise_is_deterministic_and_bounded() {
    let a = NoiseField::default();
    let b = NoiseField::new(NOISE_SEED);
    for i in 0..200 {
        let p = Vec3::new(i as f32 * 0.031, -0.2 + i as f32 * 0.007, 0.4);
        let t = i as f64 * 37.0;
        let n = a.displacement(p, t);
        assert_eq!(n, b.displacement(p, t));
        assert!((-0.05..=2.05).contains(&n), "displacement {n}");
    }
}

#[test]
fn noise_evolves_over_time() {
    let field = NoiseField::default();
    let p = Vec3::new(0.3, 0.1, -0.2);
    let samples = (0..20)
        .map(|k| field.displacement(p, k as f64 * 500.0))
        .collect::<Vec<_>>();
    assert!(samples.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn nearby_points_give_nearby_values() {
    let field = NoiseField::default();
    let step = 1e-3;
    for t in [0.0, 750.0, 4_000.0] {
        let mut p = Vec3::new(-0.4, -0.3, 0.1);
        let mut prev = field.displacement(p, t);
        for _ in 0..800 {
            p += Vec3::new(step, step * 0.5, -step * 0.25);
            let n = field.displacement(p, t);
            assert!((n - prev).abs() < 0.1, "jump {} at {p}", (n - prev).abs());
            prev = n;
        }
    }
}

#[test]
fn nearby_times_give_nearby_values() {
    let field = NoiseField::default();
    let p = Vec3::new(0.2, 0.05, -0.3);
    let mut prev = field.displacement(p, 0.0);
    for k in 1..2_000 {
        let n = field.displacement(p, k as f64 * 2.0);
        assert!((n - prev).abs() < 0.1);
        prev = n;
    }
}
