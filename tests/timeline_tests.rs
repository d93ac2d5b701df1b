// Host-side tests for the heartbeat and rotation timelines.

use heart_core::*;
use std::f32::consts::{PI, TAU};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn easings_hit_their_endpoints() {
    assert_eq!(power2_in(0.0), 0.0);
    assert_eq!(power2_in(1.0), 1.0);
    assert_eq!(power3_out(0.0), 0.0);
    assert_eq!(power3_out(1.0), 1.0);
    // Ease-in is slow to start, ease-out fast
    assert!(power2_in(0.5) < 0.5);
    assert!(power3_out(0.5) > 0.5);
    assert!(close(power2_in(0.5), 0.125));
    assert!(close(power3_out(0.5), 0.9375));
    // Out-of-range input is clamped
    assert_eq!(power2_in(-3.0), 0.0);
    assert_eq!(power3_out(7.0), 1.0);
}

#[test]
fn pulse_starts_at_zero_and_peaks_after_rise() {
    let pulse = PulseTimeline::default();
    assert!(close(pulse.period(), 1.5));
    assert_eq!(pulse.sample(0.0), 0.0);
    assert!(close(pulse.sample(0.6), PULSE_PEAK));
    assert!(close(pulse.sample(1.2), 0.0));
    assert_eq!(pulse.sample(1.35), 0.0);
    // Rising half is still low at its midpoint
    assert!(pulse.sample(0.3) < 0.2 * PULSE_PEAK);
    // Falling half drops quickly
    assert!(pulse.sample(0.9) < 0.1 * PULSE_PEAK);
}

#[test]
fn pulse_repeats_every_period() {
    let pulse = PulseTimeline::default();
    for k in 0..20 {
        let t = k as f64 * 0.07;
        assert!(close(pulse.sample(t), pulse.sample(t + 1.5)));
        assert!(close(pulse.sample(t), pulse.sample(t + 15.0)));
    }
}

#[test]
fn pulse_stays_within_bounds() {
    let pulse = PulseTimeline::default();
    for k in 0..10_000 {
        let p = pulse.sample(k as f64 * 0.0017);
        assert!((0.0..=PULSE_PEAK).contains(&p), "pulse {p} at step {k}");
    }
}

#[test]
fn degenerate_pulse_inputs_give_zero() {
    let pulse = PulseTimeline::default();
    assert_eq!(pulse.sample(f64::NAN), 0.0);
    assert_eq!(pulse.sample(f64::INFINITY), 0.0);
    assert_eq!(pulse.sample(-4.0), 0.0);

    let frozen = PulseTimeline {
        peak: 1.0,
        rise_sec: 0.0,
        fall_sec: 0.0,
        rest_sec: 0.0,
    };
    assert_eq!(frozen.sample(3.0), 0.0);
}

#[test]
fn rotation_completes_a_turn_per_period() {
    let rotation = RotationTimeline::default();
    assert_eq!(rotation.sample(0.0), 0.0);
    assert!(close(rotation.sample(3.0), TAU / 4.0));
    assert!(close(rotation.sample(6.0), PI));
    assert!(close(rotation.sample(12.0), 0.0));
    assert!(close(rotation.sample(18.0), PI));
    for k in 0..5_000 {
        let a = rotation.sample(k as f64 * 0.013);
        assert!((0.0..TAU).contains(&a));
    }
}

#[test]
fn timelines_fill_scene_state() {
    let state = Timelines::default().sample(0.6);
    assert!(close(state.time_ms as f32, 600.0));
    assert!(close(state.pulse, PULSE_PEAK));
    assert!(close(state.rotation_y, TAU * 0.6 / ROTATION_PERIOD_SEC));

    let m = state.model_matrix();
    let x = m.transform_vector3(glam::Vec3::X);
    assert!(close(x.x, state.rotation_y.cos()));
    assert!(close(x.z, -state.rotation_y.sin()));
}
