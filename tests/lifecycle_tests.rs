// Host-side tests for the scene load lifecycle.

use heart_core::*;

#[test]
fn scene_starts_loading() {
    let state = Lifecycle::default();
    assert_eq!(state, Lifecycle::Loading);
    assert_eq!(state.label(), "loading");
    assert!(!state.is_ready());
}

#[test]
fn ready_is_final() {
    let mut state = Lifecycle::default();
    state.mark_ready().unwrap();
    assert!(state.is_ready());
    assert_eq!(
        state.mark_failed("late"),
        Err(LifecycleError::AlreadySettled("ready"))
    );
    assert_eq!(state.mark_ready(), Err(LifecycleError::AlreadySettled("ready")));
    assert!(state.is_ready());
}

#[test]
fn failure_keeps_its_reason() {
    let mut state = Lifecycle::default();
    state.mark_failed("HTTP 404").unwrap();
    assert_eq!(state, Lifecycle::Failed("HTTP 404".to_string()));
    assert_eq!(state.label(), "failed");
    let err = state.mark_ready().unwrap_err();
    assert_eq!(err.to_string(), "scene is already failed");
}

#[test]
fn absorb_passes_values_through_while_loading() {
    let mut state = Lifecycle::default();
    let ok: Result<u32, LifecycleError> = Ok(7);
    assert_eq!(state.absorb("load", ok), Some(7));
    assert_eq!(state, Lifecycle::Loading);
    assert_eq!(state.failure_reason(), None);
}

#[test]
fn absorbed_error_fails_the_scene_with_its_stage() {
    let mut state = Lifecycle::default();
    let gpu: Result<(), String> = Err("No WebGPU adapter".to_string());
    assert_eq!(state.absorb("webgpu", gpu), None);
    assert_eq!(state.failure_reason(), Some("webgpu: No WebGPU adapter"));
    assert!(!state.is_ready());
    // A failed scene never becomes ready, so the frame loop is never started
    assert!(state.mark_ready().is_err());
    assert!(!state.is_ready());
}

#[test]
fn late_error_does_not_undo_ready() {
    let mut state = Lifecycle::default();
    state.mark_ready().unwrap();
    let late: Result<(), String> = Err("lost".to_string());
    assert_eq!(state.absorb("webgpu", late), None);
    assert!(state.is_ready());
    assert_eq!(state.failure_reason(), None);
}
