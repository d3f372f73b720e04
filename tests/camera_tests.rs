// Host-side tests for camera framing and picking rays.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod core {
        pub mod orbs {
            include!("../src/core/orbs.rs");
        }
        pub mod state {
            include!("../src/core/state.rs");
        }
    }
    pub mod camera {
        include!("../src/camera.rs");
    }
}

use app::camera::*;
use app::core::orbs::FOCUS_DISTANCE;
use app::core::state::FocusStore;
use glam::Vec3;

#[test]
fn rig_defaults_to_the_overview_framing() {
    let rig = CameraRig::default();
    assert_eq!(rig.eye, DEFAULT_EYE);
    assert_eq!(rig.look_at, DEFAULT_LOOK_AT);
}

#[test]
fn step_lerps_and_clamps_large_dt() {
    let mut rig = CameraRig::default();
    let target = Vec3::new(10.0, 0.0, 0.0);
    rig.step(target, Vec3::ZERO, 0.25, 2.0);
    // factor = 0.5
    let expect = DEFAULT_EYE.lerp(target, 0.5);
    assert!((rig.eye - expect).length() < 1e-4);

    // Oversized dt snaps to the target in one step.
    let mut rig = CameraRig::default();
    rig.step(target, Vec3::ZERO, 10.0, 2.0);
    assert!((rig.eye - target).length() < 1e-4);
}

#[test]
fn focus_targets_default_without_a_focused_ornament() {
    let focus = FocusStore::new();
    let (eye, look) = focus_targets(&focus, false);
    assert_eq!(eye, DEFAULT_EYE);
    assert_eq!(look, DEFAULT_LOOK_AT);
}

#[test]
fn focus_targets_stand_off_along_the_normal() {
    let mut focus = FocusStore::new();
    let pos = Vec3::new(5.2, 0.65, 0.0);
    focus.report(1, pos, Vec3::X);
    focus.focus(1);

    let (eye, look) = focus_targets(&focus, false);
    assert_eq!(look, pos);
    assert!((eye - (pos + Vec3::X * FOCUS_DISTANCE)).length() < 1e-5);
}

#[test]
fn focus_is_ignored_while_the_tree_is_formed() {
    let mut focus = FocusStore::new();
    focus.report(1, Vec3::new(2.2, 1.3, 0.0), Vec3::X);
    focus.focus(1);

    let (eye, look) = focus_targets(&focus, true);
    assert_eq!(eye, DEFAULT_EYE);
    assert_eq!(look, DEFAULT_LOOK_AT);
}

#[test]
fn focus_without_a_reported_position_falls_back() {
    let mut focus = FocusStore::new();
    focus.focus(9);
    let (eye, look) = focus_targets(&focus, false);
    assert_eq!(eye, DEFAULT_EYE);
    assert_eq!(look, DEFAULT_LOOK_AT);
}

#[test]
fn center_ray_points_at_the_look_target() {
    let eye = DEFAULT_EYE;
    let look = Vec3::ZERO;
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, eye, look);
    assert_eq!(ro, eye);
    let expect = (look - eye).normalize();
    assert!((rd - expect).length() < 1e-4);
    assert!((rd.length() - 1.0).abs() < 1e-5);
}

#[test]
fn screen_edges_produce_diverging_rays() {
    let eye = DEFAULT_EYE;
    let look = Vec3::ZERO;
    let (_, left) = screen_to_world_ray(800.0, 600.0, 0.0, 300.0, eye, look);
    let (_, right) = screen_to_world_ray(800.0, 600.0, 800.0, 300.0, eye, look);
    assert!(left.x < 0.0 - 1e-3);
    assert!(right.x > 0.0 + 1e-3);
    assert!((left.y - right.y).abs() < 1e-4);
}
