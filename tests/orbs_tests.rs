// Host-side tests for ornament placement and photo visibility.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod orbs {
    include!("../src/core/orbs.rs");
}

use glam::Vec3;
use orbs::*;

#[test]
fn formed_orbit_starts_on_the_configured_circle() {
    // First ornament: phase 0, so at t=0 it sits at (radius, height, 0)
    // before the bob offset is layered on.
    let cfg = &ORBS[0];
    let pos = orb_position(cfg, 0.0, 1.0);
    assert!((pos.x - cfg.orbit_radius).abs() < 1e-5);
    assert!((pos.y - cfg.orbit_height).abs() < 1e-5);
    assert!(pos.z.abs() < 1e-5);
}

#[test]
fn formed_orbit_keeps_constant_radius_and_height() {
    let cfg = &ORBS[2];
    for i in 0..50 {
        let t = i as f32 * 0.37;
        let pos = orb_position(cfg, t, 1.0);
        let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!((r - cfg.orbit_radius).abs() < 1e-4);
        assert!((pos.y - cfg.orbit_height).abs() < 1e-5);
    }
}

#[test]
fn scattered_ornaments_fly_outward_and_settle_lower() {
    let cfg = &ORBS[0];
    let formed = orb_position(cfg, 1.0, 1.0);
    let scattered = orb_position(cfg, 1.0, 0.0);

    let formed_r = (formed.x * formed.x + formed.z * formed.z).sqrt();
    let scattered_r = (scattered.x * scattered.x + scattered.z * scattered.z).sqrt();
    assert!((scattered_r - (cfg.orbit_radius + SCATTER_FLYOUT)).abs() < 1e-4);
    assert!(scattered_r > formed_r);
    assert!((scattered.y - cfg.orbit_height * 0.5).abs() < 1e-5);
}

#[test]
fn ornaments_never_share_an_angle() {
    let p0 = orb_position(&ORBS[0], 0.0, 1.0);
    let p1 = orb_position(&ORBS[1], 0.0, 1.0);
    let p2 = orb_position(&ORBS[2], 0.0, 1.0);
    assert!((p0 - p1).length() > 1.0);
    assert!((p1 - p2).length() > 1.0);
    assert!((p0 - p2).length() > 1.0);
}

#[test]
fn bob_is_bounded_and_phased_per_ornament() {
    for cfg in &ORBS {
        for i in 0..100 {
            let b = orb_bob(cfg, i as f32 * 0.1);
            assert!(b.abs() <= BOB_AMPLITUDE + 1e-6);
        }
    }
    // Different ids disagree at the same instant.
    let a = orb_bob(&ORBS[0], 3.0);
    let b = orb_bob(&ORBS[1], 3.0);
    assert!((a - b).abs() > 1e-3);
}

#[test]
fn normal_is_radial_and_unit_length() {
    let n = orb_normal(Vec3::new(3.0, 1.5, 4.0));
    assert!((n.length() - 1.0).abs() < 1e-5);
    assert!(n.y.abs() < 1e-6);
    assert!((n.x * 4.0 - n.z * 3.0).abs() < 1e-5); // parallel to (3, 4) in XZ

    // Degenerate position on the axis falls back to +Z.
    assert_eq!(orb_normal(Vec3::new(0.0, 2.0, 0.0)), Vec3::Z);
}

#[test]
fn photos_show_only_while_scattered_enough() {
    assert_eq!(photo_opacity(1.0), 0.0);
    assert_eq!(photo_opacity(PHOTO_SHOW_THRESHOLD), 0.0);
    assert!((photo_opacity(0.0) - 1.0).abs() < 1e-6);

    // Monotonically increasing as the morph falls below the threshold.
    let mut prev = 0.0;
    let mut m = PHOTO_SHOW_THRESHOLD;
    while m > 0.0 {
        let o = photo_opacity(m);
        assert!(o >= prev);
        prev = o;
        m -= 0.05;
    }

    assert!(photo_interactive(0.0));
    assert!(photo_interactive(0.59));
    assert!(!photo_interactive(PHOTO_SHOW_THRESHOLD));
    assert!(!photo_interactive(1.0));
}
