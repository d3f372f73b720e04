// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!((t - 3.0).abs() < 1e-5, "should hit the near surface at t=3");
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(1.0, 0.0, 0.0);

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    // Sphere entirely behind the ray origin.
    let center = glam::Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_grazing_hit() {
    let ray_origin = glam::Vec3::new(0.0, 2.0, 0.0);
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    // Sphere of radius 2 centered on the ray's closest-approach axis.
    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let t = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-3);
}

#[test]
fn drag_delta_scales_with_canvas_width() {
    // A full-width swipe sweeps 2 * gain units in x.
    let d = drag_rotation_delta(800.0, 0.0, 800.0, 5.0);
    assert!((d[0] - 10.0).abs() < 1e-5);
    assert!(d[1].abs() < 1e-6);

    // Same pixel delta on a wider canvas rotates less.
    let narrow = drag_rotation_delta(100.0, 50.0, 400.0, 5.0);
    let wide = drag_rotation_delta(100.0, 50.0, 1600.0, 5.0);
    assert!(narrow[0] > wide[0]);
    assert!(narrow[1] > wide[1]);
}

#[test]
fn drag_delta_survives_a_zero_width_canvas() {
    let d = drag_rotation_delta(10.0, 10.0, 0.0, 5.0);
    assert!(d[0].is_finite() && d[1].is_finite());
}

#[test]
fn rotation_clamps_both_axes_independently() {
    let r = clamp_rotation([7.0, -9.0], 5.0);
    assert_eq!(r, [5.0, -5.0]);

    let r = clamp_rotation([1.0, -2.0], 5.0);
    assert_eq!(r, [1.0, -2.0]);
}
