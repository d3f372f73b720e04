// Host-side tests for the scatter/form morph integrator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod morph {
    include!("../src/core/morph.rs");
}

use morph::*;

#[test]
fn progress_converges_to_the_target() {
    let mut m = Morph::scattered();
    for _ in 0..200 {
        m.step(true, 1.0 / 60.0);
    }
    assert!(m.progress() > 0.99);

    for _ in 0..200 {
        m.step(false, 1.0 / 60.0);
    }
    assert!(m.progress() < 0.01);
}

#[test]
fn raw_progress_is_monotone_and_bounded() {
    let mut m = Morph::scattered();
    let mut prev = m.progress();
    for _ in 0..500 {
        m.step(true, 0.016);
        let p = m.progress();
        assert!(p >= prev, "progress went backwards: {p} < {prev}");
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
}

#[test]
fn scatter_is_faster_than_form() {
    let mut forming = Morph::scattered();
    forming.step(true, 0.1);
    let formed_amount = forming.progress();

    let mut scattering = Morph::formed();
    scattering.step(false, 0.1);
    let scattered_amount = 1.0 - scattering.progress();

    assert!(
        scattered_amount > formed_amount,
        "scatter {scattered_amount} should outpace form {formed_amount}"
    );
}

#[test]
fn large_dt_clamps_instead_of_oscillating() {
    let mut m = Morph::scattered();
    m.step(true, 10.0);
    assert!((0.0..=1.0).contains(&m.progress()));
    let p1 = m.progress();
    m.step(true, 10.0);
    assert!(m.progress() >= p1);
}

#[test]
fn display_overshoots_only_on_large_jumps() {
    // Mid-transition: display exceeds the raw progress.
    let mut m = Morph::new(0.5);
    let display = m.step(true, 0.016);
    assert!(display > m.progress());

    // Close to the target: display equals raw progress.
    let mut near = Morph::new(0.9);
    let display = near.step(true, 0.016);
    assert!((display - near.progress()).abs() < 1e-6);
}

#[test]
fn display_overshoot_stays_in_range() {
    let mut m = Morph::new(0.6);
    let display = m.step(false, 0.001);
    assert!((0.0..=1.0).contains(&display));

    let mut m = Morph::new(0.4);
    let display = m.step(true, 0.001);
    assert!((0.0..=1.0).contains(&display));
}

#[test]
fn ease_toward_approaches_without_crossing() {
    let mut v = 0.0f32;
    for _ in 0..100 {
        let next = ease_toward(v, 1.0, 3.0, 0.016);
        assert!(next > v && next <= 1.0);
        v = next;
    }
    assert!(v > 0.9);

    // Oversized steps clamp to the target exactly.
    assert_eq!(ease_toward(0.0, 1.0, 3.0, 10.0), 1.0);
}

#[test]
fn direction_reads_scattering_only_while_moving_down() {
    // Mid-transition toward scattered counts as scattering.
    let m = Morph::new(0.5);
    assert!(m.is_scattering(false));
    assert!(!m.is_scattering(true));

    // A settled scattered cloud is not scattering anymore.
    let m = Morph::scattered();
    assert!(!m.is_scattering(false));
    assert!(!m.is_scattering(true));

    // A fully formed tree asked to scatter starts scattering.
    let m = Morph::formed();
    assert!(m.is_scattering(false));
    assert!(!m.is_scattering(true));
}
