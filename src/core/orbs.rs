// Orbiting photo ornaments: configuration and orbit/scatter placement.

use glam::Vec3;

/// Morph progress below which an ornament's photo is visible and clickable.
pub const PHOTO_SHOW_THRESHOLD: f32 = 0.6;
/// Camera stand-off distance along the ornament normal when focused.
pub const FOCUS_DISTANCE: f32 = 4.0;
/// Extra radius the ornament flies outward when fully scattered.
pub const SCATTER_FLYOUT: f32 = 3.0;
/// Vertical bob amplitude layered on top of the base position.
pub const BOB_AMPLITUDE: f32 = 0.15;

#[derive(Clone, Copy, Debug)]
pub struct OrbConfig {
    pub id: u32,
    pub orbit_radius: f32,
    pub orbit_height: f32,
    /// Starting angle, radians.
    pub orbit_phase: f32,
    /// Radians per second.
    pub orbit_speed: f32,
    pub color: [f32; 3],
}

/// The three ornaments: staggered heights, 120° apart, slightly different
/// radii and speeds so they never align.
pub const ORBS: [OrbConfig; 3] = [
    OrbConfig {
        id: 1,
        orbit_radius: 2.2,
        orbit_height: 1.3,
        orbit_phase: 0.0,
        orbit_speed: 0.3,
        color: [1.0, 0.42, 0.62],
    },
    OrbConfig {
        id: 2,
        orbit_radius: 2.0,
        orbit_height: -0.2,
        orbit_phase: std::f32::consts::TAU / 3.0,
        orbit_speed: 0.25,
        color: [1.0, 0.85, 0.24],
    },
    OrbConfig {
        id: 3,
        orbit_radius: 2.3,
        orbit_height: -1.5,
        orbit_phase: std::f32::consts::TAU * 2.0 / 3.0,
        orbit_speed: 0.35,
        color: [0.42, 0.8, 1.0],
    },
];

/// World position of an ornament before the floating bob is applied.
///
/// Formed (`morph` → 1): circular orbit at `orbit_radius`/`orbit_height`.
/// Scattered (`morph` → 0): same angle but pushed outward by up to
/// `SCATTER_FLYOUT` and settled at half height. The two are blended by the
/// ornament's own morph progress.
pub fn orb_position(cfg: &OrbConfig, time: f32, morph: f32) -> Vec3 {
    let angle = time * cfg.orbit_speed + cfg.orbit_phase;
    let (sin_a, cos_a) = angle.sin_cos();

    let orbit = Vec3::new(
        cos_a * cfg.orbit_radius,
        cfg.orbit_height,
        sin_a * cfg.orbit_radius,
    );

    let scatter_factor = 1.0 - morph;
    let scatter_radius = cfg.orbit_radius + scatter_factor * SCATTER_FLYOUT;
    let scatter = Vec3::new(
        cos_a * scatter_radius,
        cfg.orbit_height * 0.5,
        sin_a * scatter_radius,
    );

    orbit * morph + scatter * scatter_factor
}

/// Slow vertical bob, phased per ornament so they float independently.
#[inline]
pub fn orb_bob(cfg: &OrbConfig, time: f32) -> f32 {
    (time * 0.8 + cfg.id as f32 * 2.0).sin() * BOB_AMPLITUDE
}

/// Outward-facing radial normal at a world position; `+Z` near the axis so
/// the camera always has somewhere to stand.
pub fn orb_normal(position: Vec3) -> Vec3 {
    let radial = Vec3::new(position.x, 0.0, position.z);
    if radial.length_squared() < 1e-6 {
        Vec3::Z
    } else {
        radial.normalize()
    }
}

/// Photo plane opacity for a given morph progress: fully hidden while the
/// tree is formed, easing in as the ornament scatters.
pub fn photo_opacity(morph: f32) -> f32 {
    if morph >= PHOTO_SHOW_THRESHOLD {
        return 0.0;
    }
    let t = 1.0 - morph / PHOTO_SHOW_THRESHOLD;
    t.powf(1.5)
}

/// Whether the ornament can be picked/clicked at this morph progress.
#[inline]
pub fn photo_interactive(morph: f32) -> bool {
    morph < PHOTO_SHOW_THRESHOLD
}
