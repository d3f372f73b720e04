// Particle emitter generation: the main field plus the ambient layers.
//
// All emitters share one GPU vertex layout; the `params` lane is repurposed
// per emitter (snow packs size/speed/phase there, the others leave it zero).
// Generation is seeded so a given seed reproduces the same scene.

use rand::prelude::*;

/// Particles in the main morphing field.
pub const FIELD_COUNT: usize = 6000;
/// Radius of the ambient scatter ball.
pub const SCATTER_RADIUS: f32 = 8.0;
/// Cone height of the formed shape.
pub const TREE_HEIGHT: f32 = 7.0;
/// Cone radius at the base.
pub const TREE_BASE_RADIUS: f32 = 2.5;
/// Spiral twist applied across the cone height, radians.
pub const TREE_SPIRAL_TURNS: f32 = 10.0;

pub const SNOW_COUNT: usize = 500;
pub const SPARKLE_COUNT: usize = 200;
pub const ORB_CLOUD_COUNT: usize = 400;

/// One particle as uploaded to the GPU. `scatter_pos` and `shape_pos` are the
/// two morph endpoints; the shader mixes between them by morph progress.
#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub scatter_pos: [f32; 3],
    pub shape_pos: [f32; 3],
    pub color: [f32; 3],
    pub params: [f32; 3],
}

/// HSL to linear-ish RGB, h/s/l all in \[0, 1\].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c * 0.5;
    [r + m, g + m, b + m]
}

/// Uniform point inside a ball of `radius` (cbrt radial density correction).
fn sample_ball(rng: &mut StdRng, radius: f32) -> [f32; 3] {
    let r = radius * rng.gen::<f32>().cbrt();
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    [
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    ]
}

/// Festive palette: emerald 60%, gold 25%, red 10%, silver 5%.
fn sample_palette(rng: &mut StdRng) -> [f32; 3] {
    let roll = rng.gen::<f32>();
    if roll < 0.6 {
        hsl_to_rgb(0.4, 0.8, 0.1 + rng.gen::<f32>() * 0.4)
    } else if roll < 0.85 {
        hsl_to_rgb(0.12, 1.0, 0.5 + rng.gen::<f32>() * 0.3)
    } else if roll < 0.95 {
        hsl_to_rgb(0.97, 0.9, 0.4 + rng.gen::<f32>() * 0.2)
    } else {
        hsl_to_rgb(0.6, 0.0, 0.9 + rng.gen::<f32>() * 0.1)
    }
}

/// The main field: scatter ball vs. spiral cone, festive palette.
pub fn generate_field(seed: u64) -> Vec<ParticleVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..FIELD_COUNT)
        .map(|_| {
            let scatter_pos = sample_ball(&mut rng, SCATTER_RADIUS);

            // Cone with a spiral twist; disc-uniform radius at each height.
            let normalized_h = rng.gen::<f32>();
            let y = (normalized_h - 0.5) * TREE_HEIGHT;
            let rim = TREE_BASE_RADIUS * (1.0 - normalized_h);
            let radius = rim * rng.gen::<f32>().sqrt();
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let spiral = normalized_h * TREE_SPIRAL_TURNS;
            let shape_pos = [
                radius * (angle + spiral).cos(),
                y,
                radius * (angle + spiral).sin(),
            ];

            ParticleVertex {
                scatter_pos,
                shape_pos,
                color: sample_palette(&mut rng),
                params: [0.0; 3],
            }
        })
        .collect()
}

/// Snowfall over a wide box; params = (size, fall speed, loop phase).
pub fn generate_snow(seed: u64) -> Vec<ParticleVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SNOW_COUNT)
        .map(|_| {
            let pos = [
                (rng.gen::<f32>() - 0.5) * 40.0,
                (rng.gen::<f32>() - 0.5) * 30.0,
                (rng.gen::<f32>() - 0.5) * 30.0,
            ];
            ParticleVertex {
                scatter_pos: pos,
                shape_pos: pos,
                color: [1.0, 1.0, 1.0],
                params: [
                    0.5 + rng.gen::<f32>() * 1.5,
                    0.3 + rng.gen::<f32>() * 0.5,
                    rng.gen::<f32>() * 30.0,
                ],
            }
        })
        .collect()
}

/// Static gold sparkles drifting with the whole-scene rotation.
pub fn generate_sparkles(seed: u64) -> Vec<ParticleVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SPARKLE_COUNT)
        .map(|_| {
            let pos = [
                (rng.gen::<f32>() - 0.5) * 20.0,
                (rng.gen::<f32>() - 0.5) * 20.0,
                (rng.gen::<f32>() - 0.5) * 20.0,
            ];
            ParticleVertex {
                scatter_pos: pos,
                shape_pos: pos,
                color: [1.0, 0.84, 0.0],
                params: [0.0; 3],
            }
        })
        .collect()
}

/// One ornament's particle cloud: a tight shell when formed, a flattened
/// ring halo when scattered.
pub fn generate_orb_cloud(seed: u64) -> Vec<ParticleVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ORB_CLOUD_COUNT)
        .map(|_| {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let r = 0.22 + rng.gen::<f32>() * 0.1;
            let shape_pos = [
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ];

            let halo_angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let halo_r = 0.5 + rng.gen::<f32>() * 0.6;
            let scatter_pos = [
                halo_r * halo_angle.cos(),
                (rng.gen::<f32>() - 0.5) * 0.4,
                halo_r * halo_angle.sin() * 0.3,
            ];

            ParticleVertex {
                scatter_pos,
                shape_pos,
                color: [1.0, 1.0, 1.0],
                params: [0.0; 3],
            }
        })
        .collect()
}
