// The topper star: flat five-pointed mesh plus its placement animation.

use super::field::TREE_HEIGHT;

/// Resting height when the tree is formed.
pub const STAR_RAISED_Y: f32 = TREE_HEIGHT / 2.0 + 0.3;
/// Easing rate toward the target height, per second.
pub const STAR_EASE_RATE: f32 = 3.0;
/// Spin speed, radians per second.
pub const STAR_SPIN_RATE: f32 = 0.5;

pub const STAR_OUTER_RADIUS: f32 = 0.35;
pub const STAR_INNER_RADIUS: f32 = 0.15;
pub const GLOW_OUTER_RADIUS: f32 = 0.5;
pub const GLOW_INNER_RADIUS: f32 = 0.22;
pub const STAR_POINTS: usize = 5;

pub const STAR_SPARKLE_COUNT: usize = 30;

/// Emissive pulse factor at a given time.
#[inline]
pub fn star_pulse(time: f32) -> f32 {
    0.5 + (time * 5.0).sin() * 0.3
}

/// Glow layer scale pulse at a given time.
#[inline]
pub fn glow_pulse(time: f32) -> f32 {
    0.8 + (time * 3.0).sin() * 0.2
}

/// Alternating outer/inner vertices of a five-pointed star outline, starting
/// at the top point, wound clockwise in XY.
pub fn star_outline(outer: f32, inner: f32, points: usize) -> Vec<[f32; 2]> {
    let step = std::f32::consts::PI / points as f32;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f32 * step - std::f32::consts::FRAC_PI_2;
            [angle.cos() * radius, angle.sin() * radius]
        })
        .collect()
}

/// Fan-triangulated flat star mesh around the centroid.
/// Returns interleaved XYZ positions and a triangle index list.
pub fn star_mesh(outer: f32, inner: f32, points: usize) -> (Vec<[f32; 3]>, Vec<u16>) {
    let outline = star_outline(outer, inner, points);
    let mut positions = Vec::with_capacity(outline.len() + 1);
    positions.push([0.0, 0.0, 0.0]);
    for p in &outline {
        positions.push([p[0], p[1], 0.0]);
    }

    let n = outline.len() as u16;
    let mut indices = Vec::with_capacity(outline.len() * 3);
    for i in 0..n {
        indices.push(0);
        indices.push(1 + i);
        indices.push(1 + (i + 1) % n);
    }
    (positions, indices)
}

/// Ring of sparkle positions hugging the star, deterministic per seed.
pub fn star_sparkles(seed: u64) -> Vec<[f32; 3]> {
    use rand::prelude::*;
    let mut rng = StdRng::seed_from_u64(seed);
    (0..STAR_SPARKLE_COUNT)
        .map(|_| {
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let radius = 0.4 + rng.gen::<f32>() * 0.4;
            [
                angle.cos() * radius,
                angle.sin() * radius,
                (rng.gen::<f32>() - 0.5) * 0.3,
            ]
        })
        .collect()
}
