// Camera framing: default orbit view, ornament focus fly-in, and picking
// ray construction. Pure glam math so the host-side tests can drive it.

use super::core::orbs::FOCUS_DISTANCE;
use super::core::state::FocusStore;
use glam::{Mat4, Vec3, Vec4};

pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 2.0, 12.0);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;

pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

/// Smoothed camera state, stepped once per frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE,
            look_at: DEFAULT_LOOK_AT,
        }
    }
}

impl CameraRig {
    /// Lerp toward the target framing with factor `min(dt * rate, 1)`.
    pub fn step(&mut self, target_eye: Vec3, target_look: Vec3, dt_sec: f32, rate: f32) {
        let t = (dt_sec * rate).min(1.0);
        self.eye = self.eye.lerp(target_eye, t);
        self.look_at = self.look_at.lerp(target_look, t);
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        let aspect = width / height.max(1.0);
        let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(self.eye, self.look_at, Vec3::Y);
        proj * view
    }
}

/// Target framing for this frame, re-derived from scratch every time.
///
/// Focused ornament + scattered tree: stand `FOCUS_DISTANCE` out along the
/// ornament's stored radial normal and look at it. Anything else relaxes to
/// the default framing; a focused ornament under a formed tree is ignored
/// rather than chased into the canopy.
pub fn focus_targets(focus: &FocusStore, formed: bool) -> (Vec3, Vec3) {
    if !formed {
        if let Some(id) = focus.focused() {
            if let Some(pos) = focus.position_of(id) {
                let normal = focus.normal_of(id).unwrap_or_else(|| {
                    let radial = Vec3::new(pos.x, 0.0, pos.z);
                    if radial.length_squared() < 1e-6 {
                        Vec3::Z
                    } else {
                        radial.normalize()
                    }
                });
                return (pos + normal * FOCUS_DISTANCE, pos);
            }
        }
    }
    (DEFAULT_EYE, DEFAULT_LOOK_AT)
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)` for the rig's current framing.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    eye: Vec3,
    look_at: Vec3,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(eye, look_at, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize();
    (eye, rd)
}
