use glam::{Vec2, Vec3};
use web_sys as web;

/// Raw pointer tracking for the canvas: position, pressed state, and the
/// press origin used to distinguish a click from a drag.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub down_x: f32,
    pub down_y: f32,
    pub dragged: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Map a pointer drag delta (canvas px) to a rotation delta in store units.
/// A full-width swipe sweeps `2 * gain` units.
#[inline]
pub fn drag_rotation_delta(dx_px: f32, dy_px: f32, canvas_w: f32, gain: f32) -> [f32; 2] {
    let w = canvas_w.max(1.0);
    [dx_px / w * 2.0 * gain, dy_px / w * 2.0 * gain]
}

#[inline]
pub fn clamp_rotation(rotation: [f32; 2], clamp: f32) -> [f32; 2] {
    [
        rotation[0].clamp(-clamp, clamp),
        rotation[1].clamp(-clamp, clamp),
    ]
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
