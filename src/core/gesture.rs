// Hand-openness classification over MediaPipe-style landmarks.
//
// The landmark model itself runs outside this crate; we consume a 21-point
// normalized landmark set and reduce it to a single openness scalar, then
// apply hysteresis so the formed flag never flickers at the boundary.

use super::state::TrackingStore;

/// Landmark indices for the 21-point hand model.
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Openness below this reads as a closed fist (form the tree).
pub const FIST_BELOW: f32 = 0.30;
/// Openness above this reads as an open palm (scatter). The gap between the
/// two cutoffs is the hysteresis band: inside it the previous state holds.
pub const PALM_ABOVE: f32 = 0.45;

/// Scaling from normalized wrist position to rotation units.
pub const WRIST_ROTATION_GAIN: f32 = 5.0;

/// What a classified hand pose asks of the formed flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    Form,
    Scatter,
}

/// Mean distance from the wrist to the four non-thumb fingertips.
///
/// Returns `None` when the landmark set is incomplete. The thumb is excluded
/// because its tip stays near the wrist even on an open hand.
pub fn hand_openness(landmarks: &[[f32; 3]]) -> Option<f32> {
    if landmarks.len() < LANDMARK_COUNT {
        return None;
    }
    let wrist = landmarks[WRIST];
    let tips = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    let mut sum = 0.0f32;
    for tip in tips {
        let p = landmarks[tip];
        let dx = p[0] - wrist[0];
        let dy = p[1] - wrist[1];
        let dz = p[2] - wrist[2];
        sum += (dx * dx + dy * dy + dz * dz).sqrt();
    }
    Some(sum / tips.len() as f32)
}

/// Two-threshold classification with a dead band; `None` means "hold".
#[inline]
pub fn classify_openness(openness: f32) -> Option<GestureIntent> {
    if openness < FIST_BELOW {
        Some(GestureIntent::Form)
    } else if openness > PALM_ABOVE {
        Some(GestureIntent::Scatter)
    } else {
        None
    }
}

/// Rotation derived from the wrist position in the camera frame, mapped from
/// \[0, 1\] normalized coordinates to ±`WRIST_ROTATION_GAIN`.
#[inline]
pub fn wrist_rotation(wrist_x: f32, wrist_y: f32) -> [f32; 2] {
    [
        (wrist_x - 0.5) * 2.0 * WRIST_ROTATION_GAIN,
        (wrist_y - 0.5) * 2.0 * WRIST_ROTATION_GAIN,
    ]
}

/// Apply one classified detection to the store, honoring the override window
/// and the lock rule. Returns the intent that was written, if any.
pub fn apply_gesture(
    store: &mut TrackingStore,
    openness: f32,
    now_ms: f64,
) -> Option<GestureIntent> {
    if !store.gesture_allowed(now_ms) {
        return None;
    }
    let intent = classify_openness(openness)?;
    match intent {
        GestureIntent::Form => store.set_formed(true),
        GestureIntent::Scatter => store.set_formed(false),
    }
    Some(intent)
}
