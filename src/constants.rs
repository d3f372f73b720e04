/// Frame smoothing and interaction tuning constants.
///
/// These constants express intended behavior (e.g., easing rates, clamp
/// limits) and keep magic numbers out of the code, improving readability.
// Gesture detection cadence: classify at most once per this interval.
pub const DETECTION_INTERVAL_MS: f64 = 100.0;

// Rotation smoothing toward the store's rotation target. Scattering responds
// faster than forming, matching the snappier scatter morph.
pub const ROT_DAMP_FORMING: f32 = 0.08;
pub const ROT_DAMP_SCATTERING: f32 = 0.15;

// Rotation values are held within this range (store units).
pub const ROTATION_CLAMP: f32 = 5.0;

// Slow auto-spin applied once the field has fully scattered.
pub const AUTO_SPIN_RATE: f32 = 0.15;
// Field morph progress below which the auto-spin engages.
pub const AUTO_SPIN_BELOW: f32 = 0.1;

// Rotation units per full canvas-width drag.
pub const DRAG_ROTATION_GAIN: f32 = 5.0;
// Pointer movement (canvas px) below which a press-release counts as a click.
pub const CLICK_SLOP_PX: f32 = 6.0;

// Camera rig approach rate, per second.
pub const CAMERA_LERP_RATE: f32 = 2.0;

// Picking radius around an ornament center, world units.
pub const ORB_PICK_RADIUS: f32 = 0.7;

// Scale factor from store rotation units to field radians.
pub const FIELD_ROTATION_SCALE: f32 = 0.2;

// Point sizes in pixels at reference depth, per emitter.
pub const FIELD_POINT_SIZE: f32 = 85.0;
// The shader grows orb points by up to 35px on top of this as they form.
pub const ORB_POINT_SIZE_BASE: f32 = 50.0;
pub const SNOW_POINT_SIZE: f32 = 80.0;
pub const SPARKLE_POINT_SIZE: f32 = 18.0;

// Hue breathing speed for the field color cycling.
pub const COLOR_PHASE_RATE: f32 = 0.3;

// Scene generation seeds: fixed so reloads reproduce the same composition.
pub const FIELD_SEED: u64 = 0x5eed_0001;
pub const SNOW_SEED: u64 = 0x5eed_0002;
pub const SPARKLE_SEED: u64 = 0x5eed_0003;
pub const ORB_CLOUD_SEED: u64 = 0x5eed_0004;
pub const STAR_SPARKLE_SEED: u64 = 0x5eed_0005;
