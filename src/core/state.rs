// Shared animation state read by every visual subsystem once per frame.
//
// These stores deliberately live outside any UI/render-triggering state: the
// frame loop mutates and reads them at 60fps, and only explicit subscribers
// (button labels, the status badge) hear about discrete changes. Time is
// injected as milliseconds so the override window is testable off-wasm.

use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

/// How long a manual action suppresses gesture-driven writes.
pub const MANUAL_OVERRIDE_MS: f64 = 2000.0;

type Listener = Box<dyn FnMut(bool)>;

/// Mutable record driving the scatter/form choreography.
///
/// Writers: the gesture tracker (throttled), button handlers, and the pointer
/// drag handler (rotation only). Readers: every per-frame routine. Single
/// threaded; the override window serializes gesture vs. manual writers.
pub struct TrackingStore {
    formed: bool,
    pub rotation: [f32; 2],
    locked: bool,
    override_until_ms: f64,
    listeners: SmallVec<[(usize, Listener); 2]>,
    next_listener_id: usize,
}

impl Default for TrackingStore {
    fn default() -> Self {
        Self {
            formed: false,
            rotation: [0.0, 0.0],
            locked: false,
            override_until_ms: 0.0,
            listeners: SmallVec::new(),
            next_listener_id: 0,
        }
    }
}

impl TrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn formed(&self) -> bool {
        self.formed
    }

    /// Update the formed flag. Subscribers fire exactly once per actual value
    /// change; repeated identical sets are silent.
    pub fn set_formed(&mut self, value: bool) {
        if self.formed != value {
            self.formed = value;
            for (_, cb) in self.listeners.iter_mut() {
                cb(value);
            }
        }
    }

    /// Flip the formed flag and return the new value.
    pub fn toggle_formed(&mut self) -> bool {
        let next = !self.formed;
        self.set_formed(next);
        next
    }

    /// Register a change callback; returns a token for `unsubscribe`.
    pub fn subscribe(&mut self, cb: impl FnMut(bool) + 'static) -> usize {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(cb)));
        id
    }

    pub fn unsubscribe(&mut self, token: usize) {
        self.listeners.retain(|(id, _)| *id != token);
    }

    /// Suppress gesture writes until `now_ms + duration_ms`.
    pub fn set_manual_override(&mut self, now_ms: f64, duration_ms: f64) {
        self.override_until_ms = now_ms + duration_ms;
    }

    #[inline]
    pub fn is_override_active(&self, now_ms: f64) -> bool {
        now_ms < self.override_until_ms
    }

    #[inline]
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Flip the lock and return the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// Product rule for gesture writes: the override window blocks both
    /// directions, while the lock holds only a scattered cloud in place. A
    /// locked, formed tree still accepts gestures so an open palm can always
    /// bring the cloud back.
    #[inline]
    pub fn gesture_allowed(&self, now_ms: f64) -> bool {
        !self.is_override_active(now_ms) && (!self.locked || self.formed)
    }

    /// Same lock rule as gestures, minus the override check: a button press
    /// is itself the manual action, so it only yields to the lock on a
    /// scattered cloud.
    #[inline]
    pub fn manual_toggle_allowed(&self) -> bool {
        !self.locked || self.formed
    }
}

/// Which orbiting ornament (if any) the camera should frame, plus the last
/// world position/normal each ornament reported for itself this frame.
///
/// No ownership conflict by construction: each ornament writes only its own
/// entry, the camera controller only reads.
#[derive(Default)]
pub struct FocusStore {
    focused: Option<u32>,
    positions: FnvHashMap<u32, Vec3>,
    normals: FnvHashMap<u32, Vec3>,
}

impl FocusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-frame self-registration by an ornament's animation routine.
    pub fn report(&mut self, id: u32, position: Vec3, normal: Vec3) {
        self.positions.insert(id, position);
        self.normals.insert(id, normal);
    }

    #[inline]
    pub fn focused(&self) -> Option<u32> {
        self.focused
    }

    pub fn focus(&mut self, id: u32) {
        self.focused = Some(id);
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    #[inline]
    pub fn position_of(&self, id: u32) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }

    #[inline]
    pub fn normal_of(&self, id: u32) -> Option<Vec3> {
        self.normals.get(&id).copied()
    }
}
