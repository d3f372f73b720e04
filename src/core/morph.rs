// Continuous scatter↔form interpolation, one integrator per subsystem.
//
// Each visual subsystem (the main field, each ornament) owns its own `Morph`
// so their easing clocks drift slightly apart; the desynchronization is the
// intended look, not an artifact.

/// Approach rate toward the formed shape, per second.
pub const FORM_RATE: f32 = 2.5;
/// Approach rate toward the scattered cloud, per second. Scatter is snappier.
pub const SCATTER_RATE: f32 = 3.5;

/// Per-step target jump above which the display value gets a brief
/// compression/expansion overshoot.
pub const OVERSHOOT_DELTA: f32 = 0.3;
pub const OVERSHOOT_AMPLITUDE: f32 = 0.05;

/// Exponentially damped progress in \[0, 1\] toward a boolean target.
#[derive(Clone, Copy, Debug)]
pub struct Morph {
    progress: f32,
}

impl Morph {
    pub fn new(initial: f32) -> Self {
        Self {
            progress: initial.clamp(0.0, 1.0),
        }
    }

    pub fn scattered() -> Self {
        Self::new(0.0)
    }

    pub fn formed() -> Self {
        Self::new(1.0)
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// True while a step toward `formed` would move the progress down. A
    /// settled integrator is moving in neither direction and reads false.
    #[inline]
    pub fn is_scattering(&self, formed: bool) -> bool {
        let target = if formed { 1.0 } else { 0.0 };
        target < self.progress
    }

    /// Advance toward `formed` by `dt_sec` seconds and return the display
    /// value. The raw progress moves monotonically toward the target and
    /// never leaves \[0, 1\]; the returned value may briefly overshoot the
    /// raw progress (never the range) during fast transitions.
    pub fn step(&mut self, formed: bool, dt_sec: f32) -> f32 {
        let target = if formed { 1.0 } else { 0.0 };
        let previous = self.progress;
        let scattering = target < previous;
        let rate = if scattering { SCATTER_RATE } else { FORM_RATE };

        self.progress += (target - self.progress) * (dt_sec * rate).min(1.0);
        self.progress = self.progress.clamp(0.0, 1.0);

        let delta = (target - previous).abs();
        if delta > OVERSHOOT_DELTA {
            let overshoot = (delta * std::f32::consts::PI).sin() * OVERSHOOT_AMPLITUDE;
            let signed = if scattering { -overshoot } else { overshoot };
            (self.progress + signed).clamp(0.0, 1.0)
        } else {
            self.progress
        }
    }
}

/// Frame-rate independent exponential approach used for scalar easing
/// (star height, camera-free values) outside the morph pair.
#[inline]
pub fn ease_toward(current: f32, target: f32, rate_per_sec: f32, dt_sec: f32) -> f32 {
    current + (target - current) * (dt_sec * rate_per_sec).min(1.0)
}
