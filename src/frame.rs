use crate::camera::{focus_targets, CameraRig};
use crate::constants::*;
use crate::core::{
    breakdown_ms, format_time_left, glow_pulse, orb_bob, orb_normal, orb_position, star_pulse,
    Morph, FocusStore, TrackingStore, ORBS, STAR_EASE_RATE, STAR_RAISED_Y, STAR_SPIN_RATE,
};
use crate::core::morph::ease_toward;
use crate::overlay;
use crate::render::{self, OrbDraw, SceneFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub tracking: Rc<RefCell<TrackingStore>>,
    pub focus: Rc<RefCell<FocusStore>>,
    pub camera: Rc<RefCell<CameraRig>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    // Each subsystem eases on its own clock; they are never shared.
    pub field_morph: Morph,
    pub orb_morphs: [Morph; 3],
    pub star_y: f32,
    pub rot_smoothed: [f32; 2],
    pub auto_spin: f32,

    pub last_instant: Instant,
    pub time_accum: f32,
    pub last_countdown_ms: f64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        self.time_accum += dt_sec;

        let formed = self.tracking.borrow().formed();
        let scattering = self.field_morph.is_scattering(formed);
        let field_display = self.field_morph.step(formed, dt_sec);

        // Rotation smoothing toward the store's target; an actively
        // scattering field responds faster, anything settled uses the calm
        // rate. On top, a slow auto-spin once fully scattered.
        let rotation = self.tracking.borrow().rotation;
        let damp = if scattering {
            ROT_DAMP_SCATTERING
        } else {
            ROT_DAMP_FORMING
        };
        let target_pitch = rotation[1] * FIELD_ROTATION_SCALE;
        let target_yaw = -rotation[0] * FIELD_ROTATION_SCALE;
        self.rot_smoothed[0] += (target_pitch - self.rot_smoothed[0]) * damp;
        self.rot_smoothed[1] += (target_yaw - self.rot_smoothed[1]) * damp;
        if !formed && self.field_morph.progress() < AUTO_SPIN_BELOW {
            self.auto_spin += dt_sec * AUTO_SPIN_RATE;
        }

        // Ornaments: advance their own morphs, place them, and self-report
        // positions/normals for the camera controller and picking.
        let mut orb_draws = [OrbDraw {
            position: glam::Vec3::ZERO,
            morph: 0.0,
        }; 3];
        {
            let mut focus = self.focus.borrow_mut();
            for (i, cfg) in ORBS.iter().enumerate() {
                let morph = self.orb_morphs[i].step(formed, dt_sec);
                let mut pos = orb_position(cfg, self.time_accum, morph);
                focus.report(cfg.id, pos, orb_normal(pos));
                pos.y += orb_bob(cfg, self.time_accum);
                orb_draws[i] = OrbDraw {
                    position: pos,
                    morph,
                };
            }
        }

        // Star rises to the tip as the tree forms.
        let star_target = if formed { STAR_RAISED_Y } else { 0.0 };
        self.star_y = ease_toward(self.star_y, star_target, STAR_EASE_RATE, dt_sec);

        // Camera framing is a pure function of focus + formed, re-derived
        // every frame and smoothed by the rig.
        {
            let focus = self.focus.borrow();
            let (target_eye, target_look) = focus_targets(&focus, formed);
            self.camera
                .borrow_mut()
                .step(target_eye, target_look, dt_sec, CAMERA_LERP_RATE);
        }

        // DOM writes stay off the hot path: the countdown refreshes at 1 Hz.
        let now_ms = js_sys::Date::now();
        if now_ms - self.last_countdown_ms >= 1000.0 {
            self.last_countdown_ms = now_ms;
            let diff = overlay::ms_until_christmas(now_ms);
            let text = format_time_left(&breakdown_ms(diff));
            if let Some(doc) = crate::dom::window_document() {
                overlay::set_countdown_text(&doc, &text);
            }
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let view_proj = self.camera.borrow().view_proj(w as f32, h as f32);
            let scene = SceneFrame {
                view_proj,
                field_morph: field_display,
                field_rotation: [self.rot_smoothed[0], self.rot_smoothed[1] + self.auto_spin],
                orbs: orb_draws,
                star_y: self.star_y,
                star_spin: self.time_accum * STAR_SPIN_RATE,
                star_pulse: star_pulse(self.time_accum),
                glow_pulse: glow_pulse(self.time_accum),
            };
            if let Err(e) = g.render(dt_sec, &scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Current morph progress of one ornament, used by picking to decide
    /// whether its photo is interactive.
    pub fn orb_progress(&self, index: usize) -> f32 {
        self.orb_morphs
            .get(index)
            .map(|m| m.progress())
            .unwrap_or(1.0)
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
