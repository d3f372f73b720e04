use crate::camera::{self, CameraRig};
use crate::constants::{CLICK_SLOP_PX, DRAG_ROTATION_GAIN, ORB_PICK_RADIUS, ROTATION_CLAMP};
use crate::core::orbs::{photo_interactive, ORBS};
use crate::core::state::{FocusStore, TrackingStore, MANUAL_OVERRIDE_MS};
use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracking: Rc<RefCell<TrackingStore>>,
    pub focus: Rc<RefCell<FocusStore>>,
    pub camera: Rc<RefCell<CameraRig>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub frame_ctx: Rc<RefCell<FrameContext<'static>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.down = true;
            ps.dragged = false;
            ps.x = pos.x;
            ps.y = pos.y;
            ps.down_x = pos.x;
            ps.down_y = pos.y;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut ps = w.pointer.borrow_mut();
        if !ps.down {
            ps.x = pos.x;
            ps.y = pos.y;
            return;
        }
        let dx = pos.x - ps.x;
        let dy = pos.y - ps.y;
        ps.x = pos.x;
        ps.y = pos.y;
        if (pos.x - ps.down_x).abs() + (pos.y - ps.down_y).abs() > CLICK_SLOP_PX {
            ps.dragged = true;
        }
        if ps.dragged {
            let delta =
                input::drag_rotation_delta(dx, dy, w.canvas.width() as f32, DRAG_ROTATION_GAIN);
            let mut tracking = w.tracking.borrow_mut();
            let next = [
                tracking.rotation[0] + delta[0],
                tracking.rotation[1] + delta[1],
            ];
            tracking.rotation = input::clamp_rotation(next, ROTATION_CLAMP);
            // a drag owns the view for a moment; gestures stay out
            tracking.set_manual_override(js_sys::Date::now(), MANUAL_OVERRIDE_MS);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_drag = w.pointer.borrow().dragged;
        w.pointer.borrow_mut().down = false;
        if was_drag {
            ev.prevent_default();
            return;
        }

        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (eye, look_at) = {
            let cam = w.camera.borrow();
            (cam.eye, cam.look_at)
        };
        let (ro, rd) = camera::screen_to_world_ray(
            w.canvas.width() as f32,
            w.canvas.height() as f32,
            pos.x,
            pos.y,
            eye,
            look_at,
        );

        let mut best = None::<(u32, f32)>;
        {
            let frame = w.frame_ctx.borrow();
            let focus = w.focus.borrow();
            for (i, cfg) in ORBS.iter().enumerate() {
                if !photo_interactive(frame.orb_progress(i)) {
                    continue;
                }
                if let Some(center) = focus.position_of(cfg.id) {
                    if let Some(t) = input::ray_sphere(ro, rd, center, ORB_PICK_RADIUS) {
                        match best {
                            Some((_, bt)) if t >= bt => {}
                            _ => best = Some((cfg.id, t)),
                        }
                    }
                }
            }
        }

        match best {
            Some((id, _t)) => {
                w.focus.borrow_mut().focus(id);
                if let Some(doc) = dom::window_document() {
                    overlay::show_photo(&doc, id);
                }
                log::info!("[click] focus ornament {}", id);
            }
            None => {
                if w.focus.borrow().focused().is_some() {
                    w.focus.borrow_mut().clear();
                    if let Some(doc) = dom::window_document() {
                        overlay::hide_photos(&doc);
                    }
                    log::info!("[click] clear focus");
                }
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
