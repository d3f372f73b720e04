#![cfg(target_arch = "wasm32")]
use crate::camera::CameraRig;
use crate::core::{FocusStore, Morph, TrackingStore};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod tracker;

pub use tracker::push_hand_landmarks;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arix-tree starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let tracking = Rc::new(RefCell::new(TrackingStore::new()));
    let focus = Rc::new(RefCell::new(FocusStore::new()));
    let camera_rig = Rc::new(RefCell::new(CameraRig::default()));

    // Keep the toggle button label in sync with the formed state, whichever
    // input changed it.
    tracking.borrow_mut().subscribe(|formed| {
        if let Some(doc) = dom::window_document() {
            dom::set_text(&doc, "btn-toggle-tree", events::toggle_label(formed));
        }
    });
    dom::set_text(
        &document,
        "btn-toggle-tree",
        events::toggle_label(false),
    );

    events::wire_buttons(&document, tracking.clone(), focus.clone());

    tracker::install(tracking.clone(), focus.clone());
    spawn_local(async move {
        tracker::start_webcam("webcam-video").await;
    });

    let gpu = frame::init_gpu(&canvas).await;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tracking: tracking.clone(),
        focus: focus.clone(),
        camera: camera_rig.clone(),
        canvas: canvas.clone(),
        gpu,
        field_morph: Morph::scattered(),
        orb_morphs: [Morph::scattered(), Morph::scattered(), Morph::scattered()],
        star_y: 0.0,
        rot_smoothed: [0.0, 0.0],
        auto_spin: 0.0,
        last_instant: Instant::now(),
        time_accum: 0.0,
        last_countdown_ms: 0.0,
    }));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        tracking: tracking.clone(),
        focus: focus.clone(),
        camera: camera_rig.clone(),
        pointer: pointer.clone(),
        frame_ctx: frame_ctx.clone(),
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
