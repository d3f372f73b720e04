//! Bridge between the JS hand-tracking loop and the Rust stores.
//!
//! The landmark model runs in JS (MediaPipe); each detection frame calls
//! [`push_hand_landmarks`] with 21 landmarks flattened to 63 floats in the
//! model's normalized image space. Everything downstream of that call is
//! Rust: throttling, gesture classification, and store updates.

use crate::core::gesture::{self, LANDMARK_COUNT, WRIST};
use crate::core::state::{FocusStore, TrackingStore};
use crate::constants::DETECTION_INTERVAL_MS;
use crate::dom;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TrackerSink {
    tracking: Rc<RefCell<TrackingStore>>,
    focus: Rc<RefCell<FocusStore>>,
    last_sample_ms: f64,
    hand_seen: bool,
}

thread_local! {
    static SINK: RefCell<Option<TrackerSink>> = RefCell::new(None);
}

/// Install the store handles the landmark bridge writes into. Call once
/// during init, before the JS side starts pushing detections.
pub fn install(tracking: Rc<RefCell<TrackingStore>>, focus: Rc<RefCell<FocusStore>>) {
    SINK.with(|sink| {
        *sink.borrow_mut() = Some(TrackerSink {
            tracking,
            focus,
            last_sample_ms: 0.0,
            hand_seen: false,
        });
    });
}

/// Entry point for the JS detection loop. `coords` holds 21 landmarks as
/// x,y,z triples; an empty slice means no hand in frame. Detections arrive
/// at camera rate but are sampled at most once per `DETECTION_INTERVAL_MS`.
#[wasm_bindgen]
pub fn push_hand_landmarks(coords: &[f32], timestamp_ms: f64) {
    SINK.with(|sink| {
        let mut sink = sink.borrow_mut();
        let Some(s) = sink.as_mut() else {
            return;
        };

        let has_hand = coords.len() >= LANDMARK_COUNT * 3;
        if has_hand != s.hand_seen {
            s.hand_seen = has_hand;
            if let Some(doc) = dom::window_document() {
                let text = if has_hand { "hand detected" } else { "no hand" };
                overlay::set_tracker_status(&doc, text, has_hand);
            }
        }
        if !has_hand {
            return;
        }
        if timestamp_ms - s.last_sample_ms < DETECTION_INTERVAL_MS {
            return;
        }
        s.last_sample_ms = timestamp_ms;

        let mut landmarks = [[0.0f32; 3]; LANDMARK_COUNT];
        for (i, lm) in landmarks.iter_mut().enumerate() {
            lm[0] = coords[i * 3];
            lm[1] = coords[i * 3 + 1];
            lm[2] = coords[i * 3 + 2];
        }

        let mut tracking = s.tracking.borrow_mut();
        if let Some(openness) = gesture::hand_openness(&landmarks) {
            gesture::apply_gesture(&mut tracking, openness, timestamp_ms);
        }

        // The wrist steers the view, even during the override window. The one
        // exception: a focused photo on the scattered cloud must hold still.
        let inspecting = s.focus.borrow().focused().is_some() && !tracking.formed();
        if !inspecting {
            let wrist = landmarks[WRIST];
            let rot = gesture::wrist_rotation(wrist[0], wrist[1]);
            tracking.rotation = input::clamp_rotation(rot, gesture::WRIST_ROTATION_GAIN);
        }
    });
}

/// Request the webcam and attach it to the preview video element. Failure is
/// not fatal: without a camera the scene still runs on touch controls.
pub async fn start_webcam(video_id: &str) {
    let Some(window) = web::window() else { return };
    let Ok(media) = window.navigator().media_devices() else {
        log::warn!("[tracker] mediaDevices unavailable, gestures disabled");
        return;
    };

    let video_opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&video_opts, &"width".into(), &JsValue::from_f64(320.0));
    _ = js_sys::Reflect::set(&video_opts, &"height".into(), &JsValue::from_f64(240.0));
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_opts);

    let promise = match media.get_user_media_with_constraints(&constraints) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[tracker] getUserMedia rejected: {:?}", e);
            return;
        }
    };
    let stream = match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[tracker] webcam denied or missing: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::set_tracker_status(&doc, "camera unavailable", false);
            }
            return;
        }
    };

    let Some(doc) = dom::window_document() else { return };
    let Some(el) = doc.get_element_by_id(video_id) else {
        log::warn!("[tracker] missing #{}", video_id);
        return;
    };
    let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() else {
        return;
    };
    let stream: web::MediaStream = stream.unchecked_into();
    video.set_src_object(Some(&stream));
    _ = video.play();
    log::info!("[tracker] webcam streaming");
}
