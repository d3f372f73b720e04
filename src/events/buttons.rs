use crate::core::state::{FocusStore, TrackingStore, MANUAL_OVERRIDE_MS};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn toggle_label(formed: bool) -> &'static str {
    if formed {
        "Scatter"
    } else {
        "Form Tree"
    }
}

pub fn lock_label(locked: bool) -> &'static str {
    if locked {
        "Unlock"
    } else {
        "Lock"
    }
}

pub fn wire_buttons(
    document: &web::Document,
    tracking: Rc<RefCell<TrackingStore>>,
    focus: Rc<RefCell<FocusStore>>,
) {
    {
        let tracking = tracking.clone();
        dom::add_click_listener(document, "btn-toggle-tree", move || {
            let mut t = tracking.borrow_mut();
            if !t.manual_toggle_allowed() {
                log::info!("[button] toggle tree blocked by lock");
                return;
            }
            let formed = t.toggle_formed();
            t.set_manual_override(js_sys::Date::now(), MANUAL_OVERRIDE_MS);
            log::info!("[button] toggle tree -> formed={}", formed);
        });
    }

    {
        let tracking = tracking.clone();
        dom::add_click_listener(document, "btn-lock", move || {
            let locked = tracking.borrow_mut().toggle_lock();
            if let Some(doc) = dom::window_document() {
                dom::set_text(&doc, "btn-lock", lock_label(locked));
            }
            log::info!("[button] lock -> {}", locked);
        });
    }

    {
        let focus = focus.clone();
        dom::add_click_listener(document, "btn-reset-view", move || {
            tracking.borrow_mut().rotation = [0.0, 0.0];
            focus.borrow_mut().clear();
            if let Some(doc) = dom::window_document() {
                overlay::hide_photos(&doc);
            }
            log::info!("[button] reset view");
        });
    }

    {
        dom::add_click_listener(document, "btn-photo-close", move || {
            focus.borrow_mut().clear();
            if let Some(doc) = dom::window_document() {
                overlay::hide_photos(&doc);
            }
        });
    }
}
