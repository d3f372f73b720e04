use wasm_bindgen::JsValue;
use web_sys as web;

fn show_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Reveal the photo panel for one ornament, hiding the other two.
pub fn show_photo(document: &web::Document, orb_id: u32) {
    for id in 1..=3u32 {
        let el_id = format!("photo-orb-{}", id);
        if id == orb_id {
            show_element(document, &el_id);
        } else {
            hide_element(document, &el_id);
        }
    }
}

pub fn hide_photos(document: &web::Document) {
    for id in 1..=3u32 {
        hide_element(document, &format!("photo-orb-{}", id));
    }
}

pub fn set_countdown_text(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id("countdown") {
        el.set_text_content(Some(text));
    }
}

/// Tracker badge: green "hand" state while landmarks arrive, dim otherwise.
pub fn set_tracker_status(document: &web::Document, text: &str, active: bool) {
    if let Some(el) = document.get_element_by_id("tracker-status") {
        el.set_text_content(Some(text));
        let cl = el.class_list();
        if active {
            _ = cl.add_1("active");
        } else {
            _ = cl.remove_1("active");
        }
    }
}

/// Milliseconds from `now_ms` until the next Dec 25 local midnight.
pub fn ms_until_christmas(now_ms: f64) -> f64 {
    let now = js_sys::Date::new(&JsValue::from_f64(now_ms));
    let year = now.get_full_year();
    let target = js_sys::Date::new_with_year_month_day(year, 11, 25);
    let mut target_ms = target.get_time();
    if target_ms <= now_ms {
        target_ms = js_sys::Date::new_with_year_month_day(year + 1, 11, 25).get_time();
    }
    target_ms - now_ms
}
