// Host-side tests for the shared tracking/focus stores.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod state {
    include!("../src/core/state.rs");
}

use state::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn store_starts_scattered_and_unlocked() {
    let s = TrackingStore::new();
    assert!(!s.formed());
    assert!(!s.locked());
    assert_eq!(s.rotation, [0.0, 0.0]);
    assert!(!s.is_override_active(0.0));
}

#[test]
fn subscribers_fire_once_per_actual_change() {
    let mut s = TrackingStore::new();
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    s.subscribe(move |v| seen_cb.borrow_mut().push(v));

    s.set_formed(true);
    s.set_formed(true); // no-op, already formed
    s.set_formed(false);
    s.set_formed(false); // no-op

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn toggle_returns_new_value_and_notifies() {
    let mut s = TrackingStore::new();
    let count = Rc::new(RefCell::new(0u32));
    let count_cb = count.clone();
    s.subscribe(move |_| *count_cb.borrow_mut() += 1);

    assert!(s.toggle_formed());
    assert!(s.formed());
    assert!(!s.toggle_formed());
    assert!(!s.formed());
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn unsubscribe_stops_callbacks() {
    let mut s = TrackingStore::new();
    let count = Rc::new(RefCell::new(0u32));
    let count_cb = count.clone();
    let token = s.subscribe(move |_| *count_cb.borrow_mut() += 1);

    s.set_formed(true);
    s.unsubscribe(token);
    s.set_formed(false);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn override_window_is_half_open() {
    let mut s = TrackingStore::new();
    s.set_manual_override(1000.0, MANUAL_OVERRIDE_MS);

    assert!(s.is_override_active(1000.0));
    assert!(s.is_override_active(2999.9));
    assert!(!s.is_override_active(3000.0));
    assert!(!s.is_override_active(5000.0));
}

#[test]
fn gesture_allowed_blocks_during_override() {
    let mut s = TrackingStore::new();
    assert!(s.gesture_allowed(0.0));

    s.set_manual_override(0.0, MANUAL_OVERRIDE_MS);
    assert!(!s.gesture_allowed(100.0));
    assert!(s.gesture_allowed(2000.0));
}

#[test]
fn lock_freezes_a_scattered_cloud() {
    let mut s = TrackingStore::new();

    // Locked + scattered is the one blocked combination.
    assert!(s.toggle_lock());
    assert!(!s.formed());
    assert!(!s.gesture_allowed(0.0));

    // Locked + formed still accepts gestures.
    s.set_formed(true);
    assert!(s.gesture_allowed(0.0));

    // Unlock restores everything.
    assert!(!s.toggle_lock());
    s.set_formed(false);
    assert!(s.gesture_allowed(0.0));
}

#[test]
fn lock_blocks_the_manual_toggle_on_a_scattered_cloud() {
    let mut s = TrackingStore::new();
    assert!(s.manual_toggle_allowed());

    // Locked + scattered refuses the tap.
    s.toggle_lock();
    assert!(!s.manual_toggle_allowed());

    // Locked + formed still allows scattering by button.
    s.set_formed(true);
    assert!(s.manual_toggle_allowed());

    // Unlike gestures, the override window never blocks the button.
    s.set_manual_override(0.0, MANUAL_OVERRIDE_MS);
    assert!(s.manual_toggle_allowed());
    s.set_formed(false);
    s.toggle_lock();
    assert!(s.manual_toggle_allowed());
}

#[test]
fn focus_store_reports_and_recalls() {
    let mut f = FocusStore::new();
    assert_eq!(f.focused(), None);
    assert_eq!(f.position_of(1), None);

    f.report(1, glam::Vec3::new(2.2, 1.3, 0.0), glam::Vec3::X);
    f.report(2, glam::Vec3::new(-1.0, -0.2, 1.7), glam::Vec3::Z);

    f.focus(1);
    assert_eq!(f.focused(), Some(1));
    assert_eq!(f.position_of(1), Some(glam::Vec3::new(2.2, 1.3, 0.0)));
    assert_eq!(f.normal_of(1), Some(glam::Vec3::X));

    // re-report overwrites, focus persists
    f.report(1, glam::Vec3::new(0.0, 1.3, 2.2), glam::Vec3::Z);
    assert_eq!(f.position_of(1), Some(glam::Vec3::new(0.0, 1.3, 2.2)));
    assert_eq!(f.focused(), Some(1));

    f.clear();
    assert_eq!(f.focused(), None);
    // positions survive a focus clear
    assert!(f.position_of(2).is_some());
}
