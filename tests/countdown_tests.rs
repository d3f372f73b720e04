// Host-side tests for the holiday countdown arithmetic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod countdown {
    include!("../src/core/countdown.rs");
}

use countdown::*;

#[test]
fn breakdown_splits_a_mixed_span() {
    // 2 days, 3 hours, 4 minutes, 5 seconds
    let ms = ((((2 * 24 + 3) * 60 + 4) * 60 + 5) * 1000) as f64;
    let t = breakdown_ms(ms);
    assert_eq!(
        t,
        TimeLeft {
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5
        }
    );
}

#[test]
fn breakdown_saturates_at_zero() {
    assert_eq!(breakdown_ms(-5000.0), TimeLeft::default());
    assert_eq!(breakdown_ms(0.0), TimeLeft::default());
    assert_eq!(breakdown_ms(f64::NAN), TimeLeft::default());
}

#[test]
fn sub_second_spans_round_down() {
    let t = breakdown_ms(999.0);
    assert_eq!(t, TimeLeft::default());
    let t = breakdown_ms(1000.0);
    assert_eq!(t.seconds, 1);
}

#[test]
fn units_wrap_at_their_bases() {
    let t = breakdown_ms((25.0 * 3600.0 + 61.0) * 1000.0);
    assert_eq!(t.days, 1);
    assert_eq!(t.hours, 1);
    assert_eq!(t.minutes, 1);
    assert_eq!(t.seconds, 1);
}

#[test]
fn formatting_is_zero_padded() {
    let t = TimeLeft {
        days: 3,
        hours: 0,
        minutes: 12,
        seconds: 9,
    };
    assert_eq!(format_time_left(&t), "03 : 00 : 12 : 09");

    assert_eq!(
        format_time_left(&TimeLeft::default()),
        "00 : 00 : 00 : 00"
    );
}

#[test]
fn large_spans_keep_counting_days() {
    let t = breakdown_ms(365.25 * 24.0 * 3600.0 * 1000.0);
    assert_eq!(t.days, 365);
}
