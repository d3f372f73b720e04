// Countdown arithmetic for the holiday overlay.
//
// The wasm side computes "milliseconds until next December 25" from the JS
// clock; this module only splits and formats that difference.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

const MS_PER_SEC: u64 = 1000;
const MS_PER_MIN: u64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u64 = 60 * MS_PER_MIN;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Break a millisecond span into calendar-free units, saturating at zero for
/// negative inputs so a just-passed deadline reads 00:00:00:00.
pub fn breakdown_ms(diff_ms: f64) -> TimeLeft {
    let ms = if diff_ms.is_finite() && diff_ms > 0.0 {
        diff_ms as u64
    } else {
        0
    };
    TimeLeft {
        days: ms / MS_PER_DAY,
        hours: (ms / MS_PER_HOUR) % 24,
        minutes: (ms / MS_PER_MIN) % 60,
        seconds: (ms / MS_PER_SEC) % 60,
    }
}

/// "DD : HH : MM : SS" with zero-padded fields.
pub fn format_time_left(t: &TimeLeft) -> String {
    format!(
        "{:02} : {:02} : {:02} : {:02}",
        t.days, t.hours, t.minutes, t.seconds
    )
}
