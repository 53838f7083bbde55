//! Fixed trading session windows for the A-share market.
//!
//! All windows are time-of-day constants in exchange-local time. Interval
//! checks are half-open: start inclusive, end exclusive.

use chrono::{NaiveDateTime, NaiveTime};
use std::sync::LazyLock;

fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).expect("valid literal time")
}

/// Continuous auction session: morning and afternoon halves
pub static CONTINUOUS_SESSION: LazyLock<[(NaiveTime, NaiveTime); 2]> = LazyLock::new(|| {
    [
        (hms(9, 15, 0), hms(11, 30, 0)),
        (hms(13, 0, 0), hms(15, 0, 0)),
    ]
});

/// Midday trading pause
pub static MIDDAY_PAUSE: LazyLock<(NaiveTime, NaiveTime)> =
    LazyLock::new(|| (hms(11, 30, 0), hms(12, 59, 30)));

/// Transition from midday pause back to the afternoon open
pub static PAUSE_TO_OPEN: LazyLock<(NaiveTime, NaiveTime)> =
    LazyLock::new(|| (hms(12, 59, 30), hms(13, 0, 0)));

/// Default start of the pre-close warning window
pub static PRECLOSE_START: LazyLock<NaiveTime> = LazyLock::new(|| hms(14, 54, 30));

/// Market close instant
pub static CLOSE_TIME: LazyLock<NaiveTime> = LazyLock::new(|| hms(15, 0, 0));

/// Market open instant
pub static OPEN_TIME: LazyLock<NaiveTime> = LazyLock::new(|| hms(9, 30, 0));

/// Check whether a timestamp falls inside the continuous trading session
pub fn is_trading_time(now: NaiveDateTime) -> bool {
    let time = now.time();
    CONTINUOUS_SESSION
        .iter()
        .any(|(begin, end)| *begin <= time && time < *end)
}

/// Check whether a timestamp falls inside the midday pause
pub fn is_midday_pause(now: NaiveDateTime) -> bool {
    let time = now.time();
    let (begin, end) = *MIDDAY_PAUSE;
    begin <= time && time < end
}

/// Check whether a timestamp falls inside the pause-to-open transition
pub fn is_pause_to_open(now: NaiveDateTime) -> bool {
    let time = now.time();
    let (begin, end) = *PAUSE_TO_OPEN;
    begin <= time && time < end
}

/// Check whether a timestamp falls inside the pre-close warning window,
/// using the default window start
pub fn is_closing(now: NaiveDateTime) -> bool {
    is_closing_from(now, *PRECLOSE_START)
}

/// Check whether a timestamp falls inside [start, close)
pub fn is_closing_from(now: NaiveDateTime, start: NaiveTime) -> bool {
    let time = now.time();
    start <= time && time < *CLOSE_TIME
}

/// Check whether the market has closed (time-of-day at or past the close instant)
pub fn is_closed(now: NaiveDateTime) -> bool {
    now.time() >= *CLOSE_TIME
}

/// Check whether the market has opened (time-of-day at or past the open instant)
pub fn is_opened(now: NaiveDateTime) -> bool {
    now.time() >= *OPEN_TIME
}
