//! Clock-style durations such as `01:30:05` or `90:05:250`.

use crate::text::prepend;

pub const DEFAULT_TIME_DELIMITER: &str = ":";

/// Format a duration from its components.
///
/// Overflow carries upward: milliseconds into seconds, seconds into minutes,
/// and minutes into hours. The hour and millisecond segments are only written
/// when given; without an hour segment minutes are never capped at 60, so
/// `time(None, 61, 0, None, ":")` is `"61:00"`.
///
/// Hours, minutes and seconds are padded to two digits, milliseconds to three.
/// Carries saturate at `u64::MAX`.
pub fn time(
    hours: Option<u64>,
    minutes: u64,
    seconds: u64,
    millis: Option<u64>,
    delimiter: &str,
) -> String {
    let mut seconds = seconds;
    let millis = millis.map(|ms| {
        seconds = seconds.saturating_add(ms / 1000);
        ms % 1000
    });

    let mut minutes = minutes.saturating_add(seconds / 60);
    let seconds = seconds % 60;

    let hours = hours.map(|h| {
        let h = h.saturating_add(minutes / 60);
        minutes %= 60;
        h
    });

    let mut parts = Vec::with_capacity(4);
    if let Some(h) = hours {
        parts.push(prepend(h, 2, '0'));
    }
    parts.push(prepend(minutes, 2, '0'));
    parts.push(prepend(seconds, 2, '0'));
    if let Some(ms) = millis {
        parts.push(prepend(ms, 3, '0'));
    }
    parts.join(delimiter)
}
