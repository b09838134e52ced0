//! Pure display formatting.
//!
//! No side effects, no clocks: every function is a function of its inputs
//! only, so the presentation layer and the tests agree byte for byte.
//! Clock strings follow en-US conventions.

use chrono::NaiveDateTime;

/// Format elapsed milliseconds as `mm:ss.cc`.
///
/// Minutes, seconds and centiseconds are zero-padded to two digits and
/// truncated, never rounded.  Minutes are not wrapped at 60: one hour
/// renders as `60:00.00`.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let centis = (ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Format a wall-clock instant as `hh:mm:ss AM` (12-hour) or `HH:mm:ss` (24-hour).
pub fn format_clock_time(at: &NaiveDateTime, use_24_hour: bool) -> String {
    if use_24_hour {
        at.format("%H:%M:%S").to_string()
    } else {
        at.format("%I:%M:%S %p").to_string()
    }
}

/// Format the date part as `Weekday, Month D, YYYY`.
pub fn format_clock_date(at: &NaiveDateTime) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}
