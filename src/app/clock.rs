//! Clock reader — samples the wall clock and holds the 12/24-hour preference.

use chrono::NaiveDateTime;
use log::info;

use super::codec::{KEY_24_HOUR, decode_bool, encode_bool, load_or, store_or_warn};
use super::ports::{PreferenceStore, TimePort};
use crate::format::{format_clock_date, format_clock_time};

/// Formatted clock strings for one sampled instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    pub time: String,
    pub date: String,
}

pub struct ClockReader {
    use_24_hour: bool,
    /// Last sampled wall-clock instant.  Never persisted.
    now: Option<NaiveDateTime>,
}

impl ClockReader {
    /// Restore the display-format preference.  Absent or malformed → 12-hour.
    pub fn initialize(store: &impl PreferenceStore) -> Self {
        let use_24_hour = load_or(store, KEY_24_HOUR, false, decode_bool);
        info!("Clock restored: {}-hour format", if use_24_hour { 24 } else { 12 });
        Self {
            use_24_hour,
            now: None,
        }
    }

    /// Sample the wall clock.  Drift between ticks is not compensated.
    pub fn tick(&mut self, time: &impl TimePort) -> NaiveDateTime {
        let now = time.wall_clock();
        self.now = Some(now);
        now
    }

    /// Flip 12/24-hour display and persist it.  Returns the new value.
    pub fn toggle_format(&mut self, store: &mut impl PreferenceStore) -> bool {
        self.use_24_hour = !self.use_24_hour;
        store_or_warn(store, KEY_24_HOUR, &encode_bool(self.use_24_hour));
        info!("Clock format: {}-hour", if self.use_24_hour { 24 } else { 12 });
        self.use_24_hour
    }

    pub fn use_24_hour(&self) -> bool {
        self.use_24_hour
    }

    /// Last sampled instant, `None` before the first tick.
    pub fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }

    /// Formatted time and date for the last sample.
    pub fn display(&self) -> Option<ClockDisplay> {
        self.now.map(|at| ClockDisplay {
            time: format_clock_time(&at, self.use_24_hour),
            date: format_clock_date(&at),
        })
    }
}
