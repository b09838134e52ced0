//! Host time adapter.
//!
//! - `now_ms`: `std::time::Instant`, monotonic from adapter construction.
//! - `wall_clock`: `chrono::Local`, the host's local time zone.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::app::ports::TimePort;

pub struct HostTimeAdapter {
    start: Instant,
}

impl Default for HostTimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTimeAdapter {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimePort for HostTimeAdapter {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn wall_clock(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
