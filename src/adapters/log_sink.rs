//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  A terminal renderer or UI bridge would implement the
//! same trait.

use log::{info, trace};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::format::{format_clock_time, format_elapsed};

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(s) => {
                info!(
                    "START | elapsed={} laps={} sound={} | 24h={} theme={} dark={}",
                    format_elapsed(s.elapsed_ms),
                    s.lap_count,
                    s.sound_enabled,
                    s.use_24_hour,
                    s.theme,
                    s.dark_mode,
                );
            }
            AppEvent::StopwatchStateChanged { from, to } => {
                info!("STOPWATCH | {:?} -> {:?}", from, to);
            }
            AppEvent::StopwatchReset => {
                info!("STOPWATCH | reset");
            }
            AppEvent::LapRecorded(lap) => {
                info!(
                    "LAP | #{} time={} split={}",
                    lap.number,
                    format_elapsed(lap.time),
                    format_elapsed(lap.split)
                );
            }
            AppEvent::LapDeleted { index, lap } => {
                info!("LAP | deleted #{} at position {}", lap.number, index + 1);
            }
            AppEvent::SoundToggled(on) => {
                info!("PREF | sound={}", on);
            }
            AppEvent::ClockFormatChanged(use_24_hour) => {
                info!("PREF | 24h={}", use_24_hour);
            }
            AppEvent::ThemeChanged(theme) => {
                info!("PREF | theme={}", theme);
            }
            AppEvent::DarkModeChanged(dark) => {
                info!("PREF | dark={}", dark);
            }
            AppEvent::ClockTicked(now) => {
                trace!("CLOCK | {}", format_clock_time(now, true));
            }
            AppEvent::Sampled(elapsed) => {
                trace!("SAMPLE | {}", format_elapsed(*elapsed));
            }
        }
    }
}
