//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide where they go.

use chrono::NaiveDateTime;

use super::appearance::Theme;
use crate::fsm::StateId;
use crate::fsm::context::Lap;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service restored its state and is ready.
    Started(StartupSummary),

    /// The stopwatch moved between states.
    StopwatchStateChanged { from: StateId, to: StateId },

    /// The stopwatch was zeroed and its laps cleared.
    StopwatchReset,

    /// A lap was appended.
    LapRecorded(Lap),

    /// The lap at `index` was removed.
    LapDeleted { index: usize, lap: Lap },

    /// New sound flag.
    SoundToggled(bool),

    /// New 24-hour flag.
    ClockFormatChanged(bool),

    ThemeChanged(Theme),

    DarkModeChanged(bool),

    /// The clock sampled the wall clock.
    ClockTicked(NaiveDateTime),

    /// The running stopwatch re-sampled its elapsed time (ms).
    Sampled(u64),
}

/// What was restored from the preference store at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupSummary {
    pub elapsed_ms: u64,
    pub lap_count: usize,
    pub sound_enabled: bool,
    pub use_24_hour: bool,
    pub theme: Theme,
    pub dark_mode: bool,
}
