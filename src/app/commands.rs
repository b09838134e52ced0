//! Inbound commands to the application service.
//!
//! These represent actions requested by the presentation layer (key
//! presses, pointer clicks) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.  The core never sees the input device itself.

use super::appearance::Theme;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start the stopwatch if stopped, pause it if running.
    ToggleStopwatch,

    /// Stop the stopwatch, zero it and clear all laps.
    ResetStopwatch,

    /// Record a lap (ignored unless running with non-zero elapsed time).
    RecordLap,

    /// Delete the lap at this position in recording order.
    DeleteLap(usize),

    /// Flip the stopwatch's audible cue on or off.
    ToggleSound,

    /// Flip the clock between 12- and 24-hour display.
    ToggleClockFormat,

    /// Select a colour theme.
    SetTheme(Theme),

    /// Advance to the next colour theme.
    CycleTheme,

    /// Flip dark mode.
    ToggleDarkMode,
}
