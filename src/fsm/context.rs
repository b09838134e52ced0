//! Shared mutable context threaded through every FSM handler.
//!
//! `StopwatchContext` is the single struct that state handlers read from
//! and write to.  It contains the latest monotonic sample, the start
//! reference, the elapsed time, the lap list, the sound flag and the
//! sampler command the engine applies after each transition.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lap record
// ---------------------------------------------------------------------------

/// One recorded checkpoint.
///
/// Serialised field names are part of the persisted format
/// (`{"number":1,"time":20000,"split":20000}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lap {
    /// 1-based label assigned at creation.  Not recomputed on deletion.
    pub number: u32,
    /// Absolute elapsed milliseconds when the lap was recorded.
    pub time: u64,
    /// Milliseconds since the previous lap (or since zero for the first).
    pub split: u64,
}

// ---------------------------------------------------------------------------
// Sampler command (written by state handlers; applied by the engine)
// ---------------------------------------------------------------------------

/// What the engine must do to the [`SamplerPort`](crate::app::ports::SamplerPort)
/// after handlers have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplerCommand {
    /// Leave the sampler as it is.
    #[default]
    Keep,
    /// Arm periodic sampling.
    Arm,
    /// Cancel periodic sampling.
    Disarm,
}

// ---------------------------------------------------------------------------
// StopwatchContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
#[derive(Debug, Clone, Default)]
pub struct StopwatchContext {
    // -- Timing --
    /// Latest monotonic sample (ms), written by the engine before handlers run.
    pub now_ms: u64,
    /// Monotonic instant at which the current run started.
    pub reference_ms: u64,
    /// Elapsed time banked before the current run.  While running,
    /// `elapsed_ms = banked_ms + (now_ms - reference_ms)`.
    pub banked_ms: u64,

    // -- Persisted state --
    /// Milliseconds elapsed since the last reset, paused intervals excluded.
    pub elapsed_ms: u64,
    /// Recorded laps in recording order.
    pub laps: Vec<Lap>,
    /// Whether the audible cue plays.
    pub sound_enabled: bool,

    // -- Outputs --
    /// Sampler action requested by the last transition.
    pub sampler: SamplerCommand,
}

impl StopwatchContext {
    /// Fresh context: zero elapsed, no laps, sound on.
    pub fn new() -> Self {
        Self {
            sound_enabled: true,
            ..Self::default()
        }
    }

    /// Elapsed time of the last recorded lap, or zero.
    pub fn last_lap_time(&self) -> u64 {
        self.laps.last().map_or(0, |lap| lap.time)
    }

    /// Consume the pending sampler command.
    pub fn take_sampler_command(&mut self) -> SamplerCommand {
        core::mem::take(&mut self.sampler)
    }
}
