//! Stopwatch engine — elapsed-time tracking, laps and write-through persistence.
//!
//! [`StopwatchEngine`] owns the FSM and its [`StopwatchContext`].  It is
//! mutated only through its public operations; each one that changes
//! elapsed time, laps or the sound flag writes the new value through to the
//! [`PreferenceStore`] before returning.
//!
//! ```text
//!  toggle ─────▶ ┌──────────┐   toggle / reset   ┌──────────┐
//!                │ STOPPED  │ ◀───────────────── │ RUNNING  │
//!  reset ──────▶ └──────────┘ ─────────────────▶ └──────────┘
//!                                  toggle          │  ▲
//!                                   sample tick ───┘  │ (sampler armed)
//! ```
//!
//! Precondition failures (`record_lap` while stopped or at zero, an
//! out-of-range `delete_lap`) are silent no-ops.  Store and cue failures are
//! logged and discarded.

use log::{debug, info};
use serde::Serialize;

use super::codec::{
    self, KEY_SOUND_ENABLED, KEY_STOPWATCH_LAPS, KEY_STOPWATCH_TIME, decode_bool, decode_laps,
    decode_millis, load_or, store_or_warn,
};
use super::ports::{CuePort, PreferenceStore, SamplerPort, TimePort};
use crate::config::{Tone, WidgetConfig};
use crate::format::format_elapsed;
use crate::fsm::context::{Lap, SamplerCommand, StopwatchContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

/// Read-only view of the stopwatch for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchSnapshot {
    pub state: StateId,
    pub elapsed_ms: u64,
    pub laps: Vec<Lap>,
    pub sound_enabled: bool,
    /// Whether `record_lap` would currently record anything.
    pub can_record_lap: bool,
}

pub struct StopwatchEngine {
    fsm: Fsm,
    ctx: StopwatchContext,
    sample_period_ms: u32,
    tone: Tone,
    /// Highest lap number handed out since the last reset.
    last_lap_number: u32,
    /// Last `stopwatchTime` value written, to skip identical rewrites.
    persisted_elapsed: Option<u64>,
}

impl StopwatchEngine {
    /// Build the engine from persisted state.
    ///
    /// Absent or malformed values default to `0`, `[]` and `true`.  The
    /// engine always starts `Stopped`, and no cue plays.
    pub fn restore(config: &WidgetConfig, store: &impl PreferenceStore) -> Self {
        let mut ctx = StopwatchContext::new();
        ctx.elapsed_ms = load_or(store, KEY_STOPWATCH_TIME, 0, decode_millis);
        ctx.laps = load_or(store, KEY_STOPWATCH_LAPS, Vec::new(), decode_laps);
        ctx.sound_enabled = load_or(store, KEY_SOUND_ENABLED, true, decode_bool);

        let fsm = Fsm::new(build_state_table(), StateId::Stopped);

        info!(
            "Stopwatch restored: elapsed={} laps={} sound={}",
            format_elapsed(ctx.elapsed_ms),
            ctx.laps.len(),
            ctx.sound_enabled
        );

        Self {
            fsm,
            last_lap_number: max_lap_number(&ctx.laps),
            persisted_elapsed: Some(ctx.elapsed_ms),
            ctx,
            sample_period_ms: config.sample_interval_ms,
            tone: config.cue,
        }
    }

    // ── Operations ────────────────────────────────────────────

    /// Start or pause.  Returns the state entered.
    ///
    /// Entering `Running` recomputes the start reference from the frozen
    /// elapsed value and arms the sampler.  Leaving it disarms the sampler
    /// and keeps the last sampled elapsed value.
    pub fn toggle(
        &mut self,
        io: &mut (impl TimePort + SamplerPort + CuePort),
        store: &mut impl PreferenceStore,
    ) -> StateId {
        self.ctx.now_ms = io.now_ms();
        let next = match self.fsm.current_state() {
            StateId::Stopped => StateId::Running,
            StateId::Running => StateId::Stopped,
        };
        self.fsm.force_transition(next, &mut self.ctx);
        self.apply_sampler(io);
        self.persist_elapsed(store);
        self.play_cue(io);
        info!(
            "Stopwatch {:?} at {}",
            next,
            format_elapsed(self.ctx.elapsed_ms)
        );
        next
    }

    /// Stop, zero the elapsed time and clear all laps.  Valid from any state.
    pub fn reset(
        &mut self,
        io: &mut (impl SamplerPort + CuePort),
        store: &mut impl PreferenceStore,
    ) {
        self.fsm.force_transition(StateId::Stopped, &mut self.ctx);
        self.ctx.take_sampler_command();
        io.disarm_sampler();

        self.ctx.elapsed_ms = 0;
        self.ctx.laps.clear();
        self.last_lap_number = 0;

        self.persist_elapsed(store);
        self.persist_laps(store);
        self.play_cue(io);
        info!("Stopwatch reset");
    }

    /// Record a lap at the last sampled elapsed time.
    ///
    /// Only while running with a non-zero elapsed time; otherwise nothing
    /// happens and `None` is returned.
    pub fn record_lap(
        &mut self,
        io: &mut impl CuePort,
        store: &mut impl PreferenceStore,
    ) -> Option<Lap> {
        if !self.can_record_lap() {
            debug!("Lap ignored: state={:?} elapsed={}", self.state(), self.ctx.elapsed_ms);
            return None;
        }

        let time = self.ctx.elapsed_ms;
        let lap = Lap {
            // Numbers are never reissued within a session, so this is not
            // always `laps.len() + 1` once a lap has been deleted.
            number: self.next_lap_number(),
            time,
            split: time.saturating_sub(self.ctx.last_lap_time()),
        };
        self.ctx.laps.push(lap);

        self.persist_laps(store);
        self.play_cue(io);
        info!(
            "Lap #{} at {} (+{})",
            lap.number,
            format_elapsed(lap.time),
            format_elapsed(lap.split)
        );
        Some(lap)
    }

    /// Remove the lap at `index` (position in recording order).
    ///
    /// Remaining laps keep their numbers and splits.  Out of range is a no-op.
    pub fn delete_lap(&mut self, index: usize, store: &mut impl PreferenceStore) -> Option<Lap> {
        if index >= self.ctx.laps.len() {
            debug!("Lap delete ignored: index {} of {}", index, self.ctx.laps.len());
            return None;
        }
        let lap = self.ctx.laps.remove(index);
        self.persist_laps(store);
        info!("Lap #{} deleted", lap.number);
        Some(lap)
    }

    /// Flip the sound flag.  Returns the new value.
    pub fn toggle_sound(&mut self, store: &mut impl PreferenceStore) -> bool {
        self.ctx.sound_enabled = !self.ctx.sound_enabled;
        store_or_warn(
            store,
            KEY_SOUND_ENABLED,
            &codec::encode_bool(self.ctx.sound_enabled),
        );
        info!("Stopwatch sound {}", if self.ctx.sound_enabled { "on" } else { "off" });
        self.ctx.sound_enabled
    }

    /// Periodic sampler callback: recompute elapsed time from the start reference.
    ///
    /// Returns the new elapsed value, or `None` when stopped (a stale fire).
    pub fn on_sample_tick(
        &mut self,
        time: &impl TimePort,
        store: &mut impl PreferenceStore,
    ) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        self.ctx.now_ms = time.now_ms();
        self.fsm.tick(&mut self.ctx);
        self.persist_elapsed(store);
        Some(self.ctx.elapsed_ms)
    }

    /// Discard the engine, cancelling the sampler if it is armed.
    pub fn teardown(self, io: &mut impl SamplerPort) {
        if self.is_running() || io.sampler_armed() {
            io.disarm_sampler();
        }
        debug!("Stopwatch torn down at {}", format_elapsed(self.ctx.elapsed_ms));
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn is_running(&self) -> bool {
        self.state() == StateId::Running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.ctx.elapsed_ms
    }

    pub fn laps(&self) -> &[Lap] {
        &self.ctx.laps
    }

    pub fn sound_enabled(&self) -> bool {
        self.ctx.sound_enabled
    }

    pub fn can_record_lap(&self) -> bool {
        self.is_running() && self.ctx.elapsed_ms > 0
    }

    /// Elapsed time as `mm:ss.cc`.
    pub fn display(&self) -> String {
        format_elapsed(self.ctx.elapsed_ms)
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            state: self.state(),
            elapsed_ms: self.ctx.elapsed_ms,
            laps: self.ctx.laps.clone(),
            sound_enabled: self.ctx.sound_enabled,
            can_record_lap: self.can_record_lap(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Pins at `u32::MAX` rather than wrapping to zero.
    fn next_lap_number(&mut self) -> u32 {
        self.last_lap_number = self
            .last_lap_number
            .max(max_lap_number(&self.ctx.laps))
            .saturating_add(1);
        self.last_lap_number
    }

    fn apply_sampler(&mut self, io: &mut impl SamplerPort) {
        match self.ctx.take_sampler_command() {
            SamplerCommand::Arm => io.arm_sampler(self.sample_period_ms),
            SamplerCommand::Disarm => io.disarm_sampler(),
            SamplerCommand::Keep => {}
        }
    }

    fn play_cue(&self, io: &mut impl CuePort) {
        if !self.ctx.sound_enabled {
            return;
        }
        if let Err(e) = io.play_cue(&self.tone) {
            debug!("Cue skipped: {}", e);
        }
    }

    fn persist_elapsed(&mut self, store: &mut impl PreferenceStore) {
        if self.persisted_elapsed == Some(self.ctx.elapsed_ms) {
            return;
        }
        store_or_warn(
            store,
            KEY_STOPWATCH_TIME,
            &codec::encode_millis(self.ctx.elapsed_ms),
        );
        self.persisted_elapsed = Some(self.ctx.elapsed_ms);
    }

    fn persist_laps(&mut self, store: &mut impl PreferenceStore) {
        store_or_warn(store, KEY_STOPWATCH_LAPS, &codec::encode_laps(&self.ctx.laps));
    }
}

fn max_lap_number(laps: &[Lap]) -> u32 {
    laps.iter().map(|lap| lap.number).max().unwrap_or(0)
}
