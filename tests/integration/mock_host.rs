//! Mock host adapters for integration tests.
//!
//! A manual monotonic clock, a real [`Scheduler`] as the sampler (so
//! cancellation is exercised end to end), a recording cue that can be
//! made to fail, and recording sinks and stores.

use chrono::{NaiveDate, NaiveDateTime};
use stopclock::app::events::AppEvent;
use stopclock::app::ports::{
    CueError, CuePort, EventSink, PreferenceStore, SamplerPort, StoreError, TimePort, TimerId,
};
use stopclock::config::Tone;
use stopclock::scheduler::{FiredTimers, Scheduler};

// ── MockHost ──────────────────────────────────────────────────

pub struct MockHost {
    pub now_ms: u64,
    pub wall: NaiveDateTime,
    pub scheduler: Scheduler,
    pub arm_calls: usize,
    pub disarm_calls: usize,
    pub cues: Vec<Tone>,
    pub cue_fails: bool,
}

#[allow(dead_code)]
impl MockHost {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            wall: NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(14, 5, 9)
                .unwrap(),
            scheduler: Scheduler::new(),
            arm_calls: 0,
            disarm_calls: 0,
            cues: Vec::new(),
            cue_fails: false,
        }
    }

    /// Host whose audio output always fails.
    pub fn without_audio() -> Self {
        Self {
            cue_fails: true,
            ..Self::new()
        }
    }

    /// Advance the clock by 1 ms and return the timers that fired.
    ///
    /// Callers dispatch fires themselves; this only moves time.
    pub fn advance_one(&mut self) -> Vec<TimerId> {
        let mut fired = FiredTimers::new();
        self.now_ms += 1;
        self.scheduler.tick(1, &mut fired);
        fired.take().into_iter().collect()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePort for MockHost {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn wall_clock(&self) -> NaiveDateTime {
        self.wall
    }
}

impl SamplerPort for MockHost {
    fn arm_sampler(&mut self, period_ms: u32) {
        self.arm_calls += 1;
        self.scheduler.arm_sampler(period_ms);
    }

    fn disarm_sampler(&mut self) {
        self.disarm_calls += 1;
        self.scheduler.disarm_sampler();
    }

    fn sampler_armed(&self) -> bool {
        self.scheduler.sampler_armed()
    }
}

impl CuePort for MockHost {
    fn play_cue(&mut self, tone: &Tone) -> Result<(), CueError> {
        if self.cue_fails {
            return Err(CueError::Unavailable);
        }
        self.cues.push(*tone);
        Ok(())
    }
}

// ── Stores ────────────────────────────────────────────────────

/// Store whose writes always fail; reads see nothing.
#[derive(Default)]
pub struct FailingStore {
    pub attempts: usize,
}

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(StoreError::IoError)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events other than the high-frequency sample and clock ticks.
    pub fn notable(&self) -> Vec<AppEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, AppEvent::Sampled(_) | AppEvent::ClockTicked(_)))
            .cloned()
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
