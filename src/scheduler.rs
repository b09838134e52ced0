//! Periodic timer engine.
//!
//! Drives both timekeeping cadences from one host loop.  The scheduler
//! notifies a [`SchedulerDelegate`] when a timer fires; the main loop
//! collects fires into [`FiredTimers`] and forwards them to the service.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Timer slots                            │
//! │                                                              │
//! │   ┌──────────────────┐          ┌──────────────────────┐     │
//! │   │ ClockTick        │          │ StopwatchSample      │     │
//! │   │ 1000 ms, always  │          │ 10 ms, while running │     │
//! │   └────────┬─────────┘          └──────────┬───────────┘     │
//! │            │                               │                 │
//! │            ▼                               ▼                 │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 SchedulerDelegate                      │  │
//! │  │          (main loop collects into FiredTimers)         │  │
//! │  └───────────────────────┬────────────────────────────────┘  │
//! │                          ▼                                   │
//! │                  AppService.on_timer()                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the host loop thread, so a disarm takes effect
//! before the next [`Scheduler::tick`]: no stale fire can follow it.

use heapless::Vec;
use log::{debug, info, warn};

use crate::app::ports::{SamplerPort, SchedulerDelegate, TimerId};

// ═══════════════════════════════════════════════════════════════
//  Timer slots
// ═══════════════════════════════════════════════════════════════

/// Number of timer slots, one per [`TimerId`].
pub const TIMER_SLOTS: usize = 2;

fn slot_index(timer: TimerId) -> usize {
    match timer {
        TimerId::ClockTick => 0,
        TimerId::StopwatchSample => 1,
    }
}

/// Internal bookkeeping for an armed timer.
#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    timer: TimerId,
    interval_ms: u32,
    /// Milliseconds accumulated since the last fire.
    elapsed_ms: u64,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// The scheduler engine.
///
/// Decoupled from the service: when a timer fires it invokes the
/// [`SchedulerDelegate`] rather than calling into the domain directly.
#[derive(Debug, Default)]
pub struct Scheduler {
    slots: [Option<TimerEntry>; TIMER_SLOTS],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a periodic timer.  Re-arming restarts its period.
    pub fn arm(&mut self, timer: TimerId, interval_ms: u32) {
        let interval_ms = interval_ms.max(1);
        self.slots[slot_index(timer)] = Some(TimerEntry {
            timer,
            interval_ms,
            elapsed_ms: 0,
        });
        info!("Scheduler: armed {:?} every {}ms", timer, interval_ms);
    }

    /// Cancel a timer.  Idempotent.
    pub fn disarm(&mut self, timer: TimerId) {
        if self.slots[slot_index(timer)].take().is_some() {
            info!("Scheduler: disarmed {:?}", timer);
        }
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.slots[slot_index(timer)].is_some()
    }

    /// Advance all armed timers by `elapsed_ms`.
    ///
    /// Each timer fires at most once per call.  Whole periods missed by a
    /// late call collapse into that single fire; the sub-period remainder
    /// carries over so the cadence does not drift.
    pub fn tick(&mut self, elapsed_ms: u64, delegate: &mut dyn SchedulerDelegate) {
        for entry in self.slots.iter_mut().flatten() {
            entry.elapsed_ms += elapsed_ms;
            let interval = u64::from(entry.interval_ms);
            if entry.elapsed_ms < interval {
                continue;
            }
            if entry.elapsed_ms >= 2 * interval {
                debug!(
                    "Scheduler: {:?} late by {}ms",
                    entry.timer,
                    entry.elapsed_ms - interval
                );
            }
            entry.elapsed_ms %= interval;
            delegate.on_timer_fired(entry.timer);
        }
    }

    /// Number of armed timers.
    pub fn active_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

/// The scheduler doubles as the stopwatch's sampler host.
impl SamplerPort for Scheduler {
    fn arm_sampler(&mut self, period_ms: u32) {
        self.arm(TimerId::StopwatchSample, period_ms);
    }

    fn disarm_sampler(&mut self) {
        self.disarm(TimerId::StopwatchSample);
    }

    fn sampler_armed(&self) -> bool {
        self.is_armed(TimerId::StopwatchSample)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Fire collection
// ═══════════════════════════════════════════════════════════════

/// Delegate that buffers fires for dispatch after `tick` returns.
#[derive(Debug, Default)]
pub struct FiredTimers(Vec<TimerId, TIMER_SLOTS>);

impl FiredTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the buffered fires in firing order, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<TimerId, TIMER_SLOTS> {
        core::mem::take(&mut self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SchedulerDelegate for FiredTimers {
    fn on_timer_fired(&mut self, timer: TimerId) {
        if self.0.push(timer).is_err() {
            warn!("Scheduler: fire buffer full, dropping {:?}", timer);
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
