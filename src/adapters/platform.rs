//! Host platform bundle.
//!
//! The stopwatch needs time, sampler and cue ports in one argument.  On
//! the host those come from three separate adapters; [`HostPlatform`]
//! groups them and forwards each port by delegation.

use chrono::NaiveDateTime;

use super::cue::BellCue;
use super::time::HostTimeAdapter;
use crate::app::ports::{CueError, CuePort, SamplerPort, TimePort};
use crate::config::Tone;
use crate::scheduler::Scheduler;

pub struct HostPlatform<C: CuePort = BellCue> {
    pub time: HostTimeAdapter,
    pub scheduler: Scheduler,
    pub cue: C,
}

impl<C: CuePort> HostPlatform<C> {
    pub fn new(cue: C) -> Self {
        Self {
            time: HostTimeAdapter::new(),
            scheduler: Scheduler::new(),
            cue,
        }
    }
}

impl<C: CuePort> TimePort for HostPlatform<C> {
    fn now_ms(&self) -> u64 {
        self.time.now_ms()
    }

    fn wall_clock(&self) -> NaiveDateTime {
        self.time.wall_clock()
    }
}

impl<C: CuePort> SamplerPort for HostPlatform<C> {
    fn arm_sampler(&mut self, period_ms: u32) {
        self.scheduler.arm_sampler(period_ms);
    }

    fn disarm_sampler(&mut self) {
        self.scheduler.disarm_sampler();
    }

    fn sampler_armed(&self) -> bool {
        self.scheduler.sampler_armed()
    }
}

impl<C: CuePort> CuePort for HostPlatform<C> {
    fn play_cue(&mut self, tone: &Tone) -> Result<(), CueError> {
        self.cue.play_cue(tone)
    }
}
