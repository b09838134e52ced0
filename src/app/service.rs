//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the stopwatch engine, the clock reader and the
//! appearance preferences.  It exposes a clean, host-agnostic API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!      TimePort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!   SamplerPort ◀── │        AppService        │
//!       CuePort ◀── │ Stopwatch · Clock · Look │ ◀─▶ PreferenceStore
//!                   └──────────────────────────┘
//! ```
//!
//! The two timekeeping facilities are independent: nothing the stopwatch
//! does touches the clock, and vice versa.

use log::info;

use super::appearance::Appearance;
use super::clock::ClockReader;
use super::commands::AppCommand;
use super::events::{AppEvent, StartupSummary};
use super::ports::{CuePort, EventSink, PreferenceStore, SamplerPort, TimePort, TimerId};
use super::stopwatch::StopwatchEngine;
use crate::config::WidgetConfig;
use crate::fsm::StateId;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    stopwatch: StopwatchEngine,
    clock: ClockReader,
    appearance: Appearance,
    /// Commands handled since startup.
    command_count: u64,
}

impl AppService {
    /// Restore every facility from the preference store.
    ///
    /// Does **not** emit anything or sample the clock. Call [`start`](Self::start) next.
    pub fn restore(config: &WidgetConfig, store: &impl PreferenceStore) -> Self {
        Self {
            stopwatch: StopwatchEngine::restore(config, store),
            clock: ClockReader::initialize(store),
            appearance: Appearance::restore(store),
            command_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Take the first clock sample and announce the restored state.
    pub fn start(&mut self, time: &impl TimePort, sink: &mut impl EventSink) {
        let now = self.clock.tick(time);
        let summary = StartupSummary {
            elapsed_ms: self.stopwatch.elapsed_ms(),
            lap_count: self.stopwatch.laps().len(),
            sound_enabled: self.stopwatch.sound_enabled(),
            use_24_hour: self.clock.use_24_hour(),
            theme: self.appearance.theme(),
            dark_mode: self.appearance.dark_mode(),
        };
        sink.emit(&AppEvent::Started(summary));
        sink.emit(&AppEvent::ClockTicked(now));
        info!("AppService started");
    }

    /// End the session: cancel the stopwatch sampler if it is armed.
    pub fn shutdown(self, io: &mut impl SamplerPort) {
        self.stopwatch.teardown(io);
        info!("AppService stopped after {} commands", self.command_count);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one command from the presentation layer.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        io: &mut (impl TimePort + SamplerPort + CuePort),
        store: &mut impl PreferenceStore,
        sink: &mut impl EventSink,
    ) {
        self.command_count += 1;
        match cmd {
            AppCommand::ToggleStopwatch => {
                let from = self.stopwatch.state();
                let to = self.stopwatch.toggle(io, store);
                sink.emit(&AppEvent::StopwatchStateChanged { from, to });
            }
            AppCommand::ResetStopwatch => {
                let from = self.stopwatch.state();
                self.stopwatch.reset(io, store);
                if from != StateId::Stopped {
                    sink.emit(&AppEvent::StopwatchStateChanged {
                        from,
                        to: StateId::Stopped,
                    });
                }
                sink.emit(&AppEvent::StopwatchReset);
            }
            AppCommand::RecordLap => {
                if let Some(lap) = self.stopwatch.record_lap(io, store) {
                    sink.emit(&AppEvent::LapRecorded(lap));
                }
            }
            AppCommand::DeleteLap(index) => {
                if let Some(lap) = self.stopwatch.delete_lap(index, store) {
                    sink.emit(&AppEvent::LapDeleted { index, lap });
                }
            }
            AppCommand::ToggleSound => {
                let enabled = self.stopwatch.toggle_sound(store);
                sink.emit(&AppEvent::SoundToggled(enabled));
            }
            AppCommand::ToggleClockFormat => {
                let use_24_hour = self.clock.toggle_format(store);
                sink.emit(&AppEvent::ClockFormatChanged(use_24_hour));
            }
            AppCommand::SetTheme(theme) => {
                self.appearance.set_theme(theme, store);
                sink.emit(&AppEvent::ThemeChanged(theme));
            }
            AppCommand::CycleTheme => {
                let theme = self.appearance.theme().next();
                self.appearance.set_theme(theme, store);
                sink.emit(&AppEvent::ThemeChanged(theme));
            }
            AppCommand::ToggleDarkMode => {
                let dark = self.appearance.toggle_dark_mode(store);
                sink.emit(&AppEvent::DarkModeChanged(dark));
            }
        }
    }

    // ── Timer dispatch ────────────────────────────────────────

    /// Route a scheduler fire to the facility that owns it.
    pub fn on_timer(
        &mut self,
        timer: TimerId,
        time: &impl TimePort,
        store: &mut impl PreferenceStore,
        sink: &mut impl EventSink,
    ) {
        match timer {
            TimerId::ClockTick => {
                let now = self.clock.tick(time);
                sink.emit(&AppEvent::ClockTicked(now));
            }
            TimerId::StopwatchSample => {
                if let Some(elapsed) = self.stopwatch.on_sample_tick(time, store) {
                    sink.emit(&AppEvent::Sampled(elapsed));
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stopwatch(&self) -> &StopwatchEngine {
        &self.stopwatch
    }

    pub fn clock(&self) -> &ClockReader {
        &self.clock
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Commands handled since startup.
    pub fn command_count(&self) -> u64 {
        self.command_count
    }
}
