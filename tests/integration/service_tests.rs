//! AppService command and timer dispatch, end to end through the
//! scheduler the host loop uses.

use stopclock::adapters::keymap::command_for;
use stopclock::adapters::memory_store::MemoryStore;
use stopclock::app::appearance::Theme;
use stopclock::app::commands::AppCommand;
use stopclock::app::events::AppEvent;
use stopclock::app::ports::{SamplerPort, TimerId};
use stopclock::app::service::AppService;
use stopclock::config::WidgetConfig;
use stopclock::drivers::input::parse_line;
use stopclock::fsm::StateId;

use crate::mock_host::{MockHost, RecordingSink};

struct Harness {
    app: AppService,
    host: MockHost,
    store: MemoryStore,
    sink: RecordingSink,
}

impl Harness {
    fn new() -> Self {
        let config = WidgetConfig::default();
        let store = MemoryStore::new();
        let mut host = MockHost::new();
        let mut sink = RecordingSink::new();
        let mut app = AppService::restore(&config, &store);
        app.start(&host, &mut sink);
        host.scheduler
            .arm(TimerId::ClockTick, config.clock_tick_interval_ms);
        Self { app, host, store, sink }
    }

    fn send(&mut self, cmd: AppCommand) {
        self.app
            .handle_command(cmd, &mut self.host, &mut self.store, &mut self.sink);
    }

    /// Feed one terminal line through the input mapping.
    fn key(&mut self, line: &str) {
        let event = parse_line(line).expect("bound line");
        if let Some(cmd) = command_for(event, self.app.stopwatch().is_running()) {
            self.send(cmd);
        }
    }

    fn run(&mut self, ms: u64) {
        for _ in 0..ms {
            for timer in self.host.advance_one() {
                self.app
                    .on_timer(timer, &self.host, &mut self.store, &mut self.sink);
            }
        }
    }
}

#[test]
fn start_emits_summary_and_first_clock_sample() {
    let h = Harness::new();
    assert!(matches!(h.sink.events[0], AppEvent::Started(_)));
    assert!(matches!(h.sink.events[1], AppEvent::ClockTicked(_)));
}

#[test]
fn clock_ticks_independently_of_stopwatch() {
    let mut h = Harness::new();
    h.run(3_000);
    let ticks = h
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ClockTicked(_)))
        .count();
    assert_eq!(ticks, 1 + 3);
    assert_eq!(h.app.stopwatch().elapsed_ms(), 0);
}

#[test]
fn keyboard_session_records_laps() {
    let mut h = Harness::new();

    h.key("l");
    assert!(h.app.stopwatch().laps().is_empty(), "lap key unbound while stopped");

    h.key(" ");
    h.run(1_000);
    h.key("L");
    h.run(500);
    h.key("l");
    h.key(" ");

    let laps = h.app.stopwatch().laps();
    assert_eq!(laps.len(), 2);
    assert_eq!((laps[1].time, laps[1].split), (1_500, 500));

    h.key("x 1");
    assert_eq!(h.app.stopwatch().laps()[0].number, 2);

    h.key("r");
    assert_eq!(h.app.stopwatch().elapsed_ms(), 0);
    assert!(h.app.stopwatch().laps().is_empty());
}

#[test]
fn notable_events_follow_the_session() {
    let mut h = Harness::new();
    h.sink.events.clear();

    h.send(AppCommand::ToggleStopwatch);
    h.run(20);
    h.send(AppCommand::RecordLap);
    h.send(AppCommand::ToggleSound);
    h.send(AppCommand::ResetStopwatch);

    let notable = h.sink.notable();
    assert_eq!(notable.len(), 5);
    assert_eq!(
        notable[0],
        AppEvent::StopwatchStateChanged {
            from: StateId::Stopped,
            to: StateId::Running
        }
    );
    assert!(matches!(notable[1], AppEvent::LapRecorded(l) if l.time == 20));
    assert_eq!(notable[2], AppEvent::SoundToggled(false));
    assert_eq!(
        notable[3],
        AppEvent::StopwatchStateChanged {
            from: StateId::Running,
            to: StateId::Stopped
        }
    );
    assert_eq!(notable[4], AppEvent::StopwatchReset);
    assert!(
        h.sink.events.iter().any(|e| matches!(e, AppEvent::Sampled(20))),
        "sample events while running"
    );
}

#[test]
fn preference_commands_write_through() {
    let mut h = Harness::new();
    h.key("f");
    h.key("t");
    h.key("d");
    h.send(AppCommand::SetTheme(Theme::Pink));

    let reloaded = AppService::restore(&WidgetConfig::default(), &h.store);
    assert!(reloaded.clock().use_24_hour());
    assert!(reloaded.appearance().dark_mode());
    assert_eq!(reloaded.appearance().theme(), Theme::Pink);
}

#[test]
fn shutdown_disarms_running_sampler() {
    let mut h = Harness::new();
    h.send(AppCommand::ToggleStopwatch);
    assert!(h.host.sampler_armed());

    let Harness { app, mut host, .. } = h;
    app.shutdown(&mut host);
    assert!(!host.sampler_armed());
}
