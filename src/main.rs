//! Stopclock — terminal host.
//!
//! Hexagonal architecture driven by a single-threaded polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  FileStore          HostPlatform             LogEventSink      │
//! │  (PreferenceStore)  (Time+Sampler+Cue)       (EventSink)       │
//! │  stdin reader ─▶ InputQueue ─▶ keymap                          │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  StopwatchEngine (FSM) · ClockReader · Appearance      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven): ClockTick · StopwatchSample      │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use env_logger::Env;
use log::{debug, info};

use stopclock::adapters::cue::BellCue;
use stopclock::adapters::file_store::FileStore;
use stopclock::adapters::keymap;
use stopclock::adapters::log_sink::LogEventSink;
use stopclock::adapters::platform::HostPlatform;
use stopclock::app::ports::{TimePort, TimerId};
use stopclock::app::service::AppService;
use stopclock::config::{self, WidgetConfig};
use stopclock::drivers::input;
use stopclock::error::Error;
use stopclock::events::{self, InputConsumer, InputEvent, InputQueue};
use stopclock::scheduler::FiredTimers;

/// Environment variable naming the config file when no argument is given.
const CONFIG_ENV: &str = "STOPCLOCK_CONFIG";

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Configuration + logging ────────────────────────────
    let config_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => config::load(path).map_err(Error::from)?,
        None => WidgetConfig::default(),
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    info!("Stopclock v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!("Config: {}", path.display()),
        None => info!("Config: defaults"),
    }

    // ── 2. Construct adapters ─────────────────────────────────
    let mut store = FileStore::open(config.store_path()).map_err(Error::from)?;
    let mut platform = HostPlatform::new(BellCue::new());
    let mut sink = LogEventSink::new();

    // ── 3. Construct app service ──────────────────────────────
    let mut app = AppService::restore(&config, &store);
    app.start(&platform.time, &mut sink);
    platform
        .scheduler
        .arm(TimerId::ClockTick, config.clock_tick_interval_ms);

    info!("Keys: <space> start/pause · r reset · l lap · x N delete lap N");
    info!("      s sound · f 12/24h · t theme · d dark mode · q quit");

    // ── 4. Event loop ─────────────────────────────────────────
    let mut queue = InputQueue::new();
    let (mut producer, mut consumer) = queue.split();

    std::thread::scope(|s| {
        s.spawn(move || input::run_reader(std::io::stdin().lock(), &mut producer));
        run_loop(
            &config,
            &mut app,
            &mut platform,
            &mut store,
            &mut sink,
            &mut consumer,
        );
    });

    // ── 5. Shutdown ───────────────────────────────────────────
    println!();
    app.shutdown(&mut platform);
    Ok(())
}

/// Poll input, advance timers and redraw until the reader queues `Quit`.
fn run_loop(
    config: &WidgetConfig,
    app: &mut AppService,
    platform: &mut HostPlatform,
    store: &mut FileStore,
    sink: &mut LogEventSink,
    consumer: &mut InputConsumer<'_>,
) {
    let mut fired = FiredTimers::new();
    let mut last_ms = platform.now_ms();
    let mut last_status = String::new();
    let mut quit = false;

    while !quit {
        // Input → commands.
        events::drain_events(consumer, |event| {
            if event == InputEvent::Quit {
                quit = true;
                return;
            }
            match keymap::command_for(event, app.stopwatch().is_running()) {
                Some(cmd) => app.handle_command(cmd, &mut *platform, &mut *store, &mut *sink),
                None => debug!("Unbound input {:?}", event),
            }
        });

        // Timers.  Dispatch happens after `tick` so the scheduler is free
        // to be re-armed or disarmed by the service.
        let now = platform.now_ms();
        platform
            .scheduler
            .tick(now.saturating_sub(last_ms), &mut fired);
        last_ms = now;
        for timer in fired.take() {
            app.on_timer(timer, &platform.time, &mut *store, &mut *sink);
        }

        // Render.
        let status = status_line(app);
        if status != last_status {
            let mut out = std::io::stdout().lock();
            // A closed stdout only loses the display.
            let _ = write!(out, "\r{status}\x1b[K").and_then(|()| out.flush());
            last_status = status;
        }

        std::thread::sleep(Duration::from_millis(u64::from(config.loop_interval_ms)));
    }
}

fn status_line(app: &AppService) -> String {
    let clock = app
        .clock()
        .display()
        .map(|d| format!("{}  {}", d.time, d.date))
        .unwrap_or_default();
    let sw = app.stopwatch();
    let laps = match sw.laps().last() {
        Some(lap) => format!("{} laps, last #{}", sw.laps().len(), lap.number),
        None => "no laps".to_string(),
    };
    format!(
        "{} | {} {} | {} | sound {} | {}{}",
        clock,
        sw.display(),
        if sw.is_running() { "▶" } else { "■" },
        laps,
        if sw.sound_enabled() { "on" } else { "off" },
        app.appearance().theme().label(),
        if app.appearance().dark_mode() { " dark" } else { "" },
    )
}
