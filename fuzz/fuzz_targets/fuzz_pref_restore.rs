//! Fuzz target: preference restore + stopwatch operations
//!
//! Splits the input into stored values for the stopwatch keys, restores
//! an engine from them, then drives it with the remaining bytes as an
//! operation stream.  Verifies:
//! - No panics on arbitrary stored text
//! - Malformed values restore as defaults rather than partial state
//! - Elapsed time never decreases except on reset
//! - The sampler is armed exactly while running
//! - Lap numbers never wrap, even from stored numbers near `u32::MAX`
//!
//! cargo fuzz run fuzz_pref_restore

#![no_main]

use chrono::{NaiveDate, NaiveDateTime};
use libfuzzer_sys::fuzz_target;
use stopclock::adapters::memory_store::MemoryStore;
use stopclock::app::codec::{KEY_SOUND_ENABLED, KEY_STOPWATCH_LAPS, KEY_STOPWATCH_TIME};
use stopclock::app::ports::{CueError, CuePort, PreferenceStore, SamplerPort, TimePort};
use stopclock::app::stopwatch::StopwatchEngine;
use stopclock::config::{Tone, WidgetConfig};

#[derive(Default)]
struct Host {
    now_ms: u64,
    armed: bool,
}

impl TimePort for Host {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
    fn wall_clock(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }
}

impl SamplerPort for Host {
    fn arm_sampler(&mut self, _period_ms: u32) {
        self.armed = true;
    }
    fn disarm_sampler(&mut self) {
        self.armed = false;
    }
    fn sampler_armed(&self) -> bool {
        self.armed
    }
}

impl CuePort for Host {
    fn play_cue(&mut self, _tone: &Tone) -> Result<(), CueError> {
        Err(CueError::Unavailable)
    }
}

fuzz_target!(|data: &[u8]| {
    // Layout: three 0xFF-separated stored values, then the op stream.
    let mut parts = data.splitn(4, |b| *b == 0xFF);
    let elapsed = parts.next().unwrap_or_default();
    let laps = parts.next().unwrap_or_default();
    let sound = parts.next().unwrap_or_default();
    let ops = parts.next().unwrap_or_default();

    let mut store = MemoryStore::new();
    for (key, raw) in [
        (KEY_STOPWATCH_TIME, elapsed),
        (KEY_STOPWATCH_LAPS, laps),
        (KEY_SOUND_ENABLED, sound),
    ] {
        let _ = store.set(key, &String::from_utf8_lossy(raw));
    }

    let mut host = Host::default();
    let mut sw = StopwatchEngine::restore(&WidgetConfig::default(), &store);
    assert!(!sw.is_running());

    let mut last = sw.elapsed_ms();
    for op in ops {
        match op % 6 {
            0 => {
                sw.toggle(&mut host, &mut store);
            }
            1 => {
                host.now_ms += u64::from(op / 6) * 37;
                if host.armed {
                    sw.on_sample_tick(&host, &mut store);
                }
            }
            2 => {
                let before = sw.laps().iter().map(|l| l.number).max().unwrap_or(0);
                if let Some(lap) = sw.record_lap(&mut host, &mut store) {
                    assert!(lap.number >= 1);
                    assert!(lap.number >= before);
                }
            }
            3 => {
                sw.delete_lap(usize::from(op / 6) % 8, &mut store);
            }
            4 => {
                sw.toggle_sound(&mut store);
            }
            _ => {
                sw.reset(&mut host, &mut store);
                last = 0;
            }
        }
        assert!(sw.elapsed_ms() >= last);
        assert_eq!(host.armed, sw.is_running());
        last = sw.elapsed_ms();
    }
    sw.teardown(&mut host);
    assert!(!host.armed);
});
