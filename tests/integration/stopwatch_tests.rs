//! Stopwatch engine against the mock host: timing, laps, guards,
//! persistence write-through and cue behaviour.

use stopclock::adapters::memory_store::MemoryStore;
use stopclock::app::codec::{KEY_SOUND_ENABLED, KEY_STOPWATCH_LAPS, KEY_STOPWATCH_TIME};
use stopclock::app::ports::{PreferenceStore, SamplerPort, TimerId};
use stopclock::app::stopwatch::StopwatchEngine;
use stopclock::config::WidgetConfig;
use stopclock::fsm::StateId;
use stopclock::fsm::context::Lap;

use crate::mock_host::{FailingStore, MockHost};

fn engine(store: &impl PreferenceStore) -> StopwatchEngine {
    StopwatchEngine::restore(&WidgetConfig::default(), store)
}

/// Let `ms` milliseconds pass, dispatching sampler fires as they happen.
fn run(sw: &mut StopwatchEngine, host: &mut MockHost, store: &mut impl PreferenceStore, ms: u64) {
    for _ in 0..ms {
        for timer in host.advance_one() {
            if timer == TimerId::StopwatchSample {
                sw.on_sample_tick(host, store);
            }
        }
    }
}

// ── Toggle ────────────────────────────────────────────────────

#[test]
fn toggle_runs_then_freezes_at_last_sample() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    assert_eq!(sw.toggle(&mut host, &mut store), StateId::Running);
    run(&mut sw, &mut host, &mut store, 1_500);
    assert!(sw.elapsed_ms().abs_diff(1_500) <= 10);

    run(&mut sw, &mut host, &mut store, 5);
    let frozen = sw.elapsed_ms();
    assert_eq!(sw.toggle(&mut host, &mut store), StateId::Stopped);
    assert_eq!(sw.elapsed_ms(), frozen, "pause keeps the last sampled value");
    assert!(!host.sampler_armed());

    run(&mut sw, &mut host, &mut store, 2_000);
    assert_eq!(sw.elapsed_ms(), frozen);
    assert_eq!(store.get(KEY_STOPWATCH_TIME), Some(frozen.to_string()));
}

#[test]
fn resume_continues_from_frozen_value() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 1_000);
    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 3_000);
    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 500);

    assert_eq!(sw.elapsed_ms(), 1_500);
}

#[test]
fn rapid_toggling_never_double_counts() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    for _ in 0..10 {
        sw.toggle(&mut host, &mut store);
        sw.toggle(&mut host, &mut store);
        run(&mut sw, &mut host, &mut store, 7);
    }
    assert_eq!(sw.elapsed_ms(), 0);
    assert_eq!(sw.state(), StateId::Stopped);
    assert_eq!(host.arm_calls, host.disarm_calls);
}

// ── Laps ──────────────────────────────────────────────────────

#[test]
fn laps_carry_absolute_time_and_split() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 1_000);
    let first = sw.record_lap(&mut host, &mut store).unwrap();
    run(&mut sw, &mut host, &mut store, 2_500);
    let second = sw.record_lap(&mut host, &mut store).unwrap();

    assert_eq!(first, Lap { number: 1, time: 1_000, split: 1_000 });
    assert_eq!(second, Lap { number: 2, time: 3_500, split: 2_500 });
    assert_eq!(
        store.get(KEY_STOPWATCH_LAPS).as_deref(),
        Some(r#"[{"number":1,"time":1000,"split":1000},{"number":2,"time":3500,"split":2500}]"#)
    );
}

#[test]
fn lap_is_ignored_while_stopped_or_at_zero() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    assert_eq!(sw.record_lap(&mut host, &mut store), None);

    sw.toggle(&mut host, &mut store);
    assert_eq!(sw.record_lap(&mut host, &mut store), None, "zero elapsed");

    run(&mut sw, &mut host, &mut store, 100);
    sw.toggle(&mut host, &mut store);
    assert_eq!(sw.record_lap(&mut host, &mut store), None, "paused");
    assert!(sw.laps().is_empty());
    assert_eq!(store.get(KEY_STOPWATCH_LAPS), None, "nothing written");
}

#[test]
fn delete_keeps_remaining_numbers_and_splits() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    for _ in 0..3 {
        run(&mut sw, &mut host, &mut store, 1_000);
        sw.record_lap(&mut host, &mut store);
    }

    let removed = sw.delete_lap(1, &mut store).unwrap();
    assert_eq!(removed.number, 2);
    assert_eq!(
        sw.laps(),
        &[
            Lap { number: 1, time: 1_000, split: 1_000 },
            Lap { number: 3, time: 3_000, split: 1_000 },
        ]
    );

    assert_eq!(sw.delete_lap(2, &mut store), None, "out of range");
    assert_eq!(sw.laps().len(), 2);
}

#[test]
fn delete_works_while_stopped() {
    let mut store = MemoryStore::new();
    store
        .set(KEY_STOPWATCH_LAPS, r#"[{"number":1,"time":500,"split":500}]"#)
        .unwrap();
    let mut sw = engine(&store);

    assert!(sw.delete_lap(0, &mut store).is_some());
    assert_eq!(store.get(KEY_STOPWATCH_LAPS).as_deref(), Some("[]"));
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn reset_while_running_stops_sampling() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 800);
    sw.record_lap(&mut host, &mut store);

    sw.reset(&mut host, &mut store);
    assert_eq!(sw.state(), StateId::Stopped);
    assert_eq!(sw.elapsed_ms(), 0);
    assert!(sw.laps().is_empty());
    assert!(!host.sampler_armed());

    run(&mut sw, &mut host, &mut store, 1_000);
    assert_eq!(sw.elapsed_ms(), 0, "no stale sample after reset");
    assert_eq!(store.get(KEY_STOPWATCH_TIME).as_deref(), Some("0"));
    assert_eq!(store.get(KEY_STOPWATCH_LAPS).as_deref(), Some("[]"));
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 250);

    sw.reset(&mut host, &mut store);
    let once = sw.snapshot();
    sw.reset(&mut host, &mut store);
    assert_eq!(sw.snapshot(), once);
}

#[test]
fn numbering_restarts_after_reset() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 100);
    sw.record_lap(&mut host, &mut store);
    sw.reset(&mut host, &mut store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 100);
    assert_eq!(sw.record_lap(&mut host, &mut store).unwrap().number, 1);
}

// ── Cue ───────────────────────────────────────────────────────

#[test]
fn cue_plays_on_each_audible_operation() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 50);
    sw.record_lap(&mut host, &mut store);
    sw.toggle(&mut host, &mut store);
    sw.reset(&mut host, &mut store);
    sw.delete_lap(0, &mut store);

    assert_eq!(host.cues.len(), 4);
    assert!(host.cues.iter().all(|t| t.frequency_hz == 800.0));
}

#[test]
fn no_cue_when_sound_disabled() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    assert!(!sw.toggle_sound(&mut store));
    assert_eq!(store.get(KEY_SOUND_ENABLED).as_deref(), Some("false"));
    sw.toggle(&mut host, &mut store);
    sw.reset(&mut host, &mut store);
    assert!(host.cues.is_empty());
}

#[test]
fn cue_failure_never_blocks_a_transition() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::without_audio();
    let mut sw = engine(&store);

    assert_eq!(sw.toggle(&mut host, &mut store), StateId::Running);
    run(&mut sw, &mut host, &mut store, 30);
    assert!(sw.record_lap(&mut host, &mut store).is_some());
    sw.reset(&mut host, &mut store);
    assert_eq!(sw.state(), StateId::Stopped);
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn store_failure_keeps_in_memory_state() {
    let mut store = FailingStore::default();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    run(&mut sw, &mut host, &mut store, 100);
    assert!(sw.record_lap(&mut host, &mut store).is_some());
    assert!(!sw.toggle_sound(&mut store));

    assert_eq!(sw.elapsed_ms(), 100);
    assert_eq!(sw.laps().len(), 1);
    assert!(store.attempts > 0);
}

#[test]
fn teardown_cancels_the_sampler() {
    let mut store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut sw = engine(&store);

    sw.toggle(&mut host, &mut store);
    sw.teardown(&mut host);
    assert!(!host.sampler_armed());
    assert!(host.advance_one().is_empty());
}
