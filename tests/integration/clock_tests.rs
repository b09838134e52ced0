//! Clock reader and appearance preferences against the mock host.

use chrono::NaiveDate;
use stopclock::adapters::memory_store::MemoryStore;
use stopclock::app::appearance::{Appearance, Theme};
use stopclock::app::clock::ClockReader;
use stopclock::app::codec::{KEY_24_HOUR, KEY_DARK_MODE, KEY_THEME};
use stopclock::app::ports::PreferenceStore;

use crate::mock_host::MockHost;

#[test]
fn formats_reference_instant_in_both_modes() {
    let mut store = MemoryStore::new();
    let host = MockHost::new();
    let mut clock = ClockReader::initialize(&store);

    clock.tick(&host);
    let shown = clock.display().unwrap();
    assert_eq!(shown.time, "02:05:09 PM");
    assert_eq!(shown.date, "Friday, October 16, 2026");

    clock.toggle_format(&mut store);
    assert_eq!(clock.display().unwrap().time, "14:05:09");
}

#[test]
fn midnight_and_noon_in_twelve_hour_mode() {
    let store = MemoryStore::new();
    let mut host = MockHost::new();
    let mut clock = ClockReader::initialize(&store);
    let day = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();

    host.wall = day.and_hms_opt(0, 0, 1).unwrap();
    clock.tick(&host);
    assert_eq!(clock.display().unwrap().time, "12:00:01 AM");

    host.wall = day.and_hms_opt(12, 30, 0).unwrap();
    clock.tick(&host);
    assert_eq!(clock.display().unwrap().time, "12:30:00 PM");
    assert_eq!(clock.display().unwrap().date, "Sunday, January 4, 2026");
}

#[test]
fn format_preference_restores_from_store() {
    let mut store = MemoryStore::new();
    store.set(KEY_24_HOUR, "true").unwrap();
    assert!(ClockReader::initialize(&store).use_24_hour());

    store.set(KEY_24_HOUR, "garbage").unwrap();
    assert!(!ClockReader::initialize(&store).use_24_hour());
}

#[test]
fn appearance_restores_both_preferences() {
    let mut store = MemoryStore::new();
    store.set(KEY_THEME, "cyan").unwrap();
    store.set(KEY_DARK_MODE, "true").unwrap();

    let look = Appearance::restore(&store);
    assert_eq!(look.theme(), Theme::Cyan);
    assert!(look.dark_mode());
    assert_eq!(look.theme().label(), "Arctic");
}

#[test]
fn theme_cycle_wraps_to_blue() {
    let mut store = MemoryStore::new();
    let mut look = Appearance::restore(&store);
    for _ in 0..Theme::ALL.len() {
        look.set_theme(look.theme().next(), &mut store);
    }
    assert_eq!(look.theme(), Theme::Blue);
    assert_eq!(store.get(KEY_THEME).as_deref(), Some("blue"));
}
