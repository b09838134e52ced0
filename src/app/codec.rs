//! Preference keys and value encodings.
//!
//! Every persisted value goes through this module.  Decoders implement the
//! single failure policy of the store: an absent or malformed value is
//! logged at `debug` and replaced by the caller's default.  Nothing here
//! returns an error.

use log::debug;

use super::ports::PreferenceStore;
use crate::fsm::context::Lap;

pub const KEY_DARK_MODE: &str = "darkMode";
pub const KEY_THEME: &str = "theme";
pub const KEY_24_HOUR: &str = "is24Hour";
pub const KEY_STOPWATCH_TIME: &str = "stopwatchTime";
pub const KEY_STOPWATCH_LAPS: &str = "stopwatchLaps";
pub const KEY_SOUND_ENABLED: &str = "soundEnabled";

// ── Decoding ──────────────────────────────────────────────────

/// Boolean stored as JSON text (`true` / `false`).
pub fn decode_bool(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

/// Non-negative integer stored as decimal text.
pub fn decode_millis(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Lap list stored as a JSON array of `{number, time, split}` records.
pub fn decode_laps(raw: &str) -> Option<Vec<Lap>> {
    serde_json::from_str::<Vec<Lap>>(raw).ok()
}

/// Read `key` and decode it, falling back to `default` when absent or malformed.
pub fn load_or<T, F>(store: &impl PreferenceStore, key: &str, default: T, decode: F) -> T
where
    F: FnOnce(&str) -> Option<T>,
{
    let Some(raw) = store.get(key) else {
        return default;
    };
    match decode(&raw) {
        Some(value) => value,
        None => {
            debug!("prefs: malformed value for '{}', using default", key);
            default
        }
    }
}

// ── Encoding ──────────────────────────────────────────────────

pub fn encode_bool(value: bool) -> String {
    value.to_string()
}

pub fn encode_millis(value: u64) -> String {
    value.to_string()
}

pub fn encode_laps(laps: &[Lap]) -> String {
    // Serialising plain integers into a Vec cannot fail.
    serde_json::to_string(laps).unwrap_or_else(|_| "[]".to_string())
}

/// Write `value` under `key`, logging (and otherwise ignoring) store failures.
pub fn store_or_warn(store: &mut impl PreferenceStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("prefs: failed to persist '{}': {}", key, e);
    }
}
