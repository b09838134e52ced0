//! Widget configuration parameters
//!
//! All tunable parameters for the clock and stopwatch.
//! Values can be overridden by a JSON file; absent fields keep their defaults.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Default preference file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "stopclock-prefs.json";

/// Core widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    // --- Timing ---
    /// Clock display refresh period (milliseconds)
    pub clock_tick_interval_ms: u32,
    /// Stopwatch re-sampling period while running (milliseconds)
    pub sample_interval_ms: u32,
    /// Host loop sleep between scheduler advances (milliseconds)
    pub loop_interval_ms: u32,

    // --- Feedback ---
    /// Audible cue played on stopwatch transitions
    pub cue: Tone,

    // --- Host ---
    /// Preference file; `None` selects [`DEFAULT_STORE_FILE`]
    pub store_path: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

/// Short fixed-frequency tone with an exponential gain decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tone {
    /// Sine frequency (Hz)
    pub frequency_hz: f32,
    /// Audible duration (milliseconds)
    pub duration_ms: u32,
    /// Gain at onset (0.0–1.0)
    pub start_gain: f32,
    /// Gain reached at `duration_ms`, must be below `start_gain`
    pub end_gain: f32,
    /// Time after onset at which the output resource is released (milliseconds)
    pub release_ms: u32,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration_ms: 100,
            start_gain: 0.1,
            end_gain: 0.01,
            release_ms: 200,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            // Timing
            clock_tick_interval_ms: 1000, // 1 Hz
            sample_interval_ms: 10,       // centisecond display
            loop_interval_ms: 5,

            cue: Tone::default(),

            store_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Preference file this configuration points at.
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

/// Load configuration from a JSON file.
///
/// A missing file yields [`WidgetConfig::default()`].  A file that exists but
/// cannot be parsed, or that holds out-of-range values, is an error: invalid
/// values are rejected, not silently clamped.
pub fn load(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("config: {} not found, using defaults", path.display());
            return Ok(WidgetConfig::default());
        }
        Err(e) => {
            warn!("config: failed to read {}: {}", path.display(), e);
            return Err(ConfigError::IoError);
        }
    };

    let cfg: WidgetConfig = serde_json::from_str(&text).map_err(|e| {
        warn!("config: {} is not valid JSON: {}", path.display(), e);
        ConfigError::Corrupted
    })?;
    validate_config(&cfg)?;
    info!("config: loaded from {}", path.display());
    Ok(cfg)
}

/// Range-check every field.
pub fn validate_config(cfg: &WidgetConfig) -> Result<(), ConfigError> {
    if !(100..=60_000).contains(&cfg.clock_tick_interval_ms) {
        return Err(ConfigError::ValidationFailed(
            "clock_tick_interval_ms must be 100–60000",
        ));
    }
    if !(1..=100).contains(&cfg.sample_interval_ms) {
        return Err(ConfigError::ValidationFailed(
            "sample_interval_ms must be 1–100",
        ));
    }
    if cfg.loop_interval_ms == 0 || cfg.loop_interval_ms > cfg.sample_interval_ms {
        return Err(ConfigError::ValidationFailed(
            "loop_interval_ms must be 1..=sample_interval_ms",
        ));
    }
    if !(20.0..=20_000.0).contains(&cfg.cue.frequency_hz) {
        return Err(ConfigError::ValidationFailed(
            "cue.frequency_hz must be 20–20000",
        ));
    }
    if !(1..=2000).contains(&cfg.cue.duration_ms) {
        return Err(ConfigError::ValidationFailed(
            "cue.duration_ms must be 1–2000",
        ));
    }
    if !(cfg.cue.start_gain > 0.0 && cfg.cue.start_gain <= 1.0) {
        return Err(ConfigError::ValidationFailed(
            "cue.start_gain must be in (0.0, 1.0]",
        ));
    }
    if !(cfg.cue.end_gain > 0.0 && cfg.cue.end_gain < cfg.cue.start_gain) {
        return Err(ConfigError::ValidationFailed(
            "cue.end_gain must be in (0.0, start_gain)",
        ));
    }
    if cfg.cue.release_ms < cfg.cue.duration_ms {
        return Err(ConfigError::ValidationFailed(
            "cue.release_ms must be >= cue.duration_ms",
        ));
    }
    if cfg.log_level.trim().is_empty() {
        return Err(ConfigError::ValidationFailed("log_level must not be empty"));
    }
    Ok(())
}
