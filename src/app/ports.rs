//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (preference store, clocks, sampler, audio, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! and the facilities it owns consume them via generics passed at call
//! sites, so the domain core never touches a file, a terminal or a real
//! clock directly.
//!
//! ## Failure policy
//!
//! - **PreferenceStore** reads never fail: an absent key is `None`, and a
//!   value that cannot be decoded is treated the same way by the caller.
//! - **PreferenceStore** writes and **CuePort** playback return typed errors,
//!   but the domain logs and discards them.  Neither may interrupt a state
//!   transition.

use chrono::NaiveDateTime;

use crate::config::Tone;

// ───────────────────────────────────────────────────────────────
// Preference store (driven adapter: domain ↔ per-profile key-value store)
// ───────────────────────────────────────────────────────────────

/// String key-value store scoped to one user profile.
///
/// Values are serialised by the caller (see [`codec`](super::codec)).
/// Implementations must make a successful `set` visible to the next `get`
/// on the same instance.
pub trait PreferenceStore {
    /// Read a value.  `None` if the key has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: host clocks → domain)
// ───────────────────────────────────────────────────────────────

/// Time source for both timekeeping facilities.
pub trait TimePort {
    /// Monotonic milliseconds since an arbitrary, fixed origin.
    ///
    /// Never goes backwards.  Elapsed stopwatch time is derived from this.
    fn now_ms(&self) -> u64;

    /// Current local wall-clock time, for the clock display only.
    fn wall_clock(&self) -> NaiveDateTime;
}

// ───────────────────────────────────────────────────────────────
// Sampler port (driven adapter: domain → host timer)
// ───────────────────────────────────────────────────────────────

/// Cancellable periodic callback used while the stopwatch runs.
///
/// Once [`disarm_sampler`](Self::disarm_sampler) returns, the host must not
/// deliver any further sample fires until the sampler is armed again.
pub trait SamplerPort {
    /// Start (or restart) periodic sampling every `period_ms`.
    fn arm_sampler(&mut self, period_ms: u32);

    /// Stop periodic sampling.  Idempotent.
    fn disarm_sampler(&mut self);

    /// Whether a sampler is currently armed.
    fn sampler_armed(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Cue port (driven adapter: domain → audio output)
// ───────────────────────────────────────────────────────────────

/// Audible feedback output.
///
/// Playback is fire-and-forget.  Implementations acquire their output
/// resource for the duration of one call and release it before returning,
/// on success and on failure.
pub trait CuePort {
    fn play_cue(&mut self, tone: &Tone) -> Result<(), CueError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / presentation)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, terminal,
/// a UI re-render queue, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from dispatch)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scheduler invokes when a timer fires.
///
/// This decouples the [`Scheduler`](crate::scheduler::Scheduler) from the
/// service.  The host loop collects fires through this trait and then
/// forwards them to [`AppService::on_timer`](super::service::AppService::on_timer).
pub trait SchedulerDelegate {
    fn on_timer_fired(&mut self, timer: TimerId);
}

/// Identity of a periodic timer driven by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Wall-clock display refresh (nominal 1000 ms).
    ClockTick,
    /// Stopwatch elapsed-time re-sampling (nominal 10 ms, only while running).
    StopwatchSample,
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`PreferenceStore`] writes and store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Backing medium could not be read or written.
    IoError,
    /// Stored data failed to (de)serialise.
    Corrupted,
}

/// Errors from [`CuePort`] playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueError {
    /// No audio output is available on this host.
    Unavailable,
    /// Output existed but the write failed.
    IoError,
}

/// Errors from configuration loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config file at the requested path.
    NotFound,
    /// The file is not valid JSON for [`WidgetConfig`](crate::config::WidgetConfig).
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error while reading the file.
    IoError,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IoError => write!(f, "I/O error"),
            Self::Corrupted => write!(f, "store corrupted"),
        }
    }
}

impl core::fmt::Display for CueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "audio output unavailable"),
            Self::IoError => write!(f, "audio output I/O error"),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
