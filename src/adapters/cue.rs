//! Audible cue adapters.
//!
//! | Adapter     | Output                         |
//! |-------------|--------------------------------|
//! | `BellCue`   | terminal bell on stderr        |
//! | `SilentCue` | none (always `Unavailable`)    |

use log::debug;

use crate::app::ports::{CueError, CuePort};
use crate::config::Tone;
use crate::drivers::bell;

/// Plays cues as a terminal bell.
#[derive(Debug, Default)]
pub struct BellCue {
    played: u64,
}

impl BellCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl CuePort for BellCue {
    fn play_cue(&mut self, tone: &Tone) -> Result<(), CueError> {
        bell::ring_stderr(tone).map_err(|e| {
            debug!("BellCue: {}", e);
            CueError::IoError
        })?;
        self.played += 1;
        Ok(())
    }
}

/// For hosts with no audio output.
#[derive(Debug, Default)]
pub struct SilentCue;

impl CuePort for SilentCue {
    fn play_cue(&mut self, _tone: &Tone) -> Result<(), CueError> {
        Err(CueError::Unavailable)
    }
}
