//! Unified error type for the stopclock crate.
//!
//! Every port error converts into [`Error`], keeping the binary's top-level
//! handling uniform.  All variants are `Copy`.  Domain operations themselves
//! never return these; they are for adapter construction and configuration.

use core::fmt;

use crate::app::ports::{ConfigError, CueError, StoreError};

/// Every fallible adapter or configuration operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The preference store could not be opened or written.
    Store(StoreError),
    /// The audible cue could not be produced.
    Cue(CueError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "store: {e}"),
            Self::Cue(e) => write!(f, "cue: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<CueError> for Error {
    fn from(e: CueError) -> Self {
        Self::Cue(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
