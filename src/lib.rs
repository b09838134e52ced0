//! Stopclock library.
//!
//! A digital clock with a 12/24-hour toggle and a stopwatch with laps,
//! audible feedback and persisted preferences.  The domain lives in
//! [`app`] and [`fsm`]; everything that touches the host sits behind the
//! port traits in [`app::ports`] and is implemented in [`adapters`] and
//! [`drivers`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod format;
pub mod fsm;
pub mod scheduler;
