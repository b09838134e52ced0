//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules for the clock and stopwatch:
//! elapsed-time tracking, laps, preference restore/save and command
//! dispatch.  All interaction with the host happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without a terminal, a file system or a real clock.

pub mod appearance;
pub mod clock;
pub mod codec;
pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod stopwatch;
