//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  All tests run on the host with no terminal,
//! audio device or real clock required.

mod clock_tests;
mod mock_host;
mod service_tests;
mod stopwatch_tests;
