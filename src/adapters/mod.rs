//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                |
//! |----------------|--------------------|----------------------------|
//! | `memory_store` | PreferenceStore    | in-memory map              |
//! | `file_store`   | PreferenceStore    | JSON file on disk          |
//! | `time`         | TimePort           | `Instant` + local clock    |
//! | `cue`          | CuePort            | terminal bell / nothing    |
//! | `log_sink`     | EventSink          | `log` facade               |
//! | `platform`     | TimePort           | bundles time, scheduler    |
//! |                | SamplerPort        | and cue for the binary     |
//! |                | CuePort            |                            |
//! | `keymap`       | —                  | input events → commands    |

pub mod cue;
pub mod file_store;
pub mod keymap;
pub mod log_sink;
pub mod memory_store;
pub mod platform;
pub mod time;
