//! Key bindings: input events to application commands.
//!
//! Lives outside the core so the domain never depends on an input device.

use crate::app::commands::AppCommand;
use crate::events::{InputEvent, Key};

/// Map one input event to a command.
///
/// `running` gates the lap key: laps are only dispatched while the
/// stopwatch runs.  `Quit` and unbound keys map to `None`.
pub fn command_for(event: InputEvent, running: bool) -> Option<AppCommand> {
    match event {
        InputEvent::Key(Key::Space) => Some(AppCommand::ToggleStopwatch),
        InputEvent::Key(Key::Char(c)) => match c.to_ascii_lowercase() {
            'r' => Some(AppCommand::ResetStopwatch),
            'l' if running => Some(AppCommand::RecordLap),
            's' => Some(AppCommand::ToggleSound),
            'f' => Some(AppCommand::ToggleClockFormat),
            't' => Some(AppCommand::CycleTheme),
            'd' => Some(AppCommand::ToggleDarkMode),
            _ => None,
        },
        InputEvent::DeleteLap(index) => Some(AppCommand::DeleteLap(index)),
        InputEvent::Quit => None,
    }
}
