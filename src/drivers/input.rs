//! Line-oriented terminal input driver.
//!
//! The terminal delivers whole lines, so each line carries one key:
//!
//! | Line          | Event                        |
//! |---------------|------------------------------|
//! | ` ` / `space` | `Key(Space)`                 |
//! | one character | `Key(Char(c))`, lowercased   |
//! | `x N`         | `DeleteLap(N - 1)`, `N >= 1` |
//! | `q` / `quit`  | `Quit`                       |
//!
//! Anything else is ignored.  The reader runs on its own thread and
//! pushes into the input queue; it exits after `Quit` or at end of input.

use std::io::BufRead;

use log::{debug, info, warn};

use crate::events::{InputEvent, InputProducer, Key, push_event};

/// Classify one input line.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.is_empty() && line.trim().is_empty() {
        return Some(InputEvent::Key(Key::Space));
    }

    let line = line.trim();
    let lower = line.to_ascii_lowercase();
    match lower.as_str() {
        "" => None,
        "space" => Some(InputEvent::Key(Key::Space)),
        "q" | "quit" => Some(InputEvent::Quit),
        _ => {
            if let Some(arg) = lower.strip_prefix('x') {
                return arg
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .map(|n| InputEvent::DeleteLap(n - 1));
            }
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(InputEvent::Key(Key::Char(c))),
                _ => None,
            }
        }
    }
}

/// Read lines until `Quit` or end of input, pushing parsed events.
///
/// Always ends by queueing `Quit` so the main loop shuts down with the
/// reader.
pub fn run_reader(reader: impl BufRead, producer: &mut InputProducer<'_>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Input: read failed: {}", e);
                break;
            }
        };
        match parse_line(&line) {
            Some(InputEvent::Quit) => break,
            Some(event) => {
                push_event(producer, event);
            }
            None => debug!("Input: ignored {:?}", line),
        }
    }
    info!("Input: reader finished");
    // The consumer keeps draining, so a full queue frees up shortly.
    while !push_event(producer, InputEvent::Quit) {
        std::thread::yield_now();
    }
}
