//! Terminal bell driver.
//!
//! A terminal cannot synthesise a tone, so every cue becomes one BEL
//! byte.  The output handle is locked for the duration of one ring and
//! released when [`ring`] returns, whether the write succeeded or not.

use std::io::{self, Write};

use log::trace;

use crate::config::Tone;

const BEL: &[u8] = b"\x07";

/// Write one bell to `out` and flush it.
pub fn ring(out: &mut impl Write, tone: &Tone) -> io::Result<()> {
    trace!(
        "Bell: {:.0}Hz {}ms gain {:.2}->{:.2}",
        tone.frequency_hz, tone.duration_ms, tone.start_gain, tone.end_gain
    );
    out.write_all(BEL)?;
    out.flush()
}

/// Ring on the process's standard error.
pub fn ring_stderr(tone: &Tone) -> io::Result<()> {
    let mut handle = io::stderr().lock();
    ring(&mut handle, tone)
}
