//! State handler implementations for the stopwatch.
//!
//! Each state has up to three handlers:
//! - `on_enter`:  runs once when entering the state
//! - `on_exit`:   runs once when leaving the state
//! - `on_update`: runs on every sample tick
//!
//! Handlers only touch [`StopwatchContext`]; the engine turns the sampler
//! command they leave behind into [`SamplerPort`](crate::app::ports::SamplerPort)
//! calls.

use super::context::{SamplerCommand, StopwatchContext};
use super::{StateDescriptor, StateId};

/// Build the state table.  Index `i` must describe `StateId::from_index(i)`.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        StateDescriptor {
            id: StateId::Stopped,
            name: "STOPPED",
            on_enter: None,
            on_exit: None,
            on_update: None,
        },
        StateDescriptor {
            id: StateId::Running,
            name: "RUNNING",
            on_enter: Some(running_enter),
            on_exit: Some(running_exit),
            on_update: Some(running_update),
        },
    ]
}

// ---------------------------------------------------------------------------
// RUNNING
// ---------------------------------------------------------------------------

/// Bank the frozen elapsed value and restart the reference, so no paused
/// interval and no earlier run is ever counted twice.
fn running_enter(ctx: &mut StopwatchContext) {
    ctx.reference_ms = ctx.now_ms;
    ctx.banked_ms = ctx.elapsed_ms;
    ctx.sampler = SamplerCommand::Arm;
}

/// `elapsed_ms` keeps its last sampled value.
fn running_exit(ctx: &mut StopwatchContext) {
    ctx.sampler = SamplerCommand::Disarm;
}

/// Saturates rather than wrapping when a restored value sits near `u64::MAX`.
fn running_update(ctx: &mut StopwatchContext) {
    let sampled = ctx
        .banked_ms
        .saturating_add(ctx.now_ms.saturating_sub(ctx.reference_ms));
    ctx.elapsed_ms = ctx.elapsed_ms.max(sampled);
}
