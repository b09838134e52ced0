//! Function-pointer finite state machine engine.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  StateTable                                               │
//! │  ┌─────────┬───────────┬──────────┬───────────────────┐   │
//! │  │ StateId │ on_enter  │ on_exit  │ on_update         │   │
//! │  ├─────────┼───────────┼──────────┼───────────────────┤   │
//! │  │ Stopped │ -         │ -        │ -                 │   │
//! │  │ Running │ fn(ctx)   │ fn(ctx)  │ fn(ctx)           │   │
//! │  └─────────┴───────────┴──────────┴───────────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Each sample tick the engine calls `on_update` for the **current** state.
//! Transitions only come from user operations, through
//! [`Fsm::force_transition`]: `on_exit` for the current state, then
//! `on_enter` for the next.  All functions receive `&mut StopwatchContext`.

pub mod context;
pub mod states;

use context::StopwatchContext;
use log::debug;
use serde::Serialize;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all stopwatch states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum StateId {
    Stopped = 0,
    Running = 1,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 2;

    /// Convert a `u8` index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Stopped` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Stopped,
            1 => Self::Running,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Stopped
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for every handler.  `on_enter` and `on_exit` run once per
/// transition, `on_update` once per sample tick.
pub type StateActionFn = fn(&mut StopwatchContext);

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: Option<StateActionFn>,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]); the
/// [`StopwatchContext`] is owned by the caller and threaded through every
/// handler call.
pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Advance the FSM by one sample tick: run `on_update` for the current
    /// state, if it has one.
    pub fn tick(&mut self, ctx: &mut StopwatchContext) {
        if let Some(update) = self.table[self.current].on_update {
            update(ctx);
        }
    }

    /// Force an immediate transition.  A transition to the current state is
    /// a no-op: neither `on_exit` nor `on_enter` runs.
    pub fn force_transition(&mut self, next: StateId, ctx: &mut StopwatchContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut StopwatchContext) {
        let next_idx = next_id as usize;

        debug!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
