//! Input event queue.
//!
//! Events are produced by the terminal reader thread (one key line at a
//! time) and consumed by the main loop, which maps them to commands.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ stdin reader│────▶│  Input Queue │────▶│  Main Loop   │
//! │ (thread)    │     │  (lock-free) │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::spsc::{Consumer, Producer, Queue};
use log::warn;

/// Queue storage size.  One slot is kept free, so at most
/// `EVENT_QUEUE_CAP - 1` events can be pending.
pub const EVENT_QUEUE_CAP: usize = 32;

/// A key as delivered by the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    /// Printable key, lowercased.
    Char(char),
}

/// Events flowing from the input device to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Pointer-style request to delete the lap at this 0-based position.
    DeleteLap(usize),
    /// The input device closed or the user asked to quit.
    Quit,
}

pub type InputQueue = Queue<InputEvent, EVENT_QUEUE_CAP>;
pub type InputProducer<'q> = Producer<'q, InputEvent, EVENT_QUEUE_CAP>;
pub type InputConsumer<'q> = Consumer<'q, InputEvent, EVENT_QUEUE_CAP>;

/// Push an event.  Returns `false` if the queue is full (event dropped).
pub fn push_event(producer: &mut InputProducer<'_>, event: InputEvent) -> bool {
    match producer.enqueue(event) {
        Ok(()) => true,
        Err(dropped) => {
            warn!("Input queue full, dropping {:?}", dropped);
            false
        }
    }
}

/// Drain all pending events into a callback, in FIFO order.
pub fn drain_events(consumer: &mut InputConsumer<'_>, mut handler: impl FnMut(InputEvent)) {
    while let Some(event) = consumer.dequeue() {
        handler(event);
    }
}
