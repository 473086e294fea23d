//! Topic-based event bus for runtime events.
//!
//! Battle events from the engine and the message lines derived from them are
//! published to separate topics so consumers subscribe only to what they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
