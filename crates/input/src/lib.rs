//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ControlAction`]. The
//! simulation itself takes no input; keys only steer the main loop.

pub mod map;

pub use ascii_blast_types as types;

pub use map::{handle_key_event, should_quit};
