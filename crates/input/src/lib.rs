//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s, one
//! discrete event at a time, and recognizes the quit keys.

pub mod map;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
