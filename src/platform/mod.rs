//! Platform abstraction layer
//!
//! Feeds the event queue for the terminal binary:
//! - Key events read from stdin
//! - Periodic redraw ticks

pub mod input;

pub use input::{events_for_line, key_for_char, spawn_stdin_reader, spawn_ticker};
