//! Keyboard input mapping for the terminal frontend.

pub mod handler;

pub use handler::{map_key, should_quit};
