//! Classic terminal Tetris.
//!
//! `core` holds the pure game engine; `term` renders it into a framebuffer
//! flushed over crossterm; `input` maps keys to game actions. The binary in
//! `main.rs` wires them together under a timed loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
