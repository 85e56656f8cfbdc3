//! Core module - the game rules, state management, and logic.
//!
//! Everything here is synchronous, deterministic for a fixed seed, and free
//! of I/O. The terminal layer and the timing loop drive it from outside.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, SpawnError};
pub use pieces::{get_shape, PieceShape, Tetromino};
pub use rng::PieceBag;
