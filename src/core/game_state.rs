//! Game engine: the move/rotate/drop/tick state machine.
//!
//! Drives one session from construction to game over. Every legality check
//! goes through `Board::can_place` on a candidate value, so a blocked attempt
//! leaves no trace. The session ends exactly when a promoted piece cannot be
//! placed at spawn; there is no un-ending, restart builds a new state.

use std::time::Duration;

use derive_more::{Display, Error};

use crate::core::board::Board;
use crate::core::pieces::{Tetromino, KICK_OFFSETS};
use crate::core::rng::PieceBag;
use crate::core::scoring;

/// The very first spawn on a fresh board failed. A fresh board is empty, so
/// this signals a broken configuration rather than a game event.
#[derive(Debug, Display, Error)]
#[display("unable to spawn the initial piece")]
pub struct SpawnError;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current: Tetromino,
    pub next: Tetromino,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    bag: PieceBag,
}

impl GameState {
    pub fn new(mut bag: PieceBag) -> Result<Self, SpawnError> {
        let board = Board::new();
        let current = bag.next_piece();
        if !board.can_place(current) {
            return Err(SpawnError);
        }
        let next = bag.next_piece();
        Ok(Self {
            board,
            current,
            next,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            bag,
        })
    }

    pub fn with_seed(seed: u64) -> Result<Self, SpawnError> {
        Self::new(PieceBag::new(seed))
    }

    /// Shift the current piece by (dx, dy) if the target cells are free.
    /// Returns false with no side effect when blocked.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.current.moved(dx, dy);
        if self.board.can_place(candidate) {
            self.current = candidate;
            return true;
        }
        false
    }

    /// Rotate the current piece by `delta` quarter turns, trying each
    /// wall-kick offset in order and committing the first legal candidate.
    /// Returns false with no side effect when every offset is blocked.
    pub fn try_rotate(&mut self, delta: i8) -> bool {
        let rotated = self.current.rotated(delta);
        for kick in KICK_OFFSETS {
            let candidate = rotated.moved(kick, 0);
            if self.board.can_place(candidate) {
                self.current = candidate;
                return true;
            }
        }
        false
    }

    /// Drop the current piece as far as it goes, lock it, and credit the
    /// distance bonus on top of whatever the lock scored. Returns the number
    /// of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        self.score += scoring::hard_drop_score(distance);
        distance
    }

    /// One gravity step: move down, or lock when resting. No-op returning
    /// false if the session is already over; otherwise reports whether the
    /// session is still live after the step.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        !self.game_over
    }

    /// Write the current piece into the board, clear lines, score with the
    /// level in effect before this lock, then advance the level and promote
    /// the next piece.
    fn lock_piece(&mut self) {
        self.board.lock(self.current);
        let cleared = self.board.clear_complete_lines().len();
        self.lines += cleared as u32;
        self.score += scoring::line_score(cleared, self.level);
        self.level = scoring::level_for_lines(self.lines);
        self.spawn_next_piece();
    }

    /// Promote next to current at the spawn origin and draw a fresh next.
    /// A blocked promotion ends the session: the flag flips, the previous
    /// current stays behind untouched, and nothing more is drawn.
    fn spawn_next_piece(&mut self) {
        let promoted = Tetromino::spawn(self.next.kind);
        if !self.board.can_place(promoted) {
            self.game_over = true;
            return;
        }
        self.current = promoted;
        self.next = self.bag.next_piece();
    }

    /// Lowest legal resting position of the current piece. Pure query for
    /// display, mutates nothing.
    pub fn ghost_piece(&self) -> Tetromino {
        let mut ghost = self.current;
        loop {
            let candidate = ghost.moved(0, 1);
            if !self.board.can_place(candidate) {
                return ghost;
            }
            ghost = candidate;
        }
    }

    /// Time between gravity ticks at the current level.
    pub fn drop_interval(&self) -> Duration {
        scoring::drop_interval(self.level)
    }
}
