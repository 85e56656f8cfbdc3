//! Seven-bag piece randomizer.
//!
//! Draws every kind exactly once per bag, reshuffling uniformly when the bag
//! empties. The generator is explicit and seedable so tests can replay exact
//! piece sequences; the binary seeds from OS entropy.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::pieces::Tetromino;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: Pcg32,
    bag: ArrayVec<PieceKind, 7>,
}

impl PieceBag {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            bag: ArrayVec::new(),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Draw the next kind, refilling and reshuffling the bag first if it has
    /// been drained.
    pub fn next_kind(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Draw the next piece, homed at the spawn origin in spawn orientation.
    pub fn next_piece(&mut self) -> Tetromino {
        Tetromino::spawn(self.next_kind())
    }

    fn refill(&mut self) {
        self.bag.extend(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
    }
}
