//! Board: the grid of locked cells.
//!
//! Stores only the visible 10x20 window as a flat array. The two-row spawn
//! overhang above it is virtual: any cell with y < 0 reads as empty and is
//! never written.

use arrayvec::ArrayVec;

use crate::core::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    #[inline]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// True iff 0 <= x < W and y < H. Occupancy has no lower bound on y:
    /// rows above the playfield are always passable.
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8
    }

    /// True for any cell above the board (y < 0, regardless of x), or any
    /// in-bounds cell that holds no locked piece.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return true;
        }
        match Self::index(x, y) {
            Some(i) => self.cells[i].is_none(),
            None => false,
        }
    }

    /// The sole collision predicate: every absolute cell of the piece must
    /// be empty. O(4) per call.
    pub fn can_place(&self, piece: Tetromino) -> bool {
        piece.cells().all(|(x, y)| self.is_empty(x, y))
    }

    /// Write the piece's type tag into each of its cells inside the visible
    /// window. Cells still above the board are dropped, never written.
    pub fn lock(&mut self, piece: Tetromino) {
        for (x, y) in piece.cells() {
            if let Some(i) = Self::index(x, y) {
                self.cells[i] = Some(piece.kind);
            }
        }
    }

    /// Remove every complete row, shifting the rows above it downward and
    /// refilling the top with empty rows. Returns the cleared row indices
    /// (bottom-up). Surviving rows keep their relative order.
    pub fn clear_complete_lines(&mut self) -> ArrayVec<usize, 4> {
        let w = BOARD_WIDTH as usize;
        let h = BOARD_HEIGHT as usize;

        let mut cleared = ArrayVec::new();
        let mut write = h;
        for read in (0..h).rev() {
            if self.is_row_full(read) {
                // One lock touches at most 4 rows, so this cannot overflow.
                cleared.push(read);
            } else {
                write -= 1;
                if write != read {
                    self.cells.copy_within(read * w..(read + 1) * w, write * w);
                }
            }
        }
        self.cells[..write * w].fill(None);
        cleared
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        let w = BOARD_WIDTH as usize;
        self.cells[row * w..(row + 1) * w]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Read one cell; None for empty or out of range.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|i| self.cells[i])
    }

    /// Write one cell directly; out-of-range writes are ignored.
    /// Gameplay goes through `lock`; this is for setup and tooling.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(i) = Self::index(x, y) {
            self.cells[i] = cell;
        }
    }

    #[cfg(test)]
    pub fn fill_row(&mut self, row: usize, kind: crate::types::PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, row as i8, Some(kind));
        }
    }
}
