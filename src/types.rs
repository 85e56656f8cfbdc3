//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (visible playfield)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Canonical spawn origin: horizontally centered, two rows of headroom
/// above the visible board.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = -2;

/// Input poll granularity for the terminal loop (milliseconds)
pub const INPUT_POLL_MS: u64 = 20;

/// Gravity intervals by level, index = level - 1 (milliseconds).
/// Strictly decreasing from slowest (level 1) to fastest (level 10).
pub const DROP_INTERVALS_MS: [u64; 10] = [800, 720, 630, 550, 470, 380, 300, 220, 130, 100];

/// Level curve: one level per this many cleared lines, capped at `MAX_LEVEL`.
pub const LINES_PER_LEVEL: u32 = 10;
pub const MAX_LEVEL: u32 = 10;

/// Line clear scoring (classic rules), index = lines cleared in one lock.
/// Actual points are `LINE_SCORES[n] * level`.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Hard drop bonus per row fallen, independent of line scores.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order. One full bag.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Advance by `delta` quarter turns, mod 4. Negative deltas step
    /// counter-clockwise.
    pub fn stepped(self, delta: i8) -> Self {
        let index = (self.index() as i8 + delta).rem_euclid(4);
        Self::from_index(index as usize)
    }

    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        self.stepped(1)
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        self.stepped(-1)
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
