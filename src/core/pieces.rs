//! Shape catalog and the falling piece value type.
//!
//! The four rotation states of every piece are derived at compile time from
//! one 4x4 textual template per kind by successive 90-degree clockwise
//! rotation. Consumers read shared static tables; nothing here mutates after
//! build.

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// One rotation state: the four occupied cells as (dx, dy) offsets from the
/// piece origin.
pub type PieceShape = [(i8, i8); 4];

const GRID: usize = 4;

type Template = [[u8; GRID]; GRID];

const fn template(rows: [&[u8; GRID]; GRID]) -> Template {
    [*rows[0], *rows[1], *rows[2], *rows[3]]
}

/// Clockwise quarter turn of a 4x4 occupancy grid:
/// cell (col, row) moves to (GRID - 1 - row, col).
const fn rotate_grid_cw(grid: Template) -> Template {
    let mut out = [[b'.'; GRID]; GRID];
    let mut y = 0;
    while y < GRID {
        let mut x = 0;
        while x < GRID {
            out[y][x] = grid[GRID - 1 - x][y];
            x += 1;
        }
        y += 1;
    }
    out
}

const fn extract_offsets(grid: Template) -> PieceShape {
    let mut cells = [(0i8, 0i8); 4];
    let mut found = 0;
    let mut y = 0;
    while y < GRID {
        let mut x = 0;
        while x < GRID {
            if grid[y][x] == b'#' {
                // Out-of-range `found` fails const evaluation, so a template
                // with more than four marks cannot compile.
                cells[found] = (x as i8, y as i8);
                found += 1;
            }
            x += 1;
        }
        y += 1;
    }
    cells
}

const fn rotation_cycle(base: Template) -> [PieceShape; 4] {
    let east = rotate_grid_cw(base);
    let south = rotate_grid_cw(east);
    let west = rotate_grid_cw(south);
    [
        extract_offsets(base),
        extract_offsets(east),
        extract_offsets(south),
        extract_offsets(west),
    ]
}

/// Rotation cycles for all seven kinds, indexed by `PieceKind::index()` then
/// `Rotation::index()`.
static SHAPES: [[PieceShape; 4]; 7] = [
    rotation_cycle(template([b"....", b"####", b"....", b"...."])), // I
    rotation_cycle(template([b".##.", b".##.", b"....", b"...."])), // O
    rotation_cycle(template([b"....", b".###", b"..#.", b"...."])), // T
    rotation_cycle(template([b"....", b"..##", b".##.", b"...."])), // S
    rotation_cycle(template([b"....", b".##.", b"..##", b"...."])), // Z
    rotation_cycle(template([b"....", b"###.", b"#...", b"...."])), // J
    rotation_cycle(template([b"....", b"###.", b"..#.", b"...."])), // L
];

/// Horizontal wall-kick offsets tried in order when a rotation's primary
/// position is blocked. Uniform across piece types, no vertical component.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Get the occupied-cell offsets for a piece kind in a given rotation.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// A falling piece: kind, rotation index, and integer origin.
///
/// Immutable value type. `moved` and `rotated` return new candidates, so the
/// engine can test a transformation against the board and discard it without
/// rollback. Geometry lives in the static catalog, never per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A fresh piece at the canonical spawn origin, spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Same piece shifted by (dx, dy). Legality is the caller's concern.
    pub fn moved(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same piece with the rotation advanced by `delta` quarter turns
    /// (mod 4); the origin is unchanged until a kick applies.
    pub fn rotated(self, delta: i8) -> Self {
        Self {
            rotation: self.rotation.stepped(delta),
            ..self
        }
    }

    pub fn shape(self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute occupied cells: origin plus each offset of the active state.
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}
