//! Board tests - occupancy, locking, and line clears

use retris::core::{Board, Tetromino};
use retris::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), None, "cell ({}, {}) should start empty", x, y);
            assert!(board.is_empty(x, y));
        }
    }
}

#[test]
fn test_in_bounds_has_no_ceiling() {
    assert!(Board::in_bounds(0, 0));
    assert!(Board::in_bounds(9, 19));
    // The spawn headroom rows count as inside.
    assert!(Board::in_bounds(4, -2));

    assert!(!Board::in_bounds(-1, 5));
    assert!(!Board::in_bounds(10, 5));
    assert!(!Board::in_bounds(4, 20));
}

#[test]
fn test_rows_above_top_count_as_empty() {
    let board = Board::new();

    // Pieces spawn partially above the visible window, so any negative y
    // must pass the occupancy check no matter how wild x is.
    assert!(board.is_empty(0, -1));
    assert!(board.is_empty(-5, -1));
    assert!(board.is_empty(12, -2));
}

#[test]
fn test_walls_and_floor_are_occupied() {
    let board = Board::new();

    assert!(!board.is_empty(-1, 0));
    assert!(!board.is_empty(BOARD_WIDTH as i8, 0));
    assert!(!board.is_empty(4, BOARD_HEIGHT as i8));
}

#[test]
fn test_set_and_get_round_trip() {
    let mut board = Board::new();

    board.set(5, 10, Some(PieceKind::T));
    assert_eq!(board.get(5, 10), Some(PieceKind::T));
    assert!(!board.is_empty(5, 10));

    board.set(5, 10, None);
    assert_eq!(board.get(5, 10), None);

    // Out-of-range writes are dropped silently.
    board.set(-1, 0, Some(PieceKind::Z));
    board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::Z));
    assert_eq!(board.get(-1, 0), None);
}

#[test]
fn test_can_place_every_spawn_on_empty_board() {
    let board = Board::new();

    for kind in PieceKind::ALL {
        assert!(
            board.can_place(Tetromino::spawn(kind)),
            "{:?} should fit at spawn",
            kind
        );
    }
}

#[test]
fn test_can_place_rejects_wall_overlap() {
    let board = Board::new();

    // I piece standing in the rightmost column, pushed one step too far.
    let piece = Tetromino {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 7,
        y: 5,
    };
    assert!(board.can_place(piece));
    assert!(!board.can_place(piece.moved(1, 0)));
}

#[test]
fn test_can_place_rejects_occupied_cell() {
    let mut board = Board::new();
    let piece = Tetromino {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x: 3,
        y: 10,
    };

    assert!(board.can_place(piece));

    // O at (3, 10) covers (4..=5, 10..=11); block one of those cells.
    board.set(4, 11, Some(PieceKind::J));
    assert!(!board.can_place(piece));
}

#[test]
fn test_lock_writes_only_visible_cells() {
    let mut board = Board::new();

    // T at spawn straddles the top edge: three cells at y = -1, one at y = 0.
    let piece = Tetromino::spawn(PieceKind::T);
    board.lock(piece);

    let occupied: usize = (0..BOARD_HEIGHT as i8)
        .flat_map(|y| (0..BOARD_WIDTH as i8).map(move |x| (x, y)))
        .filter(|&(x, y)| board.get(x, y).is_some())
        .count();

    assert_eq!(occupied, 1);
    assert_eq!(board.get(5, 0), Some(PieceKind::T));
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::new();
    fill_row(&mut board, 19);

    let cleared = board.clear_complete_lines();

    assert_eq!(cleared.as_slice(), &[19]);
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 19), None);
    }
}

#[test]
fn test_clear_shifts_survivors_down_in_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(0, 18, Some(PieceKind::T));
    board.set(1, 17, Some(PieceKind::S));

    let cleared = board.clear_complete_lines();
    assert_eq!(cleared.as_slice(), &[19]);

    // Both survivors dropped exactly one row, keeping their stacking order.
    assert_eq!(board.get(0, 19), Some(PieceKind::T));
    assert_eq!(board.get(1, 18), Some(PieceKind::S));
    assert_eq!(board.get(0, 18), None);
    assert_eq!(board.get(1, 17), None);
}

#[test]
fn test_clear_separated_lines() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 17);
    board.set(3, 18, Some(PieceKind::L));

    let cleared = board.clear_complete_lines();

    // Bottom-up report order.
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // The lone survivor between them falls to the floor.
    assert_eq!(board.get(3, 19), Some(PieceKind::L));
    for y in 0..19 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), None, "({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_clear_four_lines_at_once() {
    let mut board = Board::new();
    for y in 16..=19 {
        fill_row(&mut board, y);
    }

    let cleared = board.clear_complete_lines();

    assert_eq!(cleared.len(), 4);
    assert_eq!(cleared.as_slice(), &[19, 18, 17, 16]);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), None);
        }
    }
}

#[test]
fn test_incomplete_row_is_not_cleared() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(0, 19, None);

    assert!(!board.is_row_full(19));
    assert!(board.clear_complete_lines().is_empty());
    assert_eq!(board.get(9, 19), Some(PieceKind::I));
}
