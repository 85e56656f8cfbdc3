use retris::core::GameState;
use retris::term::{FrameBuffer, GameView, Viewport};
use retris::types::PieceKind;

fn text_at(fb: &FrameBuffer, x: u16, y: u16, expected: &str) -> bool {
    expected
        .chars()
        .enumerate()
        .all(|(i, ch)| fb.get(x + i as u16, y).map(|cell| cell.ch) == Some(ch))
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::with_seed(1).unwrap();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&state, false, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_locked_cell_two_columns_wide() {
    let mut state = GameState::with_seed(1).unwrap();
    // A locked block at bottom-left, away from the falling piece's columns.
    state.board.set(0, 19, Some(PieceKind::I));

    let view = GameView::new(2, 1);
    let fb = view.render(&state, false, Viewport::new(22, 22));

    // Board cell (0, 19) maps to framebuffer (1..=2, 20).
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
}

#[test]
fn term_view_renders_side_panel_labels() {
    let state = GameState::with_seed(1).unwrap();
    let view = GameView::default();

    // 80x24 centers the 22x22 frame at x=29, y=1; the panel starts at x=53.
    let fb = view.render(&state, false, Viewport::new(80, 24));

    assert!(text_at(&fb, 53, 1, "SCORE"));
    assert!(text_at(&fb, 53, 4, "LEVEL"));
    assert!(text_at(&fb, 53, 7, "LINES"));
    assert!(text_at(&fb, 53, 10, "NEXT"));

    // A fresh session shows score 0, right-aligned in seven columns.
    assert!(text_at(&fb, 53, 2, "      0"));
}

#[test]
fn term_view_game_over_hides_pieces_and_shows_banner() {
    let mut state = GameState::with_seed(1).unwrap();
    state.game_over = true;

    let view = GameView::default();
    let fb = view.render(&state, false, Viewport::new(80, 24));

    assert!(text_at(&fb, 29, 12, "GAME OVER"));

    // Board is empty and neither ghost nor falling piece is drawn.
    for y in 2..22 {
        for x in 30..50 {
            let ch = fb.get(x, y).unwrap().ch;
            assert_ne!(ch, '█', "unexpected block at ({}, {})", x, y);
            assert_ne!(ch, '░', "unexpected ghost at ({}, {})", x, y);
        }
    }
}

#[test]
fn term_view_paused_overlay() {
    let state = GameState::with_seed(1).unwrap();
    let view = GameView::default();

    let fb = view.render(&state, true, Viewport::new(80, 24));

    assert!(text_at(&fb, 30, 12, "PAUSED"));
}
