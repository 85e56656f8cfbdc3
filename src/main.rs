//! Terminal Tetris runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The game core stays pure and is driven
//! entirely from this loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use retris::core::{GameState, PieceBag};
use retris::input::{map_key, should_quit};
use retris::term::{GameView, TerminalRenderer, Viewport};
use retris::types::{GameAction, INPUT_POLL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new(PieceBag::from_entropy())?;
    let view = GameView::default();

    let mut last_drop = Instant::now();
    let mut paused = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&state, paused, Viewport::new(w, h));
        term.draw_swap(&mut fb)?;

        // Input, with a timeout that never overshoots the next gravity step.
        let timeout = if paused || state.game_over {
            Duration::from_millis(INPUT_POLL_MS)
        } else {
            state
                .drop_interval()
                .checked_sub(last_drop.elapsed())
                .unwrap_or(Duration::ZERO)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = map_key(key) {
                        match action {
                            GameAction::Pause if !state.game_over => {
                                paused = !paused;
                                if !paused {
                                    // Resuming must not owe a whole backlog
                                    // of gravity steps.
                                    last_drop = Instant::now();
                                }
                            }
                            GameAction::Restart if state.game_over => {
                                state = GameState::new(PieceBag::from_entropy())?;
                                paused = false;
                                last_drop = Instant::now();
                            }
                            _ if paused || state.game_over => {}
                            GameAction::MoveLeft => {
                                state.try_move(-1, 0);
                            }
                            GameAction::MoveRight => {
                                state.try_move(1, 0);
                            }
                            GameAction::SoftDrop => {
                                if state.try_move(0, 1) {
                                    last_drop = Instant::now();
                                }
                            }
                            GameAction::HardDrop => {
                                state.hard_drop();
                                last_drop = Instant::now();
                            }
                            GameAction::RotateCw => {
                                state.try_rotate(1);
                            }
                            GameAction::RotateCcw => {
                                state.try_rotate(-1);
                            }
                            GameAction::Pause | GameAction::Restart => {}
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if !paused && !state.game_over && last_drop.elapsed() >= state.drop_interval() {
            state.tick();
            last_drop = Instant::now();
        }
    }
}
