//! Pure state transitions: (Board, Action, &Game) → Transition.
//!
//! Fully testable without a terminal. The game is only read here, to
//! decide whether Replay is enabled; changes to it come back as effects.

use crate::game::Game;
use crate::types::ALPHABET;

use super::state::{Action, Board, Effect, Focus, REPLAY_INDEX, ROW_LEN, Transition};

/// Pure state transition function.
pub fn update(board: Board, action: &Action, game: &Game) -> Transition {
    match action {
        Action::MoveLeft => Transition::Board(Board::at(board.cursor.saturating_sub(1))),
        Action::MoveRight => Transition::Board(Board::at(board.cursor + 1)),
        Action::MoveUp => Transition::Board(move_up(board)),
        Action::MoveDown => Transition::Board(move_down(board)),
        Action::Press => match board.focus() {
            Focus::Letter(c) => Transition::Effect(Effect::Guess(c), board),
            Focus::Replay => replay(board, game),
        },
        Action::Guess(c) => match ALPHABET.iter().position(|a| a == c) {
            Some(index) => Transition::Effect(Effect::Guess(*c), Board::at(index)),
            None => Transition::Board(board),
        },
        Action::Replay => replay(board, game),
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Replay is a no-op while the game is still running.
fn replay(board: Board, game: &Game) -> Transition {
    if game.replay_enabled() {
        Transition::Effect(Effect::Replay, Board::default())
    } else {
        Transition::Board(board)
    }
}

fn move_up(board: Board) -> Board {
    match board.row() {
        0 => board,
        1 => Board::at(board.cursor - ROW_LEN),
        _ => Board::at(ROW_LEN),
    }
}

fn move_down(board: Board) -> Board {
    match board.row() {
        0 => Board::at(board.cursor + ROW_LEN),
        _ => Board::at(REPLAY_INDEX),
    }
}

// ============================================================================
// TESTS
// ============================================================================
