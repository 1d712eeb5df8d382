//! TUI state algebra: pure types, zero effects.
//!
//! The game itself lives in [`crate::game::Game`]; this module only adds
//! what the screen needs on top of it (where the keyboard cursor is,
//! whether to quit) and the vocabulary the pure update function speaks.
//!
//! The presentation never touches game fields. It describes the change
//! it wants as an [`Effect`] and the run loop applies it through
//! `guess_letter` / `reset`.

use crate::game::Game;
use crate::types::ALPHABET;

/// Letters per row of the on-screen keyboard.
pub const ROW_LEN: usize = 13;

/// Cursor position of the Replay button, right after the last letter.
pub const REPLAY_INDEX: usize = ALPHABET.len();

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The game being played. Mutated only by the effects layer.
    pub game: Game,

    /// Keyboard focus.
    pub board: Board,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        App {
            game,
            board: Board::default(),
            should_quit: false,
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// The on-screen keyboard: two rows of letters and a Replay button.
///
/// `cursor` indexes [`ALPHABET`], with [`REPLAY_INDEX`] meaning the
/// Replay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    pub cursor: usize,
}

/// What the cursor is resting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Letter(char),
    Replay,
}

impl Board {
    pub fn at(cursor: usize) -> Self {
        Board {
            cursor: cursor.min(REPLAY_INDEX),
        }
    }

    pub fn focus(&self) -> Focus {
        match ALPHABET.get(self.cursor) {
            Some(&c) => Focus::Letter(c),
            None => Focus::Replay,
        }
    }

    /// Row of the cursor: 0 and 1 are letter rows, 2 is the Replay row.
    pub fn row(&self) -> usize {
        self.cursor / ROW_LEN
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Activate whatever the cursor is on.
    Press,
    /// Guess a letter directly (typed on the physical keyboard).
    Guess(char),
    /// Start a new round (shortcut for pressing the Replay button).
    Replay,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep going with this board (possibly unchanged).
    Board(Board),
    /// Quit the application.
    Quit,
    /// Apply a change to the game, then keep going with this board.
    Effect(Effect, Board),
}

/// Game mutation requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Guess(char),
    Replay,
}

// ============================================================================
// TESTS
// ============================================================================
