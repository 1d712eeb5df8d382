//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and is the only place the game is mutated.
//!
//! Single-threaded: the loop blocks on one terminal event, applies it to
//! completion, redraws, and only then reads the next event.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::game::Game;
use crate::types::{GuessOutcome, normalize_letter};

use super::state::{Action, App, Effect, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Every letter is a guess, so quitting uses Esc or Ctrl+C rather than `q`.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Replay),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Press),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Guess(normalize_letter(c))),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the game in the terminal until the player quits.
pub fn run(game: Game) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(game);
    info!(letters = app.game.phrase().len(), "tui started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    info!(status = %app.game.status(), "tui stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            // Windows reports releases too; only act on presses.
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue,
        };

        if let Some(action) = map_key(key) {
            apply(app, &action);
        }
    }
}

/// Feed one action through the pure update and interpret the result.
pub fn apply(app: &mut App, action: &Action) {
    match update(app.board, action, &app.game) {
        Transition::Board(board) => app.board = board,
        Transition::Quit => app.should_quit = true,
        Transition::Effect(effect, board) => {
            app.board = board;
            handle_effect(effect, app);
        }
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Apply a game mutation requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::Guess(letter) => {
            let outcome = app.game.guess_letter(letter);
            if outcome != GuessOutcome::Ignored {
                debug!(
                    %letter,
                    ?outcome,
                    display = %app.game.display(),
                    stage = app.game.visual_stage(),
                    "guess applied"
                );
            }
        }
        Effect::Replay => app.game.reset(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
