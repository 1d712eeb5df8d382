//! Pure rendering: map App state to ratatui widget trees.
//!
//! One screen, stacked top to bottom: title, gallows, phrase, status,
//! keyboard, help. Widget-building functions are pure (state in,
//! widgets out); the only effect is Frame::render_widget().

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::gallows::{self, FRAME_HEIGHT};
use crate::game::Game;
use crate::report::spaced;
use crate::types::{ALPHABET, GameStatus};

use super::state::{App, Board, Focus, ROW_LEN};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1),                   // title
        Constraint::Length(FRAME_HEIGHT as u16), // gallows
        Constraint::Length(1),
        Constraint::Length(1), // phrase
        Constraint::Length(1),
        Constraint::Length(2), // status + wrong letters
        Constraint::Length(1),
        Constraint::Length(4), // keyboard + replay
        Constraint::Min(0),
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(), chunks[0]);
    render_gallows(&app.game, frame, chunks[1]);
    render_phrase(&app.game, frame, chunks[3]);
    render_status(&app.game, frame, chunks[5]);
    render_keyboard(&app.game, app.board, frame, chunks[7]);
    frame.render_widget(render_help(&app.game), chunks[9]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("HANGMAN", theme::STYLE_TITLE))).centered()
}

/// Help line; the replay hint only appears once replay is possible.
fn render_help(game: &Game) -> Paragraph<'static> {
    let help_text = if game.replay_enabled() {
        "[^R] replay  [Enter] press  [Esc] quit"
    } else {
        "[a-z] guess  [arrows] move  [Enter] press  [Esc] quit"
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP)).centered()
}

// ============================================================================
// GAME AREA
// ============================================================================

fn render_gallows(game: &Game, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = gallows::frame(game.illustration())
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme::STYLE_GALLOWS)))
        .collect();
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

fn render_phrase(game: &Game, frame: &mut Frame, area: Rect) {
    let text = spaced(&game.display());
    frame.render_widget(
        Paragraph::new(Span::styled(text, theme::STYLE_PHRASE)).centered(),
        area,
    );
}

fn render_status(game: &Game, frame: &mut Frame, area: Rect) {
    let status = match game.status() {
        GameStatus::Won => Span::styled("You won!", theme::STYLE_SAFE),
        GameStatus::Lost => Span::styled("Game Over!", theme::STYLE_DANGER),
        GameStatus::InProgress => {
            let left = game.remaining_attempts();
            Span::styled(
                format!("{} attempt{} left", left, if left == 1 { "" } else { "s" }),
                theme::STYLE_DIM,
            )
        }
    };

    let wrong = game.wrong_letters();
    let wrong_line = if wrong.is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::styled("Wrong: ", theme::STYLE_DIM),
            Span::styled(wrong.into_iter().collect::<String>(), theme::STYLE_DANGER),
        ])
    };

    let paragraph = Paragraph::new(vec![Line::from(status), wrong_line]).centered();
    frame.render_widget(paragraph, area);
}

// ============================================================================
// KEYBOARD
// ============================================================================

fn render_keyboard(game: &Game, board: Board, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = ALPHABET
        .chunks(ROW_LEN)
        .enumerate()
        .map(|(row, letters)| {
            let mut spans = Vec::with_capacity(letters.len() * 2);
            for (col, &letter) in letters.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(" "));
                }
                let focused = board.cursor == row * ROW_LEN + col;
                spans.push(Span::styled(
                    format!(" {} ", letter),
                    with_cursor(key_style(game, letter), focused),
                ));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));

    let replay_style = if game.replay_enabled() {
        theme::STYLE_BUTTON
    } else {
        theme::STYLE_BUTTON_DISABLED
    };
    lines.push(Line::from(Span::styled(
        " Replay ",
        with_cursor(replay_style, board.focus() == Focus::Replay),
    )));

    frame.render_widget(Paragraph::new(lines).centered(), area);
}

/// Style of a letter key given what the game knows about that letter.
fn key_style(game: &Game, letter: char) -> Style {
    if !game.guessed().contains(&letter) {
        theme::STYLE_KEY
    } else if game.phrase().contains(letter) {
        theme::STYLE_KEY_CORRECT
    } else {
        theme::STYLE_KEY_WRONG
    }
}

fn with_cursor(style: Style, focused: bool) -> Style {
    if focused {
        style.patch(theme::STYLE_CURSOR)
    } else {
        style
    }
}

// ============================================================================
// TESTS
// ============================================================================
