//! Report formatting for headless games.
//!
//! Pure functions — (Game, OutputFormat) → String.
//! No I/O, no side effects.

use crate::gallows;
use crate::game::Game;
use crate::types::{GameStatus, OutputFormat};

/// Format the state of a game for output.
pub fn format_report(game: &Game, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(game),
        OutputFormat::Json => format_json(game),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(game: &Game) -> String {
    let summary = game.summary();
    let mut out = String::new();

    for row in gallows::frame(summary.illustration) {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&format!("Phrase: {}\n", spaced(&summary.display)));
    if !summary.wrong.is_empty() {
        let wrong: String = summary.wrong.iter().collect();
        out.push_str(&format!("Wrong:  {}\n", wrong));
    }
    out.push_str(&format!(
        "Misses: {}/{}\n",
        summary.incorrect_guesses,
        summary.incorrect_guesses + summary.remaining_attempts
    ));
    out.push('\n');

    match summary.status {
        GameStatus::Won => out.push_str(&format!("You won! {}\n", game.phrase())),
        GameStatus::Lost => out.push_str("Game Over!\n"),
        GameStatus::InProgress => out.push_str(&format!(
            "In progress, {} attempt{} left\n",
            summary.remaining_attempts,
            if summary.remaining_attempts == 1 { "" } else { "s" }
        )),
    }

    out
}

/// Put a space between characters so underscores stay distinguishable.
pub fn spaced(display: &str) -> String {
    let mut out = String::with_capacity(display.len() * 2);
    for (i, c) in display.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(game: &Game) -> String {
    serde_json::to_string_pretty(&game.summary()).unwrap_or_else(|e| {
        format!(r#"{{"error": "Failed to serialize game: {}"}}"#, e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
