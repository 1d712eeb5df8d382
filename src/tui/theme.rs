//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Red: the phrase, and letters guessed wrong
//! - Gold on red: unused letter keys
//! - Green: letters found, and the win message
//! - Dim: disabled buttons, help text

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// The phrase being revealed.
pub const STYLE_PHRASE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Win message / correct letters.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Loss message / wrong letters.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// The gallows drawing.
pub const STYLE_GALLOWS: Style = Style::new().fg(Color::White);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Letter key not yet pressed.
pub const STYLE_KEY: Style = Style::new()
    .fg(Color::Yellow)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

/// Letter key pressed, letter is in the phrase.
pub const STYLE_KEY_CORRECT: Style = Style::new().fg(Color::Black).bg(Color::Green);

/// Letter key pressed, letter is not in the phrase.
pub const STYLE_KEY_WRONG: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::CROSSED_OUT);

/// Replay button when it can be pressed.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

/// Replay button while the game is still running.
pub const STYLE_BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Keyboard focus, layered on top of the key's own style.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
