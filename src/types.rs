//! Domain types for hangman.
//!
//! Plain data shared by the game core, the report formatter and the TUI.

use serde::Serialize;
use std::path::PathBuf;

/// Incorrect guesses allowed before the game is lost.
pub const MAX_INCORRECT: u8 = 6;

/// Phrase used when none is given on the command line.
pub const DEFAULT_PHRASE: &str = "STA OPEN VOOR HET ONVERWACHTE";

/// Letters offered by the on-screen keyboard, in display order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

// ============================================================================
// PRIMITIVES
// ============================================================================

/// The phrase being guessed. Immutable once constructed.
///
/// Always contains at least one non-space character, so a fresh game
/// can never start out already won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase(String);

impl Phrase {
    /// Validate and wrap a phrase, keeping its characters exactly as given.
    pub fn new(text: impl Into<String>) -> Result<Self, PhraseError> {
        let text = text.into();
        if text.chars().all(|c| c == ' ') {
            return Err(PhraseError::Empty);
        }
        Ok(Phrase(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a constructed phrase; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// The characters a player has to find: everything except spaces.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(|&c| c != ' ')
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// Where a game stands. Derived from the game's fields, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// What a single guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Repeated letter, or the game was already over. Nothing changed.
    Ignored,
    /// The letter occurs in the phrase.
    Correct,
    /// The letter does not occur in the phrase; one more stage drawn.
    Incorrect,
}

/// Which drawing the presentation layer should show.
///
/// `Stage(0..=5)` are the incorrect-guess stages, `Stage(6)` is the loss
/// drawing and `Won` is the separate win drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Illustration {
    Stage(u8),
    Won,
}

impl Illustration {
    /// Index of the matching asset, 0 through 7.
    pub fn asset_index(self) -> usize {
        match self {
            Illustration::Stage(n) => usize::from(n.min(MAX_INCORRECT)),
            Illustration::Won => usize::from(MAX_INCORRECT) + 1,
        }
    }
}

/// Map a typed character onto the keyboard's letters.
///
/// Every input path (TUI keys, headless guesses) goes through here so a
/// typed `c` and a pressed `C` are the same guess.
pub fn normalize_letter(c: char) -> char {
    c.to_ascii_uppercase()
}

// ============================================================================
// ERRORS
// ============================================================================

/// Reasons a phrase cannot be used for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    /// Nothing to guess: the phrase is empty or only spaces.
    Empty,
    /// The keyboard cannot produce this character, so the game is unwinnable.
    Unguessable(char),
}

impl std::fmt::Display for PhraseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhraseError::Empty => write!(f, "Phrase must contain at least one letter"),
            PhraseError::Unguessable(c) => {
                write!(f, "Phrase contains {:?}, which cannot be guessed (use A-Z and spaces)", c)
            }
        }
    }
}

impl std::error::Error for PhraseError {}

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Serializable snapshot of a game, used by the headless report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Masked phrase as the player sees it.
    pub display: String,
    pub status: GameStatus,
    pub incorrect_guesses: u8,
    pub remaining_attempts: u8,
    /// Every letter guessed so far, sorted.
    pub guessed: Vec<char>,
    /// Guessed letters that are not in the phrase, sorted.
    pub wrong: Vec<char>,
    pub illustration: Illustration,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the headless report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text with the ASCII drawing.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Settings shared by every way of starting a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Phrase text as supplied, before normalization.
    pub phrase: String,
    /// Write tracing output to this file. None = no logging.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            phrase: DEFAULT_PHRASE.to_string(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Upper-case and validate the configured phrase.
    ///
    /// Besides the emptiness check done by [`Phrase::new`], rejects any
    /// character the on-screen keyboard cannot type.
    pub fn phrase(&self) -> Result<Phrase, PhraseError> {
        let phrase = Phrase::new(self.phrase.to_uppercase())?;
        if let Some(bad) = phrase.letters().find(|c| !ALPHABET.contains(c)) {
            return Err(PhraseError::Unguessable(bad));
        }
        Ok(phrase)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_rejects_empty_and_blank() {
        assert_eq!(Phrase::new(""), Err(PhraseError::Empty));
        assert_eq!(Phrase::new("   "), Err(PhraseError::Empty));
    }

    #[test]
    fn phrase_keeps_case_and_spaces() {
        let phrase = Phrase::new("Hi There").unwrap();
        assert_eq!(phrase.as_str(), "Hi There");
        assert_eq!(phrase.len(), 8);
        assert_eq!(phrase.letters().collect::<String>(), "HiThere");
    }

    #[test]
    fn phrase_length_counts_chars_not_bytes() {
        let phrase = Phrase::new("ÉTÉ").unwrap();
        assert_eq!(phrase.len(), 3);
    }

    #[test]
    fn asset_indices_cover_zero_to_seven() {
        let indices: Vec<usize> = (0..=MAX_INCORRECT)
            .map(Illustration::Stage)
            .chain(std::iter::once(Illustration::Won))
            .map(Illustration::asset_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn stage_beyond_limit_clamps_to_loss_drawing() {
        assert_eq!(Illustration::Stage(9).asset_index(), 6);
    }

    #[test]
    fn config_uppercases_phrase() {
        let config = GameConfig {
            phrase: "cat nap".into(),
            ..Default::default()
        };
        assert_eq!(config.phrase().unwrap().as_str(), "CAT NAP");
    }

    #[test]
    fn config_accepts_mixed_case() {
        let config = GameConfig {
            phrase: "Sta Open".into(),
            log_file: None,
        };
        assert_eq!(config.phrase().unwrap().as_str(), "STA OPEN");
    }

    #[test]
    fn normalized_letters_are_on_the_keyboard() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(ALPHABET.contains(&normalize_letter(c)), "{:?}", c);
        }
    }

    #[test]
    fn config_rejects_punctuation() {
        let config = GameConfig {
            phrase: "HELLO!".into(),
            ..Default::default()
        };
        assert_eq!(config.phrase(), Err(PhraseError::Unguessable('!')));
    }

    #[test]
    fn default_config_phrase_is_valid() {
        let phrase = GameConfig::default().phrase().unwrap();
        assert_eq!(phrase.as_str(), DEFAULT_PHRASE);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&GameStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
