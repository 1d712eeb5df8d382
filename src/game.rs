//! The hangman state machine.
//!
//! A closed, total state machine: every operation succeeds, and input
//! that makes no sense (a repeated letter, a guess after the game ended)
//! is silently ignored. Status is derived from the phrase, the guessed
//! letters and the incorrect count; it is never stored on its own.
//!
//! ```text
//!   InProgress ──all letters found──▶ Won
//!       │
//!       └──sixth wrong letter──────▶ Lost
//!
//!   reset() returns to InProgress from any state.
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::types::{
    GameStatus, GameSummary, GuessOutcome, Illustration, MAX_INCORRECT, Phrase, normalize_letter,
};

/// One game of hangman over a fixed phrase.
#[derive(Debug, Clone)]
pub struct Game {
    phrase: Phrase,
    guessed: BTreeSet<char>,
    incorrect: u8,
}

impl Game {
    /// Start a fresh game: nothing guessed, no incorrect guesses.
    pub fn new(phrase: Phrase) -> Self {
        Game {
            phrase,
            guessed: BTreeSet::new(),
            incorrect: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn incorrect_count(&self) -> u8 {
        self.incorrect
    }

    pub fn remaining_attempts(&self) -> u8 {
        MAX_INCORRECT - self.incorrect
    }

    /// Guessed letters that are not in the phrase, in sorted order.
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !self.phrase.contains(c))
            .collect()
    }

    /// The phrase with every unguessed, non-space character masked as `_`.
    pub fn display(&self) -> String {
        self.phrase
            .as_str()
            .chars()
            .map(|c| if c == ' ' || self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        if self.phrase.letters().all(|c| self.guessed.contains(&c)) {
            GameStatus::Won
        } else if self.incorrect >= MAX_INCORRECT {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Numeric drawing stage, 0 through 6.
    ///
    /// Mirrors the incorrect count. Stage 6 is reached exactly when the
    /// game is lost, so the drawing and the loss condition never disagree.
    pub fn visual_stage(&self) -> u8 {
        self.incorrect.min(MAX_INCORRECT)
    }

    /// The drawing to show, with the win signalled apart from the stages.
    pub fn illustration(&self) -> Illustration {
        match self.status() {
            GameStatus::Won => Illustration::Won,
            _ => Illustration::Stage(self.visual_stage()),
        }
    }

    /// Replay is only offered once the game is over.
    pub fn replay_enabled(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            display: self.display(),
            status: self.status(),
            incorrect_guesses: self.incorrect,
            remaining_attempts: self.remaining_attempts(),
            guessed: self.guessed.iter().copied().collect(),
            wrong: self.wrong_letters(),
            illustration: self.illustration(),
        }
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Apply one guess.
    ///
    /// No-op when the letter was already guessed or the game is over.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.status() != GameStatus::InProgress || self.guessed.contains(&letter) {
            debug!(%letter, "guess ignored");
            return GuessOutcome::Ignored;
        }

        self.guessed.insert(letter);

        if self.phrase.contains(letter) {
            if self.status() == GameStatus::Won {
                info!(%letter, "phrase complete, game won");
            } else {
                debug!(%letter, "correct guess");
            }
            return GuessOutcome::Correct;
        }

        self.incorrect += 1;
        if self.status() == GameStatus::Lost {
            info!(%letter, incorrect = self.incorrect, "out of attempts, game lost");
        } else {
            debug!(%letter, incorrect = self.incorrect, "incorrect guess");
        }
        GuessOutcome::Incorrect
    }

    /// Apply typed input in order, the way the keyboard would.
    ///
    /// Whitespace is skipped and letters are upper-cased with
    /// [`normalize_letter`], so `"cat"` plays the same as `"CAT"`.
    pub fn guess_typed(&mut self, input: &str) {
        for c in input.chars().filter(|c| !c.is_whitespace()) {
            self.guess_letter(normalize_letter(c));
        }
    }

    /// Start over with the same phrase. Always succeeds.
    pub fn reset(&mut self) {
        self.guessed.clear();
        self.incorrect = 0;
        info!("game reset");
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn game(text: &str) -> Game {
        Game::new(Phrase::new(text).unwrap())
    }

    fn guess_all(game: &mut Game, letters: &str) {
        for c in letters.chars() {
            game.guess_letter(c);
        }
    }

    // -- Initial state --

    #[test]
    fn new_game_is_masked_and_in_progress() {
        let g = game("CAT");
        assert_eq!(g.display(), "___");
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.incorrect_count(), 0);
        assert!(g.guessed().is_empty());
        assert_eq!(g.visual_stage(), 0);
        assert!(!g.replay_enabled());
    }

    #[test]
    fn spaces_are_never_masked() {
        let g = game("STA OPEN");
        assert_eq!(g.display(), "___ ____");
    }

    // -- Winning --

    #[test]
    fn cat_revealed_letter_by_letter() {
        let mut g = game("CAT");

        assert_eq!(g.guess_letter('C'), GuessOutcome::Correct);
        assert_eq!(g.display(), "C__");
        assert_eq!(g.status(), GameStatus::InProgress);

        g.guess_letter('A');
        assert_eq!(g.display(), "CA_");

        g.guess_letter('T');
        assert_eq!(g.display(), "CAT");
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.illustration(), Illustration::Won);
        assert!(g.replay_enabled());
    }

    #[test]
    fn guessing_every_distinct_letter_wins_and_reveals_phrase() {
        let mut g = game("STA OPEN VOOR HET ONVERWACHTE");
        guess_all(&mut g, "STAOPENVRHWC");
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.display(), "STA OPEN VOOR HET ONVERWACHTE");
        assert_eq!(g.incorrect_count(), 0);
    }

    #[test]
    fn win_after_some_misses_keeps_stage() {
        let mut g = game("CAT");
        guess_all(&mut g, "XYCAT");
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.visual_stage(), 2);
        assert_eq!(g.illustration().asset_index(), 7);
    }

    #[test]
    fn case_is_compared_as_stored() {
        let mut g = game("Cat");
        assert_eq!(g.guess_letter('c'), GuessOutcome::Incorrect);
        assert_eq!(g.guess_letter('C'), GuessOutcome::Correct);
        assert_eq!(g.display(), "C__");
    }

    // -- Losing --

    #[test]
    fn six_wrong_guesses_lose() {
        let mut g = game("CAT");
        for (i, c) in "QWERY".chars().enumerate() {
            assert_eq!(g.guess_letter(c), GuessOutcome::Incorrect);
            assert_eq!(g.status(), GameStatus::InProgress);
            assert_eq!(g.visual_stage() as usize, i + 1);
        }
        assert_eq!(g.guess_letter('U'), GuessOutcome::Incorrect);
        assert_eq!(g.status(), GameStatus::Lost);
        assert_eq!(g.display(), "___");
        assert_eq!(g.visual_stage(), 6);
        assert_eq!(g.illustration(), Illustration::Stage(6));
        assert_eq!(g.remaining_attempts(), 0);
        assert!(g.replay_enabled());
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let mut g = game("CAT");
        guess_all(&mut g, "QWERYU");
        assert_eq!(g.guess_letter('C'), GuessOutcome::Ignored);
        assert_eq!(g.guess_letter('Z'), GuessOutcome::Ignored);
        assert_eq!(g.display(), "___");
        assert_eq!(g.incorrect_count(), 6);
        assert_eq!(g.guessed().len(), 6);
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let mut g = game("CAT");
        guess_all(&mut g, "CAT");
        assert_eq!(g.guess_letter('Z'), GuessOutcome::Ignored);
        assert_eq!(g.incorrect_count(), 0);
        assert_eq!(g.status(), GameStatus::Won);
    }

    // -- Repeats --

    #[test]
    fn repeated_guess_changes_nothing() {
        let mut g = game("CAT");
        g.guess_letter('Z');
        g.guess_letter('C');
        let before = (g.incorrect_count(), g.guessed().len());

        assert_eq!(g.guess_letter('Z'), GuessOutcome::Ignored);
        assert_eq!(g.guess_letter('C'), GuessOutcome::Ignored);
        assert_eq!((g.incorrect_count(), g.guessed().len()), before);
    }

    #[test]
    fn display_length_is_stable_over_any_sequence() {
        let mut g = game("HET ONVERWACHTE");
        let len = g.phrase().len();
        for c in "ZQHXETJONKVRWACB".chars() {
            g.guess_letter(c);
            assert_eq!(g.display().chars().count(), len);
        }
    }

    // -- Reset --

    #[test]
    fn reset_restores_initial_state() {
        let mut g = game("STA OPEN");
        guess_all(&mut g, "SQWZRYU");
        assert_eq!(g.status(), GameStatus::Lost);
        assert_eq!(g.incorrect_count(), 6);

        g.reset();
        assert_eq!(g.status(), GameStatus::InProgress);
        assert!(g.guessed().is_empty());
        assert_eq!(g.incorrect_count(), 0);
        assert_eq!(g.display(), "___ ____");
        assert_eq!(g.illustration(), Illustration::Stage(0));
    }

    #[test]
    fn reset_mid_game_and_play_again() {
        let mut g = game("CAT");
        guess_all(&mut g, "CX");
        g.reset();
        assert_eq!(g.guess_letter('C'), GuessOutcome::Correct);
        assert_eq!(g.display(), "C__");
    }

    #[test]
    fn lost_game_can_be_won_after_reset() {
        let mut g = game("CAT");
        guess_all(&mut g, "QWERYU");
        assert_eq!(g.status(), GameStatus::Lost);

        g.reset();
        guess_all(&mut g, "CAT");
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.incorrect_count(), 0);
    }

    // -- Typed input --

    #[test]
    fn typed_lowercase_matches_uppercase_phrase() {
        let mut g = game("CAT");
        g.guess_typed("c a t");
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.incorrect_count(), 0);
    }

    #[test]
    fn typed_input_counts_misses_once_per_letter() {
        let mut g = game("CAT");
        g.guess_typed("zZq");
        assert_eq!(g.incorrect_count(), 2);
        assert_eq!(g.wrong_letters(), vec!['Q', 'Z']);
    }

    // -- Summary --

    #[test]
    fn summary_reflects_state() {
        let mut g = game("CAT");
        guess_all(&mut g, "TZA");
        let summary = g.summary();
        assert_eq!(summary.display, "_AT");
        assert_eq!(summary.status, GameStatus::InProgress);
        assert_eq!(summary.incorrect_guesses, 1);
        assert_eq!(summary.remaining_attempts, 5);
        assert_eq!(summary.guessed, vec!['A', 'T', 'Z']);
        assert_eq!(summary.wrong, vec!['Z']);
        assert_eq!(summary.illustration, Illustration::Stage(1));
    }
}
