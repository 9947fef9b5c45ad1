//! Single-round state machine
//!
//! A round starts `Playing` and ends `Won` or `Lost`; a finished round is never
//! reopened, a new `RoundState` replaces it instead.
//!
//! Submitting is split into two phases so the dictionary lookup can run
//! elsewhere: [`RoundState::begin_submit`] hands out the word to validate and
//! locks the round, [`RoundState::resolve_submit`] applies the verdict.

use crate::core::{Guess, MAX_ATTEMPTS, TileStatus, Word};
use crate::oracle::WordOracle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Transient feedback for the UI; never changes recorded guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Submitted with fewer letters than the word length
    InsufficientLetters,
    /// The dictionary rejected the word; input was cleared
    InvalidWord,
}

/// Why a submission could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The round is already won or lost
    NotPlaying,
    /// A previous submission is still being validated
    ValidationPending,
    /// Input is shorter than the word length
    InsufficientLetters,
}

/// Result of completing a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened (not playing, already validating, or nothing pending)
    Ignored,
    /// The verdict belongs to a round that has since been reset or switched away
    Stale,
    /// Rejected with a transient signal
    Signal(Signal),
    /// A guess was recorded; carries the round status afterwards
    Recorded(RoundStatus),
}

/// State of one puzzle attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    guesses: Vec<Guess>,
    current_input: String,
    status: RoundStatus,
    generation: u64,
    validating: Option<String>,
}

impl RoundState {
    /// Start a fresh round for `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            current_input: String::new(),
            status: RoundStatus::Playing,
            generation: 0,
            validating: None,
        }
    }

    /// Rebuild a round from persisted parts
    ///
    /// Guesses are replayed against the target, so stored evaluations and status
    /// never disagree with the words. Guesses past the end of the round, of the
    /// wrong length, or after a win are dropped.
    #[must_use]
    pub fn restore(target: Word, guesses: &[Word], current_input: &str) -> Self {
        let mut round = Self::new(target);
        for word in guesses {
            if round.status.is_finished() || word.len() != round.word_length() {
                debug!(word = %word, "dropping persisted guess that does not fit the round");
                continue;
            }
            round.record(word.clone());
        }
        if !round.status.is_finished() {
            for c in current_input.chars() {
                round.append_letter(c);
            }
        }
        round
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// The hidden word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Guesses made so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Identity of this round within its session
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a submission awaits its dictionary verdict
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.validating.is_some()
    }

    fn accepts_edits(&self) -> bool {
        self.status == RoundStatus::Playing && self.validating.is_none()
    }

    /// Append a letter to the current input
    ///
    /// Returns false (and changes nothing) unless the round is playing, not
    /// validating, the input has room, and `c` is an ASCII letter.
    pub fn append_letter(&mut self, c: char) -> bool {
        if !self.accepts_edits()
            || !c.is_ascii_alphabetic()
            || self.current_input.len() >= self.word_length()
        {
            return false;
        }
        self.current_input.push(c.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the current input
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Start submitting the current input
    ///
    /// On success the round is locked until [`resolve_submit`](Self::resolve_submit)
    /// or [`cancel_validation`](Self::cancel_validation) runs; the returned word is
    /// what the dictionary should check.
    ///
    /// # Errors
    /// Returns a `Rejection` when the round is finished, already validating, or
    /// the input is too short. None of these change the round.
    pub fn begin_submit(&mut self) -> Result<String, Rejection> {
        if self.status.is_finished() {
            return Err(Rejection::NotPlaying);
        }
        if self.validating.is_some() {
            return Err(Rejection::ValidationPending);
        }
        if self.current_input.len() != self.word_length() {
            debug!(
                input = %self.current_input,
                length = self.word_length(),
                "submission rejected: not enough letters"
            );
            return Err(Rejection::InsufficientLetters);
        }
        self.validating = Some(self.current_input.clone());
        Ok(self.current_input.clone())
    }

    /// Apply the dictionary verdict for the pending submission
    ///
    /// An invalid word clears the input. A valid word is evaluated and recorded,
    /// which may finish the round. Returns `Ignored` if nothing was pending or the
    /// verdict is for a different word.
    pub fn resolve_submit(&mut self, word: &str, valid: bool) -> SubmitOutcome {
        match self.validating.as_deref() {
            Some(pending) if pending.eq_ignore_ascii_case(word) => {}
            _ => return SubmitOutcome::Ignored,
        }
        self.validating = None;

        let parsed = Word::new(word)
            .ok()
            .filter(|w| w.len() == self.word_length());
        let (true, Some(word)) = (valid, parsed) else {
            debug!(word, "submission rejected: not in dictionary");
            self.current_input.clear();
            return SubmitOutcome::Signal(Signal::InvalidWord);
        };

        self.record(word);
        SubmitOutcome::Recorded(self.status)
    }

    /// Drop a pending submission without applying a verdict
    ///
    /// The typed input is kept so the player can submit again.
    pub fn cancel_validation(&mut self) {
        self.validating = None;
    }

    /// Submit synchronously, asking `oracle` for the verdict
    pub fn submit(&mut self, oracle: &dyn WordOracle) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(word) => {
                let valid = oracle.is_valid_word(&word);
                self.resolve_submit(&word, valid)
            }
            Err(Rejection::InsufficientLetters) => {
                SubmitOutcome::Signal(Signal::InsufficientLetters)
            }
            Err(Rejection::NotPlaying | Rejection::ValidationPending) => SubmitOutcome::Ignored,
        }
    }

    /// Evaluate and append a guess, updating the status
    fn record(&mut self, word: Word) {
        let guess = Guess::evaluated(word, &self.target);
        debug!(
            word = guess.word(),
            evaluation = ?guess.evaluation(),
            attempt = self.guesses.len() + 1,
            "guess recorded"
        );

        let won = guess.is_winning();
        self.guesses.push(guess);
        self.current_input.clear();

        if won {
            self.status = RoundStatus::Won;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.status = RoundStatus::Lost;
        }
    }

    /// Tile statuses for row `row` of the board, including typed and empty rows
    #[must_use]
    pub fn row_statuses(&self, row: usize) -> Vec<TileStatus> {
        if let Some(guess) = self.guesses.get(row) {
            return guess.evaluation().to_vec();
        }
        let mut statuses = vec![TileStatus::Empty; self.word_length()];
        if row == self.guesses.len() && !self.status.is_finished() {
            for slot in statuses.iter_mut().take(self.current_input.len()) {
                *slot = TileStatus::Filled;
            }
        }
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::WordListOracle;

    fn round(target: &str) -> RoundState {
        RoundState::new(Word::new(target).unwrap())
    }

    fn type_word(round: &mut RoundState, word: &str) {
        for c in word.chars() {
            round.append_letter(c);
        }
    }

    fn oracle() -> WordListOracle {
        WordListOracle::from_words(["CRANE", "SLATE", "WORLD", "WORDS", "HOUSE", "MOUSE", "ABOUT"])
    }

    #[test]
    fn append_uppercases_and_respects_length() {
        let mut r = round("crane");
        type_word(&mut r, "slatex");
        assert_eq!(r.current_input(), "SLATE");
        assert!(!r.append_letter('q'));
    }

    #[test]
    fn append_rejects_non_letters() {
        let mut r = round("crane");
        assert!(!r.append_letter('1'));
        assert!(!r.append_letter(' '));
        assert!(r.current_input().is_empty());
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut r = round("crane");
        assert!(!r.delete_letter());
        type_word(&mut r, "ab");
        assert!(r.delete_letter());
        assert_eq!(r.current_input(), "A");
    }

    #[test]
    fn short_input_signals_insufficient_letters() {
        let mut r = round("crane");
        type_word(&mut r, "cra");
        assert_eq!(
            r.submit(&oracle()),
            SubmitOutcome::Signal(Signal::InsufficientLetters)
        );
        assert_eq!(r.current_input(), "CRA");
        assert!(r.guesses().is_empty());
    }

    #[test]
    fn invalid_word_clears_input_without_guess() {
        let mut r = round("crane");
        type_word(&mut r, "zzzzz");
        assert_eq!(r.submit(&oracle()), SubmitOutcome::Signal(Signal::InvalidWord));
        assert!(r.current_input().is_empty());
        assert!(r.guesses().is_empty());
        assert_eq!(r.status(), RoundStatus::Playing);
    }

    #[test]
    fn correct_guess_wins() {
        let mut r = round("crane");
        type_word(&mut r, "slate");
        assert_eq!(r.submit(&oracle()), SubmitOutcome::Recorded(RoundStatus::Playing));
        type_word(&mut r, "crane");
        assert_eq!(r.submit(&oracle()), SubmitOutcome::Recorded(RoundStatus::Won));
        assert_eq!(r.guesses().len(), 2);

        // Terminal: no more edits or submissions
        assert!(!r.append_letter('a'));
        assert_eq!(r.submit(&oracle()), SubmitOutcome::Ignored);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut r = round("crane");
        for attempt in 1..=MAX_ATTEMPTS {
            type_word(&mut r, "house");
            let expected = if attempt == MAX_ATTEMPTS {
                RoundStatus::Lost
            } else {
                RoundStatus::Playing
            };
            assert_eq!(r.submit(&oracle()), SubmitOutcome::Recorded(expected));
        }
        assert_eq!(r.guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut r = round("crane");
        for _ in 1..MAX_ATTEMPTS {
            type_word(&mut r, "house");
            r.submit(&oracle());
        }
        type_word(&mut r, "crane");
        assert_eq!(r.submit(&oracle()), SubmitOutcome::Recorded(RoundStatus::Won));
    }

    #[test]
    fn pending_validation_blocks_edits_and_second_submit() {
        let mut r = round("crane");
        type_word(&mut r, "slate");
        let word = r.begin_submit().unwrap();
        assert!(r.is_validating());

        assert_eq!(r.begin_submit(), Err(Rejection::ValidationPending));
        assert!(!r.delete_letter());
        assert!(!r.append_letter('x'));

        assert_eq!(
            r.resolve_submit(&word, true),
            SubmitOutcome::Recorded(RoundStatus::Playing)
        );
        // A duplicate verdict does not record twice
        assert_eq!(r.resolve_submit(&word, true), SubmitOutcome::Ignored);
        assert_eq!(r.guesses().len(), 1);
    }

    #[test]
    fn cancel_keeps_input() {
        let mut r = round("crane");
        type_word(&mut r, "slate");
        r.begin_submit().unwrap();
        r.cancel_validation();
        assert!(!r.is_validating());
        assert_eq!(r.current_input(), "SLATE");
        assert_eq!(r.resolve_submit("SLATE", true), SubmitOutcome::Ignored);
    }

    #[test]
    fn restore_replays_guesses() {
        let target = Word::new("crane").unwrap();
        let guesses = [Word::new("slate").unwrap(), Word::new("crane").unwrap()];
        let r = RoundState::restore(target, &guesses, "ab");
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.guesses().len(), 2);
        // Input is not kept on a finished round
        assert!(r.current_input().is_empty());
    }

    #[test]
    fn restore_drops_wrong_length_and_excess_guesses() {
        let target = Word::new("crane").unwrap();
        let mut guesses = vec![Word::new("planet").unwrap()];
        guesses.extend(std::iter::repeat_n(Word::new("house").unwrap(), 8));
        let r = RoundState::restore(target, &guesses, "");
        assert_eq!(r.guesses().len(), MAX_ATTEMPTS);
        assert_eq!(r.status(), RoundStatus::Lost);
    }

    #[test]
    fn row_statuses_cover_board() {
        let mut r = round("crane");
        type_word(&mut r, "slate");
        r.submit(&oracle());
        type_word(&mut r, "ab");

        assert_eq!(r.row_statuses(0), r.guesses()[0].evaluation());
        assert_eq!(
            r.row_statuses(1),
            vec![
                TileStatus::Filled,
                TileStatus::Filled,
                TileStatus::Empty,
                TileStatus::Empty,
                TileStatus::Empty
            ]
        );
        assert_eq!(r.row_statuses(2), vec![TileStatus::Empty; 5]);
    }
}
