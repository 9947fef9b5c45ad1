//! Keyboard letter status aggregation
//!
//! Folds every evaluated guess into the single best status per letter, used to
//! colour the on-screen keyboard.

use super::{Guess, TileStatus};
use rustc_hash::FxHashMap;

/// Best known status for each guessed letter
///
/// Letters that were never guessed have no entry; callers render them unstyled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<char, TileStatus>,
}

impl KeyboardStatus {
    /// Aggregate the statuses of all guesses
    ///
    /// Priority is `Correct > Present > Absent`; an entry is only ever upgraded,
    /// so the result does not depend on the order of `guesses`.
    #[must_use]
    pub fn aggregate<'a>(guesses: impl IntoIterator<Item = &'a Guess>) -> Self {
        let mut status = Self::default();
        for guess in guesses {
            for (letter, &tile) in guess.word().chars().zip(guess.evaluation()) {
                status.record(letter, tile);
            }
        }
        status
    }

    /// Record one observation, keeping the higher-priority status
    pub fn record(&mut self, letter: char, tile: TileStatus) {
        if !tile.is_evaluated() {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        self.letters
            .entry(letter)
            .and_modify(|existing| {
                if tile.priority() > existing.priority() {
                    *existing = tile;
                }
            })
            .or_insert(tile);
    }

    /// Status for a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<TileStatus> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
