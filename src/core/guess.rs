//! A submitted, evaluated guess

use super::{TileStatus, Word, evaluate, is_winning};
use serde::{Deserialize, Serialize};

/// A guess together with its per-position evaluation
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: String,
    evaluation: Vec<TileStatus>,
}

impl Guess {
    /// Evaluate `word` against `target` and wrap the result
    #[must_use]
    pub fn evaluated(word: Word, target: &Word) -> Self {
        let evaluation = evaluate(&word, target);
        Self {
            word: word.text().to_string(),
            evaluation,
        }
    }

    /// The guessed word, uppercase
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// One status per letter position
    #[must_use]
    pub fn evaluation(&self) -> &[TileStatus] {
        &self.evaluation
    }

    /// True if every position is Correct
    #[must_use]
    pub fn is_winning(&self) -> bool {
        is_winning(&self.evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluated_guess_keeps_word_and_statuses() {
        let guess = Guess::evaluated(Word::new("words").unwrap(), &Word::new("world").unwrap());
        assert_eq!(guess.word(), "WORDS");
        assert_eq!(guess.evaluation().len(), 5);
        assert!(!guess.is_winning());
    }

    #[test]
    fn serializes_with_lowercase_statuses() {
        let guess = Guess::evaluated(Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        let json = serde_json::to_value(&guess).unwrap();
        assert_eq!(json["word"], "CRANE");
        assert_eq!(json["evaluation"][0], "correct");
        assert!(guess.is_winning());
    }
}
