//! Score command
//!
//! Evaluates a single guess against a known target, without a session.

use crate::core::{Guess, Word};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Guess,
    pub winning: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (empty, too long, or not ASCII letters)
/// - The two words differ in length
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess has {} letters but target has {}",
            guess.len(),
            target.len()
        ));
    }

    let guess = Guess::evaluated(guess, &target);
    Ok(ScoreResult {
        winning: guess.is_winning(),
        guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileStatus;

    #[test]
    fn score_mixed_guess() {
        let result = score_words("words", "world").unwrap();

        assert_eq!(result.guess.word(), "WORDS");
        assert_eq!(
            result.guess.evaluation(),
            [
                TileStatus::Correct,
                TileStatus::Correct,
                TileStatus::Correct,
                TileStatus::Present,
                TileStatus::Absent
            ]
        );
        assert!(!result.winning);
    }

    #[test]
    fn score_exact_match() {
        assert!(score_words("Balance", "BALANCE").unwrap().winning);
    }

    #[test]
    fn score_length_mismatch() {
        let err = score_words("crane", "planet").unwrap_err();
        assert!(err.contains("5 letters"));
    }

    #[test]
    fn score_invalid_word() {
        assert!(score_words("cr4ne", "crane").is_err());
        assert!(score_words("crane", "").is_err());
    }
}
