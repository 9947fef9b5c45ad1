//! Guess evaluation against a target word
//!
//! Scores each position of a guess as Correct, Present or Absent, with proper
//! handling of duplicate letters: a letter is never credited more times than it
//! occurs in the target.

use super::{TileStatus, Word};

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove them from the
///    available letter pool
/// 2. Second pass: for every remaining position, mark Present if the pool still
///    holds that letter, consuming one occurrence
/// 3. Everything else stays Absent
///
/// Both words are expected to have the same length. Positions beyond the
/// shorter word are Absent.
///
/// # Examples
/// ```
/// use wordle_game::core::{TileStatus, Word, evaluate};
///
/// let guess = Word::new("words").unwrap();
/// let target = Word::new("world").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target),
///     vec![
///         TileStatus::Correct,
///         TileStatus::Correct,
///         TileStatus::Correct,
///         TileStatus::Present,
///         TileStatus::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Vec<TileStatus> {
    debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

    let guess_letters = guess.letters();
    let target_letters = target.letters();
    let mut result = vec![TileStatus::Absent; guess_letters.len()];
    let mut available = target.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            result[i] = TileStatus::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: letter exists elsewhere and is not yet used up
    for (i, &g) in guess_letters.iter().enumerate() {
        if result[i] != TileStatus::Absent {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = TileStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// Check whether an evaluation is a win (every tile Correct)
///
/// An empty evaluation is never a win.
#[inline]
#[must_use]
pub fn is_winning(evaluation: &[TileStatus]) -> bool {
    !evaluation.is_empty() && evaluation.iter().all(|&s| s == TileStatus::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use TileStatus::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> Vec<TileStatus> {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn target_against_itself_is_all_correct() {
        for word in ["crane", "slate", "aaaaa", "planet", "balance"] {
            let result = eval(word, word);
            assert!(is_winning(&result), "{word} should win against itself");
        }
    }

    #[test]
    fn words_against_world() {
        assert_eq!(
            eval("words", "world"),
            vec![Correct, Correct, Correct, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_not_over_credited() {
        // SPEED vs ERASE: ERASE has two E's, so both guessed E's are credited
        assert_eq!(
            eval("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );

        // Three L's against HELLO's two: one exact, one displaced, one absent
        assert_eq!(
            eval("lllxx", "hello"),
            vec![Present, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn correct_position_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: second O is exact, first O may only use the other O
        assert_eq!(
            eval("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );

        // The exact match consumes the only E, earlier E stays absent
        assert_eq!(eval("eerie", "crane"), vec![Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn six_and_seven_letters() {
        assert_eq!(
            eval("planet", "plenty"),
            vec![Correct, Correct, Absent, Correct, Present, Present]
        );
        assert_eq!(eval("balance", "balance"), vec![Correct; 7]);
    }

    #[test]
    fn winning_detection() {
        assert!(is_winning(&[Correct; 5]));
        assert!(!is_winning(&[Correct, Correct, Present, Correct, Correct]));
        assert!(!is_winning(&[]));
    }

    proptest! {
        #[test]
        fn credited_letters_never_exceed_target_count(
            guess in "[A-E]{5}",
            target in "[A-E]{5}",
        ) {
            let result = eval(&guess, &target);
            for letter in b'A'..=b'E' {
                let credited = guess
                    .bytes()
                    .zip(&result)
                    .filter(|&(g, s)| g == letter && matches!(s, Correct | Present))
                    .count();
                let in_target = target.bytes().filter(|&t| t == letter).count();
                prop_assert!(credited <= in_target);
            }
        }

        #[test]
        fn correct_exactly_where_letters_match(
            guess in "[A-F]{6}",
            target in "[A-F]{6}",
        ) {
            let result = eval(&guess, &target);
            for (i, (g, t)) in guess.bytes().zip(target.bytes()).enumerate() {
                prop_assert_eq!(result[i] == Correct, g == t);
            }
        }
    }
}
