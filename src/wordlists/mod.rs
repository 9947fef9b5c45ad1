//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus target word selection.

mod embedded;
pub mod loader;
pub mod target;

pub use embedded::{ALLOWED_5, ALLOWED_6, ALLOWED_7, ANSWERS_5, ANSWERS_6, ANSWERS_7};
pub use target::{TargetWordSource, WordBank};

/// Word lengths with embedded lists
pub const SUPPORTED_LENGTHS: [usize; 3] = [5, 6, 7];

/// Daily answer list for a word length
#[must_use]
pub fn answers(length: usize) -> Option<&'static [&'static str]> {
    match length {
        5 => Some(ANSWERS_5),
        6 => Some(ANSWERS_6),
        7 => Some(ANSWERS_7),
        _ => None,
    }
}

/// Accepted guesses for a word length
#[must_use]
pub fn allowed(length: usize) -> Option<&'static [&'static str]> {
    match length {
        5 => Some(ALLOWED_5),
        6 => Some(ALLOWED_6),
        7 => Some(ALLOWED_7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_supported_length_has_lists() {
        for length in SUPPORTED_LENGTHS {
            assert!(!answers(length).unwrap().is_empty());
            assert!(!allowed(length).unwrap().is_empty());
        }
        assert!(answers(4).is_none());
        assert!(allowed(8).is_none());
    }

    #[test]
    fn words_have_expected_length_and_case() {
        for length in SUPPORTED_LENGTHS {
            for &word in answers(length).unwrap().iter().chain(allowed(length).unwrap()) {
                assert_eq!(word.len(), length, "Word '{word}' is not {length} letters");
                assert!(
                    word.bytes().all(|b| b.is_ascii_uppercase()),
                    "Word '{word}' contains non-uppercase chars"
                );
            }
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        for length in SUPPORTED_LENGTHS {
            let allowed_set: HashSet<_> = allowed(length).unwrap().iter().collect();
            for answer in answers(length).unwrap() {
                assert!(
                    allowed_set.contains(answer),
                    "Answer '{answer}' not in allowed list"
                );
            }
        }
    }
}
