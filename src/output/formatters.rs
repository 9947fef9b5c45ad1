//! Formatting utilities for terminal output

use crate::core::{Guess, MAX_ATTEMPTS, TileStatus};
use crate::game::{RoundState, RoundStatus};
use colored::{ColoredString, Colorize};

/// Emoji square for one tile
#[must_use]
pub const fn tile_emoji(status: TileStatus) -> char {
    match status {
        TileStatus::Correct => '🟩',
        TileStatus::Present => '🟨',
        TileStatus::Absent => '⬛',
        TileStatus::Empty | TileStatus::Filled => '⬜',
    }
}

/// Format an evaluation as an emoji string
#[must_use]
pub fn evaluation_to_emoji(evaluation: &[TileStatus]) -> String {
    evaluation.iter().map(|&s| tile_emoji(s)).collect()
}

/// One letter styled like its tile
#[must_use]
pub fn colored_tile(letter: char, status: TileStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        TileStatus::Correct => text.black().on_green().bold(),
        TileStatus::Present => text.black().on_yellow().bold(),
        TileStatus::Absent => text.white().on_bright_black().bold(),
        TileStatus::Filled => text.bold(),
        TileStatus::Empty => text.dimmed(),
    }
}

/// A guess as a row of coloured tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .word()
        .chars()
        .zip(guess.evaluation())
        .map(|(c, &s)| colored_tile(c, s).to_string())
        .collect()
}

/// Spoiler-free result grid, as shared after a round
///
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::RoundState;
/// use wordle_game::oracle::WordListOracle;
/// use wordle_game::output::formatters::share_text;
///
/// let mut round = RoundState::new(Word::new("crane").unwrap());
/// for c in "crane".chars() {
///     round.append_letter(c);
/// }
/// round.submit(&WordListOracle::from_words(["CRANE"]));
/// assert_eq!(share_text(&round), "Wordle 5 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(round: &RoundState) -> String {
    let score = match round.status() {
        RoundStatus::Won => round.guesses().len().to_string(),
        RoundStatus::Lost | RoundStatus::Playing => "X".to_string(),
    };
    let rows: Vec<String> = round
        .guesses()
        .iter()
        .map(|g| evaluation_to_emoji(g.evaluation()))
        .collect();
    format!(
        "Wordle {} {score}/{MAX_ATTEMPTS}\n\n{}",
        round.word_length(),
        rows.join("\n")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
