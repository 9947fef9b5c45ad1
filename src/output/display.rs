//! Display functions for game state and command results

use super::formatters::{colored_guess, colored_tile, create_progress_bar, evaluation_to_emoji};
use crate::commands::ScoreResult;
use crate::core::{KeyboardStatus, MAX_ATTEMPTS, TileStatus};
use crate::game::{RoundState, RoundStatus, Statistics};
use colored::Colorize;

/// QWERTY layout used for the keyboard summary
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print the board: guesses so far, the row being typed, then empty rows
pub fn print_board(round: &RoundState) {
    println!();
    for guess in round.guesses() {
        println!("  {}", colored_guess(guess));
    }
    let mut remaining = MAX_ATTEMPTS.saturating_sub(round.guesses().len());
    if round.status() == RoundStatus::Playing && remaining > 0 {
        let typed: String = round
            .current_input()
            .chars()
            .map(|c| colored_tile(c, TileStatus::Filled).to_string())
            .chain(
                std::iter::repeat_n(
                    colored_tile('_', TileStatus::Empty).to_string(),
                    round.word_length() - round.current_input().len(),
                ),
            )
            .collect();
        println!("  {typed}");
        remaining -= 1;
    }
    for _ in 0..remaining {
        println!(
            "  {}",
            colored_tile('_', TileStatus::Empty)
                .to_string()
                .repeat(round.word_length())
        );
    }
    println!();
}

/// Print the keyboard, each letter coloured by its best known status
pub fn print_keyboard(keys: &KeyboardStatus) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .chars()
            .map(|c| match keys.get(c) {
                Some(TileStatus::Correct) => c.to_string().green().bold().to_string(),
                Some(TileStatus::Present) => c.to_string().yellow().bold().to_string(),
                Some(_) => c.to_string().bright_black().to_string(),
                None => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}{line}", " ".repeat(indent));
    }
    println!();
}

/// Print the outcome of a finished round
pub fn print_round_result(round: &RoundState) {
    match round.status() {
        RoundStatus::Won => {
            let attempts = round.guesses().len();
            let verdict = match attempts {
                1 => "Genius!",
                2 => "Magnificent!",
                3 => "Impressive!",
                4 => "Splendid!",
                5 => "Great!",
                _ => "Phew!",
            };
            println!(
                "{} Solved in {} {}",
                verdict.bright_green().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        RoundStatus::Lost => {
            println!(
                "{} The word was {}",
                "Out of guesses.".red().bold(),
                round.target().text().bright_yellow().bold()
            );
        }
        RoundStatus::Playing => {}
    }
}

/// Print cumulative statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        format!("{}", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📊 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print the result of scoring a guess against a target
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n  {}  {}",
        colored_guess(&result.guess),
        evaluation_to_emoji(result.guess.evaluation())
    );
    if result.winning {
        println!("  {}", "All letters correct".green().bold());
    }
    println!();
}
