//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word per line, or a
//! `:command`.

use crate::game::{Rejection, Session, Signal, SubmitOutcome};
use crate::oracle::WordOracle;
use crate::output::formatters::share_text;
use crate::output::{print_board, print_keyboard, print_round_result, print_statistics};
use crate::wordlists::SUPPORTED_LENGTHS;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    NewWord,
    Length(usize),
    Stats,
    Share,
    Help,
    Quit,
    Unknown(String),
}

impl LineCommand {
    /// Parse one line of user input
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_string());
        };
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit" | "exit"), _) => Self::Quit,
            (Some("n" | "new"), _) => Self::NewWord,
            (Some("s" | "stats"), _) => Self::Stats,
            (Some("share"), _) => Self::Share,
            (Some("h" | "help"), _) => Self::Help,
            (Some("l" | "len" | "length"), Some(n)) => n
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Length),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session, oracle: &dyn WordOracle) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(session.active());
    if session.active().status().is_finished() {
        print_round_result(session.active());
    }

    loop {
        let prompt = format!("Guess ({} letters)", session.active_length());
        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match LineCommand::parse(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::Stats => print_statistics(session.statistics()),
            LineCommand::Share => println!("\n{}\n", share_text(session.active())),
            LineCommand::NewWord => match session.reset_active() {
                Ok(()) => {
                    println!("\n🔄 New word!");
                    print_board(session.active());
                }
                Err(e) => println!("❌ {e}"),
            },
            LineCommand::Length(n) => match session.switch_length(n) {
                Ok(()) => {
                    println!("\nNow playing {n}-letter words.");
                    print_board(session.active());
                    print_keyboard(&session.keyboard_status());
                }
                Err(e) => println!("❌ {e} (try one of {SUPPORTED_LENGTHS:?})"),
            },
            LineCommand::Unknown(cmd) => println!("Unknown command '{cmd}'. Type :help"),
            LineCommand::Guess(word) if word.is_empty() => {}
            LineCommand::Guess(word) => play_word(session, oracle, &word),
        }
    }
}

fn play_word(session: &mut Session, oracle: &dyn WordOracle, word: &str) {
    if session.active().status().is_finished() {
        println!("This round is over. Type :new for another word.");
        return;
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Letters only, please.");
        return;
    }
    if word.len() > session.active_length() {
        println!("❌ Too many letters.");
        return;
    }

    while session.delete_letter() {}
    for c in word.chars() {
        session.add_letter(c);
    }

    match submit_with_spinner(session, oracle) {
        SubmitOutcome::Signal(Signal::InsufficientLetters) => {
            println!("{}", "Not enough letters".yellow());
        }
        SubmitOutcome::Signal(Signal::InvalidWord) => {
            println!("{}", "Not in word list".yellow());
        }
        SubmitOutcome::Recorded(status) => {
            print_board(session.active());
            if status.is_finished() {
                print_round_result(session.active());
                println!("\n{}\n", share_text(session.active()));
                println!("Type :new for another word or :len N to switch length.");
            } else {
                print_keyboard(&session.keyboard_status());
            }
        }
        SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
    }
}

/// Validate the typed word, showing a spinner while the dictionary answers
fn submit_with_spinner(session: &mut Session, oracle: &dyn WordOracle) -> SubmitOutcome {
    let ticket = match session.begin_submit() {
        Ok(ticket) => ticket,
        Err(Rejection::InsufficientLetters) => {
            return SubmitOutcome::Signal(Signal::InsufficientLetters);
        }
        Err(Rejection::NotPlaying | Rejection::ValidationPending) => {
            return SubmitOutcome::Ignored;
        }
    };

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Checking {}...", ticket.word()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let valid = oracle.is_valid_word(ticket.word());
    spinner.finish_and_clear();

    session.complete_submit(&ticket, valid)
}

fn print_help() {
    println!("Type a word and press Enter to guess. Commands:");
    println!("  :new        new random word");
    println!("  :len N      switch to N-letter words (5, 6 or 7)");
    println!("  :stats      show statistics");
    println!("  :share      show the result grid");
    println!("  :quit       exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
