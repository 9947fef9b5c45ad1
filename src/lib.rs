//! Wordle Game
//!
//! Guess evaluation and game-state engine for a Wordle-style puzzle, with 5, 6
//! and 7 letter rounds, shared statistics and resumable sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{TileStatus, Word, evaluate};
//!
//! let guess = Word::new("words").unwrap();
//! let target = Word::new("world").unwrap();
//!
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(evaluation[3], TileStatus::Present);
//! ```
//!
//! A full game goes through a [`game::Session`]:
//!
//! ```rust
//! use wordle_game::game::{Session, SubmitOutcome};
//! use wordle_game::oracle::WordListOracle;
//! use wordle_game::wordlists::WordBank;
//!
//! let mut session = Session::new(Box::new(WordBank::default()), 5).unwrap();
//! for c in "world".chars() {
//!     session.add_letter(c);
//! }
//! let outcome = session.submit_with(&WordListOracle::embedded());
//! assert!(matches!(outcome, SubmitOutcome::Recorded(_)));
//! ```

// Core domain types
pub mod core;

// Rounds, sessions and statistics
pub mod game;

// Word lists and target selection
pub mod wordlists;

// Dictionary validation
pub mod oracle;

// Snapshot persistence
pub mod storage;

// User settings
pub mod config;

// Error types
pub mod error;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
