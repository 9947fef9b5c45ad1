//! Core domain types for the game
//!
//! Pure, deterministic building blocks: validated words, tile statuses, guess
//! evaluation and keyboard aggregation. Nothing here performs I/O.

mod evaluate;
mod guess;
mod keyboard;
mod tile;
mod word;

pub use evaluate::{evaluate, is_winning};
pub use guess::Guess;
pub use keyboard::KeyboardStatus;
pub use tile::TileStatus;
pub use word::{MAX_WORD_LENGTH, Word};

/// Maximum number of guesses in a round
pub const MAX_ATTEMPTS: usize = 6;
