//! Game state: rounds, sessions, statistics and snapshots
//!
//! A [`Session`] keeps one [`RoundState`] per word length and the shared
//! [`Statistics`]. It is the only type the front ends mutate.

mod round;
mod session;
mod snapshot;
mod stats;

pub use round::{Rejection, RoundState, RoundStatus, Signal, SubmitOutcome};
pub use session::{Session, ValidationTicket};
pub use snapshot::{RoundSnapshot, SNAPSHOT_VERSION, Snapshot};
pub use stats::Statistics;

/// Word length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;
