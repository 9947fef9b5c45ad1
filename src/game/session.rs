//! Multi-length game session
//!
//! Exactly one round is active; rounds for other lengths are parked untouched
//! until the player switches back. Every round gets a fresh generation from a
//! session-wide counter, and validation tickets carry that generation so a
//! verdict arriving after a reset or switch is recognised as stale.

use super::{
    DEFAULT_WORD_LENGTH, Rejection, RoundSnapshot, RoundState, SNAPSHOT_VERSION, Signal, Snapshot,
    Statistics, SubmitOutcome,
};
use crate::core::{KeyboardStatus, Word};
use crate::error::GameError;
use crate::oracle::WordOracle;
use crate::storage::SnapshotStore;
use crate::wordlists::TargetWordSource;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A submission waiting for its dictionary verdict
///
/// Hand [`word`](Self::word) to the oracle, then pass the ticket back to
/// [`Session::complete_submit`] with the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTicket {
    length: usize,
    generation: u64,
    word: String,
}

impl ValidationTicket {
    /// The word to validate
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Word length of the round that issued the ticket
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One round per word length plus shared statistics
pub struct Session {
    active: RoundState,
    parked: BTreeMap<usize, RoundState>,
    stats: Statistics,
    next_generation: u64,
    words: Box<dyn TargetWordSource>,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Session {
    /// Start a session on today's word for `length`
    ///
    /// # Errors
    /// Returns `GameError::UnsupportedLength` if `words` has nothing for `length`.
    pub fn new(words: Box<dyn TargetWordSource>, length: usize) -> Result<Self, GameError> {
        let target = words
            .daily_word(length)
            .ok_or(GameError::UnsupportedLength(length))?;
        Ok(Self {
            active: RoundState::new(target).with_generation(1),
            parked: BTreeMap::new(),
            stats: Statistics::default(),
            next_generation: 1,
            words,
            store: None,
        })
    }

    /// Start a session from whatever `store` holds, saving back to it afterwards
    ///
    /// Unreadable or malformed stored data is logged and replaced with a fresh
    /// session on `default_length`. An unsupported `default_length` is logged
    /// and replaced with [`DEFAULT_WORD_LENGTH`].
    ///
    /// # Errors
    /// Returns `GameError::UnsupportedLength` if `words` has nothing for
    /// `DEFAULT_WORD_LENGTH` either.
    pub fn load(
        words: Box<dyn TargetWordSource>,
        store: Box<dyn SnapshotStore>,
        default_length: usize,
    ) -> Result<Self, GameError> {
        let stored = match store.load() {
            Ok(data) => data,
            Err(e) => {
                warn!("could not read saved game, starting fresh: {e}");
                None
            }
        };

        let length = if words.daily_word(default_length).is_some() {
            default_length
        } else {
            warn!(
                default_length,
                "unsupported default word length, using {DEFAULT_WORD_LENGTH}"
            );
            DEFAULT_WORD_LENGTH
        };

        let mut session = Self::new(words, length)?;
        if let Some(data) = stored {
            session.restore(Snapshot::from_json(&data));
            info!(
                length = session.active_length(),
                rounds = session.parked.len() + 1,
                "restored saved game"
            );
        }
        session.store = Some(store);
        Ok(session)
    }

    /// Attach a store; the current state is saved to it immediately
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self.persist();
        self
    }

    /// The round currently being played
    #[must_use]
    pub fn active(&self) -> &RoundState {
        &self.active
    }

    #[must_use]
    pub fn active_length(&self) -> usize {
        self.active.word_length()
    }

    /// Round for `length`, active or parked
    #[must_use]
    pub fn round(&self, length: usize) -> Option<&RoundState> {
        if length == self.active_length() {
            Some(&self.active)
        } else {
            self.parked.get(&length)
        }
    }

    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Best status per letter over the active round's guesses
    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        KeyboardStatus::aggregate(self.active.guesses())
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.active.is_validating()
    }

    /// Type a letter into the active round
    pub fn add_letter(&mut self, c: char) -> bool {
        let changed = self.active.append_letter(c);
        if changed {
            self.persist();
        }
        changed
    }

    /// Erase the last letter of the active round
    pub fn delete_letter(&mut self) -> bool {
        let changed = self.active.delete_letter();
        if changed {
            self.persist();
        }
        changed
    }

    /// Lock the active round and issue a ticket for its current input
    ///
    /// # Errors
    /// Passes on the round's `Rejection`; the session is unchanged.
    pub fn begin_submit(&mut self) -> Result<ValidationTicket, Rejection> {
        let word = self.active.begin_submit()?;
        debug!(word = %word, generation = self.active.generation(), "validation started");
        Ok(ValidationTicket {
            length: self.active_length(),
            generation: self.active.generation(),
            word,
        })
    }

    /// Apply a verdict for `ticket`
    ///
    /// Tickets from a round that has been reset, switched away from, or whose
    /// validation was cancelled yield `Stale` and change nothing. A guess that
    /// ends the round is counted in the statistics.
    pub fn complete_submit(&mut self, ticket: &ValidationTicket, valid: bool) -> SubmitOutcome {
        if ticket.length != self.active_length()
            || ticket.generation != self.active.generation()
            || !self.active.is_validating()
        {
            debug!(word = %ticket.word, generation = ticket.generation, "discarding stale verdict");
            return SubmitOutcome::Stale;
        }

        let outcome = self.active.resolve_submit(&ticket.word, valid);
        match outcome {
            SubmitOutcome::Recorded(status) if status.is_finished() => {
                let attempts = self.active.guesses().len();
                self.stats.record_outcome(status, attempts);
                info!(
                    target_word = %self.active.target(),
                    ?status,
                    attempts,
                    streak = self.stats.current_streak,
                    "round finished"
                );
                self.persist();
            }
            SubmitOutcome::Recorded(_) | SubmitOutcome::Signal(_) => self.persist(),
            SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        }
        outcome
    }

    /// Submit the active round synchronously through `oracle`
    pub fn submit_with(&mut self, oracle: &dyn WordOracle) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(ticket) => {
                let valid = oracle.is_valid_word(ticket.word());
                self.complete_submit(&ticket, valid)
            }
            Err(Rejection::InsufficientLetters) => {
                SubmitOutcome::Signal(Signal::InsufficientLetters)
            }
            Err(Rejection::NotPlaying | Rejection::ValidationPending) => SubmitOutcome::Ignored,
        }
    }

    /// Replace the active round with one on a random word
    ///
    /// # Errors
    /// Returns `GameError::UnsupportedLength` if no word is available; the
    /// active round is then left as it was.
    pub fn reset_active(&mut self) -> Result<(), GameError> {
        let length = self.active_length();
        let target = self
            .words
            .random_word(length)
            .ok_or(GameError::UnsupportedLength(length))?;
        self.reset_with(target);
        Ok(())
    }

    /// Start a new round on `target` and make it active
    ///
    /// Replaces any round of the same length; the previously active round is
    /// parked if its length differs.
    pub fn reset_with(&mut self, target: Word) {
        info!(length = target.len(), "new round");
        let round = self.fresh_round(target);
        self.parked.remove(&round.word_length());
        self.activate(round);
        self.persist();
    }

    /// Make `length` the active word length
    ///
    /// The outgoing round is parked as it is, except that a pending validation
    /// is dropped (its verdict will be stale). A length without a round gets one
    /// on today's word.
    ///
    /// # Errors
    /// Returns `GameError::UnsupportedLength` if there is no round for `length`
    /// and none can be created.
    pub fn switch_length(&mut self, length: usize) -> Result<(), GameError> {
        if length == self.active_length() {
            return Ok(());
        }
        let incoming = match self.parked.remove(&length) {
            Some(round) => round,
            None => self
                .daily_round(length)
                .ok_or(GameError::UnsupportedLength(length))?,
        };
        debug!(from = self.active_length(), to = length, "switching word length");
        self.activate(incoming);
        self.persist();
        Ok(())
    }

    /// Capture the full session state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut game_states: BTreeMap<usize, RoundSnapshot> = self
            .parked
            .iter()
            .map(|(&length, round)| (length, RoundSnapshot::from(round)))
            .collect();
        game_states.insert(self.active_length(), RoundSnapshot::from(&self.active));
        Snapshot {
            version: SNAPSHOT_VERSION,
            word_length: self.active_length(),
            stats: self.stats.clone(),
            game_states,
        }
    }

    /// Replace the session state with `snapshot`
    ///
    /// Rounds whose target is unusable are skipped. If the snapshot's active
    /// length can be neither restored nor created, the current length is kept.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let mut rounds = BTreeMap::new();
        for (length, stored) in &snapshot.game_states {
            match stored.to_round() {
                Some(round) => {
                    let generation = self.bump_generation();
                    rounds.insert(*length, round.with_generation(generation));
                }
                None => warn!(length, "skipping saved round with unusable target"),
            }
        }

        let mut length = snapshot.word_length;
        if !rounds.contains_key(&length) && !self.words.supports(length) {
            warn!(length, "saved word length is not available, keeping current");
            length = self.active_length();
        }

        let active = match rounds.remove(&length) {
            Some(round) => round,
            None => self.daily_round(length).unwrap_or_else(|| {
                let mut current = self.active.clone();
                current.cancel_validation();
                current
            }),
        };

        self.active = active;
        self.parked = rounds;
        self.stats = snapshot.stats.normalized();
    }

    /// Serialize the session as JSON
    ///
    /// # Errors
    /// Returns an error only if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.snapshot().to_json()
    }

    /// Restore from JSON; unreadable input resets to defaults field by field
    pub fn restore_json(&mut self, data: &str) {
        self.restore(Snapshot::from_json(data));
    }

    fn activate(&mut self, round: RoundState) {
        let mut outgoing = std::mem::replace(&mut self.active, round);
        if outgoing.word_length() == self.active_length() {
            return;
        }
        if outgoing.is_validating() {
            debug!(length = outgoing.word_length(), "cancelling validation of parked round");
            outgoing.cancel_validation();
        }
        self.parked.insert(outgoing.word_length(), outgoing);
    }

    fn daily_round(&mut self, length: usize) -> Option<RoundState> {
        let target = self.words.daily_word(length)?;
        Some(self.fresh_round(target))
    }

    fn fresh_round(&mut self, target: Word) -> RoundState {
        let generation = self.bump_generation();
        RoundState::new(target).with_generation(generation)
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        match self.to_json() {
            Ok(json) => {
                if let Err(e) = store.save(&json) {
                    warn!("failed to save game: {e}");
                }
            }
            Err(e) => warn!("failed to serialize game: {e}"),
        }
    }
}
