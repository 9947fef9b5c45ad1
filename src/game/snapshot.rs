//! Serializable session snapshots
//!
//! The JSON layout keeps the key names of the browser build's local storage
//! (`gameStates`, `wordLength`, `targetWord`, ...) so saved games carry over.
//!
//! Reading is lenient: every field is validated on its own and anything
//! missing or malformed falls back to its default. Two older layouts are
//! accepted as migration input:
//! - the canonical layout wrapped as `{"state": {...}, "version": n}`
//! - a single round at the top level (`targetWord`, `guesses`, ...)

use super::{RoundState, RoundStatus, Statistics};
use crate::core::{Guess, MAX_ATTEMPTS, Word};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 2;

/// Everything needed to resume a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    /// Active word length
    pub word_length: usize,
    pub stats: Statistics,
    /// One round per word length
    pub game_states: BTreeMap<usize, RoundSnapshot>,
}

/// Persisted form of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub target_word: String,
    pub current_guess: String,
    pub guesses: Vec<Guess>,
    pub current_row: usize,
    pub game_status: RoundStatus,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            word_length: super::DEFAULT_WORD_LENGTH,
            stats: Statistics::default(),
            game_states: BTreeMap::new(),
        }
    }
}

impl From<&RoundState> for RoundSnapshot {
    fn from(round: &RoundState) -> Self {
        Self {
            target_word: round.target().text().to_string(),
            current_guess: round.current_input().to_string(),
            guesses: round.guesses().to_vec(),
            current_row: round.guesses().len(),
            game_status: round.status(),
        }
    }
}

impl RoundSnapshot {
    /// Rebuild the round, replaying guesses against the target
    ///
    /// Returns `None` if the stored target is not a usable word.
    #[must_use]
    pub fn to_round(&self) -> Option<RoundState> {
        let target = Word::new(&self.target_word).ok()?;
        let guesses: Vec<Word> = self
            .guesses
            .iter()
            .filter_map(|g| Word::new(g.word()).ok())
            .collect();
        Some(RoundState::restore(target, &guesses, &self.current_guess))
    }
}

impl Snapshot {
    /// Serialize to a JSON string
    ///
    /// # Errors
    /// Returns an error only if serialization itself fails, which the snapshot
    /// types do not trigger in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse persisted JSON, substituting defaults for anything unusable
    ///
    /// Never fails: unreadable input yields `Snapshot::default()`.
    #[must_use]
    pub fn from_json(data: &str) -> Self {
        match serde_json::from_str::<Value>(data) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!("discarding unreadable snapshot: {e}");
                Self::default()
            }
        }
    }

    /// Interpret an arbitrary JSON value as a snapshot
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let state = unwrap_state(value);
        let Some(root) = state.as_object() else {
            warn!("snapshot is not a JSON object, using defaults");
            return Self::default();
        };

        let mut snapshot = Self::default();

        if let Some(length) = root.get("wordLength").and_then(Value::as_u64) {
            snapshot.word_length = length as usize;
        }

        snapshot.stats = root.get("stats").map(parse_stats).unwrap_or_default();

        match root.get("gameStates") {
            Some(Value::Object(states)) => {
                for (key, state) in states {
                    let Ok(length) = key.parse::<usize>() else {
                        warn!(key = %key, "ignoring round with non-numeric length key");
                        continue;
                    };
                    match parse_round(state, Some(length)) {
                        Some(round) => {
                            snapshot.game_states.insert(length, round);
                        }
                        None => warn!(length, "discarding malformed round"),
                    }
                }
            }
            Some(_) => warn!("gameStates is not an object, ignoring"),
            None => {
                // Legacy single-round layout
                if root.contains_key("targetWord") {
                    if let Some(round) = parse_round(state, None) {
                        let length = round.target_word.len();
                        snapshot.word_length = length;
                        snapshot.game_states.insert(length, round);
                    } else {
                        warn!("discarding malformed legacy round");
                    }
                }
            }
        }

        snapshot
    }
}

fn unwrap_state(value: &Value) -> &Value {
    match value.get("state") {
        Some(inner @ Value::Object(_)) => inner,
        _ => value,
    }
}

/// Parse statistics field by field
fn parse_stats(value: &Value) -> Statistics {
    let mut stats = Statistics::default();
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    if let Some(n) = field("played") {
        stats.played = n;
    }
    if let Some(n) = field("won") {
        stats.won = n;
    }
    if let Some(n) = field("currentStreak") {
        stats.current_streak = n;
    }
    if let Some(n) = field("maxStreak") {
        stats.max_streak = n;
    }

    match value.get("distribution").and_then(Value::as_array) {
        Some(items) if items.len() == MAX_ATTEMPTS => {
            for (slot, item) in stats.distribution.iter_mut().zip(items) {
                *slot = item
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(0);
            }
        }
        Some(_) => warn!("distribution has the wrong shape, resetting it"),
        None => {}
    }

    stats.normalized()
}

/// Parse one round; `expected_length` comes from the map key when known
fn parse_round(value: &Value, expected_length: Option<usize>) -> Option<RoundSnapshot> {
    let target = value
        .get("targetWord")
        .and_then(Value::as_str)
        .and_then(|s| Word::new(s).ok())?;

    if expected_length.is_some_and(|n| n != target.len()) {
        warn!(
            target_length = target.len(),
            "round target does not match its length key"
        );
        return None;
    }

    let guesses: Vec<Word> = value
        .get("guesses")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    item.get("word")
                        .and_then(Value::as_str)
                        .or_else(|| item.as_str())
                })
                .filter_map(|word| Word::new(word).ok())
                .collect()
        })
        .unwrap_or_default();

    let input = value
        .get("currentGuess")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let round = RoundState::restore(target, &guesses, input);
    Some(RoundSnapshot::from(&round))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileStatus;
    use serde_json::json;

    #[test]
    fn garbage_yields_defaults() {
        assert_eq!(Snapshot::from_json("not json"), Snapshot::default());
        assert_eq!(Snapshot::from_json("[1, 2, 3]"), Snapshot::default());
        assert_eq!(Snapshot::from_json("null"), Snapshot::default());
        assert_eq!(Snapshot::from_json("{}"), Snapshot::default());
    }

    #[test]
    fn canonical_round_trip() {
        let mut round = RoundState::new(Word::new("crane").unwrap());
        for c in "slate".chars() {
            round.append_letter(c);
        }
        let word = round.begin_submit().unwrap();
        round.resolve_submit(&word, true);
        round.append_letter('b');

        let mut snapshot = Snapshot::default();
        snapshot.stats.record_outcome(RoundStatus::Won, 4);
        snapshot.game_states.insert(5, RoundSnapshot::from(&round));

        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json), snapshot);
    }

    #[test]
    fn json_uses_storage_key_names() {
        let round = RoundState::new(Word::new("planet").unwrap());
        let mut snapshot = Snapshot::default();
        snapshot.game_states.insert(6, RoundSnapshot::from(&round));

        let value: Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["wordLength"], 5);
        assert_eq!(value["gameStates"]["6"]["targetWord"], "PLANET");
        assert_eq!(value["gameStates"]["6"]["gameStatus"], "playing");
        assert_eq!(value["stats"]["maxStreak"], 0);
    }

    #[test]
    fn malformed_fields_fall_back_individually() {
        let data = json!({
            "wordLength": "six",
            "stats": { "played": 4, "won": "lots", "distribution": [1, 1] },
            "gameStates": {
                "5": { "targetWord": "CRANE", "guesses": [{ "word": "SLATE" }, 42] },
                "6": { "targetWord": "CRANE" },
                "x": { "targetWord": "PLANET" },
                "7": "garbage"
            }
        });
        let snapshot = Snapshot::from_value(&data);

        assert_eq!(snapshot.word_length, 5);
        assert_eq!(snapshot.stats.played, 4);
        assert_eq!(snapshot.stats.won, 0);
        assert_eq!(snapshot.stats.distribution, [0; MAX_ATTEMPTS]);
        assert_eq!(snapshot.game_states.len(), 1);
        assert_eq!(snapshot.game_states[&5].guesses.len(), 1);
    }

    #[test]
    fn evaluations_are_recomputed_not_trusted() {
        let data = json!({
            "gameStates": {
                "5": {
                    "targetWord": "CRANE",
                    "guesses": [{ "word": "SLATE", "evaluation": ["correct", "correct", "correct", "correct", "correct"] }],
                    "gameStatus": "won"
                }
            }
        });
        let snapshot = Snapshot::from_value(&data);
        let round = &snapshot.game_states[&5];
        assert_eq!(round.game_status, RoundStatus::Playing);
        assert_eq!(round.guesses[0].evaluation()[0], TileStatus::Absent);
    }

    #[test]
    fn wrapped_state_is_unwrapped() {
        let data = json!({
            "state": {
                "wordLength": 6,
                "stats": { "played": 2, "won": 1, "currentStreak": 1, "maxStreak": 1, "distribution": [0, 1, 0, 0, 0, 0] },
                "gameStates": { "6": { "targetWord": "PLANET", "currentGuess": "PLA", "guesses": [] } }
            },
            "version": 0
        });
        let snapshot = Snapshot::from_value(&data);
        assert_eq!(snapshot.word_length, 6);
        assert_eq!(snapshot.stats.won, 1);
        assert_eq!(snapshot.game_states[&6].current_guess, "PLA");
    }

    #[test]
    fn legacy_single_round_migrates() {
        let data = json!({
            "targetWord": "CRANE",
            "currentGuess": "",
            "guesses": [{ "word": "CRANE", "evaluation": [] }],
            "gameStatus": "won",
            "stats": { "played": 1, "won": 1, "currentStreak": 1, "maxStreak": 1, "distribution": [1, 0, 0, 0, 0, 0] }
        });
        let snapshot = Snapshot::from_value(&data);
        assert_eq!(snapshot.word_length, 5);
        assert_eq!(snapshot.game_states[&5].game_status, RoundStatus::Won);
        assert_eq!(snapshot.stats.played, 1);
    }
}
