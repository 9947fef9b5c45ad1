//! Cumulative player statistics
//!
//! Shared across all word lengths: a win at 5 letters and a loss at 7 letters
//! feed the same streak.

use super::RoundStatus;
use crate::core::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Played/won counts, streaks and the guess distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Index = attempt number of the win minus one
    pub distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    /// Record the outcome of a finished round
    ///
    /// `attempts_used` is the 1-based number of guesses taken. Calls with a
    /// `Playing` status are ignored, as are wins outside `1..=MAX_ATTEMPTS`.
    pub fn record_outcome(&mut self, status: RoundStatus, attempts_used: usize) {
        match status {
            RoundStatus::Playing => {}
            RoundStatus::Won => {
                let Some(slot) = attempts_used
                    .checked_sub(1)
                    .and_then(|i| self.distribution.get_mut(i))
                else {
                    tracing::warn!(attempts_used, "ignoring win with out-of-range attempt count");
                    return;
                };
                *slot += 1;
                self.played += 1;
                self.won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            RoundStatus::Lost => {
                self.played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of played rounds that were won, rounded down
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (u64::from(self.won) * 100 / u64::from(self.played)) as u32
        }
    }

    /// Repair invariants on data restored from storage
    ///
    /// `won` follows the distribution, `played` is at least `won`, and
    /// `max_streak` is at least `current_streak`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let wins: u32 = self.distribution.iter().sum();
        if wins != self.won {
            tracing::warn!(
                won = self.won,
                distribution_total = wins,
                "statistics disagree with distribution, using distribution"
            );
            self.won = wins;
        }
        self.played = self.played.max(self.won);
        self.current_streak = self.current_streak.min(self.won);
        self.max_streak = self.max_streak.max(self.current_streak);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_wins_at_attempt_three() {
        let mut stats = Statistics::default();
        for _ in 0..6 {
            stats.record_outcome(RoundStatus::Won, 3);
        }
        assert_eq!(stats.played, 6);
        assert_eq!(stats.won, 6);
        assert_eq!(stats.current_streak, 6);
        assert_eq!(stats.max_streak, 6);
        assert_eq!(stats.distribution, [0, 0, 6, 0, 0, 0]);
    }

    #[test]
    fn loss_resets_streak_only() {
        let mut stats = Statistics::default();
        stats.record_outcome(RoundStatus::Won, 1);
        stats.record_outcome(RoundStatus::Won, 6);
        stats.record_outcome(RoundStatus::Lost, 6);

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.distribution, [1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn invariants_hold_over_mixed_history() {
        let mut stats = Statistics::default();
        let outcomes = [
            (RoundStatus::Won, 4),
            (RoundStatus::Lost, 6),
            (RoundStatus::Won, 2),
            (RoundStatus::Won, 5),
            (RoundStatus::Won, 1),
            (RoundStatus::Lost, 6),
        ];
        for (status, attempts) in outcomes {
            stats.record_outcome(status, attempts);
            assert!(stats.won <= stats.played);
            assert!(stats.current_streak <= stats.max_streak);
            assert_eq!(stats.distribution.iter().sum::<u32>(), stats.won);
        }
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.win_percentage(), 66);
    }

    #[test]
    fn ignores_playing_and_out_of_range() {
        let mut stats = Statistics::default();
        stats.record_outcome(RoundStatus::Playing, 2);
        stats.record_outcome(RoundStatus::Won, 0);
        stats.record_outcome(RoundStatus::Won, MAX_ATTEMPTS + 1);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn normalized_repairs_inconsistent_counts() {
        let stats = Statistics {
            played: 1,
            won: 9,
            current_streak: 7,
            max_streak: 2,
            distribution: [1, 2, 0, 0, 0, 0],
        }
        .normalized();

        assert_eq!(stats.won, 3);
        assert_eq!(stats.played, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        assert!(json.get("currentStreak").is_some());
        assert!(json.get("maxStreak").is_some());
        assert_eq!(json["distribution"].as_array().unwrap().len(), MAX_ATTEMPTS);
    }
}
