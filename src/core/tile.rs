//! Per-tile feedback classification

use serde::{Deserialize, Serialize};

/// Status of a single tile on the board or key on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    /// Nothing typed yet
    Empty,
    /// Letter typed but not yet submitted
    Filled,
    /// Letter in the correct position
    Correct,
    /// Letter in the word, wrong position
    Present,
    /// Letter not in the word (or all occurrences already accounted for)
    Absent,
}

impl TileStatus {
    /// Aggregation priority: `Correct > Present > Absent`
    ///
    /// `Empty` and `Filled` never come out of an evaluation and rank lowest.
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Filled => 0,
        }
    }

    /// True for the three statuses produced by evaluating a guess
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(TileStatus::Correct.priority() > TileStatus::Present.priority());
        assert!(TileStatus::Present.priority() > TileStatus::Absent.priority());
        assert!(TileStatus::Absent.priority() > TileStatus::Filled.priority());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TileStatus::Present).unwrap();
        assert_eq!(json, "\"present\"");

        let parsed: TileStatus = serde_json::from_str("\"correct\"").unwrap();
        assert_eq!(parsed, TileStatus::Correct);
    }

    #[test]
    fn evaluated_statuses() {
        assert!(TileStatus::Absent.is_evaluated());
        assert!(!TileStatus::Filled.is_evaluated());
        assert!(!TileStatus::Empty.is_evaluated());
    }
}
