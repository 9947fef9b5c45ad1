//! Target word selection
//!
//! Daily words are the same for every player on a calendar day: the number of
//! days since the epoch, modulo the answer list size. Replays pick uniformly at
//! random.

use crate::core::Word;
use chrono::{Local, NaiveDate};
use rand::seq::IndexedRandom;

/// Default first day of the daily rotation
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Supplies target words for new rounds
pub trait TargetWordSource {
    /// Today's word for `length`, or `None` if the length is unsupported
    fn daily_word(&self, length: usize) -> Option<Word>;

    /// A uniformly random word for `length`, or `None` if unsupported
    fn random_word(&self, length: usize) -> Option<Word>;

    /// Whether words of `length` can be produced
    fn supports(&self, length: usize) -> bool {
        self.daily_word(length).is_some()
    }
}

/// Target source backed by the embedded answer lists
#[derive(Debug, Clone)]
pub struct WordBank {
    epoch: NaiveDate,
    today: Option<NaiveDate>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

impl WordBank {
    /// Rotation starting at `epoch`, using the local calendar date
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch, today: None }
    }

    /// Pin "today" to a fixed date
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Word for a given date
    ///
    /// Dates before the epoch wrap around the list instead of failing.
    #[must_use]
    pub fn word_for_date(&self, date: NaiveDate, length: usize) -> Option<Word> {
        let answers = super::answers(length)?;
        if answers.is_empty() {
            return None;
        }
        let days = (date - self.epoch).num_days();
        let index = days.rem_euclid(answers.len() as i64) as usize;
        Word::new(answers[index]).ok()
    }
}

impl TargetWordSource for WordBank {
    fn daily_word(&self, length: usize) -> Option<Word> {
        self.word_for_date(self.today(), length)
    }

    fn random_word(&self, length: usize) -> Option<Word> {
        let answers = super::answers(length)?;
        answers
            .choose(&mut rand::rng())
            .and_then(|w| Word::new(w).ok())
    }

    fn supports(&self, length: usize) -> bool {
        super::answers(length).is_some_and(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS_5, ANSWERS_7};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_is_first_answer() {
        let bank = WordBank::default();
        let word = bank.word_for_date(DEFAULT_EPOCH, 5).unwrap();
        assert_eq!(word.text(), ANSWERS_5[0]);
    }

    #[test]
    fn daily_word_is_deterministic() {
        let bank = WordBank::default().with_today(date(2025, 3, 14));
        assert_eq!(bank.daily_word(6), bank.daily_word(6));
        assert_eq!(bank.daily_word(7).unwrap().len(), 7);
    }

    #[test]
    fn rotation_wraps_around_list() {
        let bank = WordBank::default();
        let wrapped = DEFAULT_EPOCH + chrono::Days::new(ANSWERS_7.len() as u64 + 2);
        assert_eq!(bank.word_for_date(wrapped, 7).unwrap().text(), ANSWERS_7[2]);
    }

    #[test]
    fn dates_before_epoch_wrap_backwards() {
        let bank = WordBank::default();
        let word = bank.word_for_date(date(2023, 12, 31), 5).unwrap();
        assert_eq!(word.text(), ANSWERS_5[ANSWERS_5.len() - 1]);
    }

    #[test]
    fn random_word_comes_from_answers() {
        let bank = WordBank::default();
        for _ in 0..20 {
            let word = bank.random_word(5).unwrap();
            assert!(ANSWERS_5.contains(&word.text()));
        }
    }

    #[test]
    fn unsupported_length() {
        let bank = WordBank::default();
        assert!(bank.daily_word(4).is_none());
        assert!(bank.random_word(9).is_none());
        assert!(!bank.supports(8));
        assert!(bank.supports(6));
    }
}
