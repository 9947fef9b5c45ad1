//! Word validity oracles
//!
//! Decides whether a submitted string is an acceptable dictionary word. The
//! game only sees [`WordOracle`], which always answers with a plain bool: a
//! remote dictionary that fails or times out is replaced by the local list.

mod remote;

pub use remote::{DEFAULT_DICTIONARY_URL, DEFAULT_TIMEOUT, RemoteDictionary};

use crate::core::Word;
use crate::error::OracleError;
use crate::wordlists::{SUPPORTED_LENGTHS, allowed};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Answers "is this a real word" without ever failing
pub trait WordOracle: Send + Sync {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// A dictionary lookup that may fail
pub trait DictionaryService: Send + Sync {
    /// # Errors
    /// Returns `OracleError` when the service cannot give a definite answer.
    fn lookup(&self, word: &str) -> Result<bool, OracleError>;
}

/// Membership check against a word list, case-insensitive
#[derive(Debug, Clone, Default)]
pub struct WordListOracle {
    words: FxHashSet<String>,
}

impl WordListOracle {
    /// Oracle over the embedded allowed lists of every supported length
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(
            SUPPORTED_LENGTHS
                .iter()
                .filter_map(|&n| allowed(n))
                .flatten()
                .copied(),
        )
    }

    /// Oracle over an arbitrary list; invalid entries are skipped
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// Add more accepted words
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words.into_iter().map(|w| w.text().to_string()));
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for WordListOracle {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Remote dictionary with a local fallback and a per-word cache
///
/// A remote "not a word" is final. A remote error (timeout, network failure,
/// unexpected status) falls back to the local list without retrying. Every
/// verdict is cached by uppercase word for the lifetime of the oracle.
pub struct FallbackOracle {
    remote: Option<Box<dyn DictionaryService>>,
    fallback: WordListOracle,
    cache: Mutex<FxHashMap<String, bool>>,
}

impl FallbackOracle {
    #[must_use]
    pub fn new(remote: Option<Box<dyn DictionaryService>>, fallback: WordListOracle) -> Self {
        Self {
            remote,
            fallback,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Local list only
    #[must_use]
    pub fn offline(fallback: WordListOracle) -> Self {
        Self::new(None, fallback)
    }

    fn cached(&self, key: &str) -> Option<bool> {
        self.cache.lock().ok()?.get(key).copied()
    }

    fn remember(&self, key: String, valid: bool) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, valid);
        }
    }

    fn resolve(&self, key: &str) -> bool {
        let Some(remote) = &self.remote else {
            return self.fallback.contains(key);
        };
        match remote.lookup(key) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(word = key, "dictionary unavailable, using local list: {e}");
                self.fallback.contains(key)
            }
        }
    }
}

impl WordOracle for FallbackOracle {
    fn is_valid_word(&self, word: &str) -> bool {
        let key = word.trim().to_ascii_uppercase();
        if let Some(valid) = self.cached(&key) {
            debug!(word = %key, valid, "dictionary cache hit");
            return valid;
        }
        let valid = self.resolve(&key);
        debug!(word = %key, valid, "dictionary verdict");
        self.remember(key, valid);
        valid
    }
}
