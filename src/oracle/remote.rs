//! HTTP dictionary client
//!
//! Talks to a free-dictionary style endpoint: `GET <base>/<word>` answers 2xx
//! for known words and 404 for unknown ones.

use super::DictionaryService;
use crate::error::OracleError;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::debug;

/// Public dictionary API used when no URL is configured
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Upper bound on a single lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Blocking client for a remote dictionary
pub struct RemoteDictionary {
    client: Client,
    base_url: String,
}

impl RemoteDictionary {
    /// Create a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    /// Returns `OracleError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { client, base_url })
    }

    /// Client for the public API with the default timeout
    ///
    /// # Errors
    /// Returns `OracleError::Network` if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, OracleError> {
        Self::new(DEFAULT_DICTIONARY_URL, DEFAULT_TIMEOUT)
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}{}", self.base_url, word.trim().to_ascii_lowercase())
    }
}

impl DictionaryService for RemoteDictionary {
    fn lookup(&self, word: &str) -> Result<bool, OracleError> {
        let url = self.entry_url(word);
        debug!(url = %url, "dictionary lookup");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, concat!("wordle_game/", env!("CARGO_PKG_VERSION")))
            .send()?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(OracleError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let remote = RemoteDictionary::new("http://localhost:9/words", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(remote.entry_url(" Crane "), "http://localhost:9/words/crane");
    }

    #[test]
    fn default_url_is_kept_as_is() {
        let remote = RemoteDictionary::with_defaults().unwrap();
        assert_eq!(
            remote.entry_url("SLATE"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/slate"
        );
    }

    #[test]
    fn unreachable_server_is_an_error() {
        // Port 9 (discard) is closed on test machines
        let remote =
            RemoteDictionary::new("http://127.0.0.1:9/", Duration::from_millis(500)).unwrap();
        assert!(remote.lookup("crane").is_err());
    }

    #[test]
    fn silent_server_times_out_and_falls_back_to_word_list() {
        use crate::oracle::{FallbackOracle, WordListOracle, WordOracle};
        use std::net::TcpListener;
        use std::time::Instant;

        // Accepts connections but never answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let mut open = Vec::new();
            for stream in listener.incoming().flatten() {
                open.push(stream);
            }
        });

        let remote =
            RemoteDictionary::new(format!("http://{addr}/"), Duration::from_millis(300)).unwrap();
        let remote: Box<dyn DictionaryService> = Box::new(remote);
        let oracle = FallbackOracle::new(Some(remote), WordListOracle::from_words(["CRANE"]));

        let started = Instant::now();
        assert!(oracle.is_valid_word("crane"));
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
