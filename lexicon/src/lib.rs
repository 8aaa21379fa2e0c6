//! Two-tier word validation for the puzzle engine.
//!
//! The offline tier is a static set of common English words that answers
//! instantly. Everything else goes to a dictionary web API through a
//! rate-limited client, and every remote answer is cached so each distinct
//! word costs at most one request per session.

use std::time::Duration;

pub use remote::LookupError;

use cache::LexiconCache;
use remote::{RateLimiter, RemoteOutcome};
use words::common_words;

mod cache;
mod remote;
mod words;

/// Words below this length are rejected outright. Two-letter words are
/// allowed through validation even though the scoring tiers value them at
/// zero; that gap belongs to scoring, not to the lexicon.
pub const MIN_WORD_LEN: usize = 2;

const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Base URL; the word is appended as a path segment.
    pub endpoint: String,
    /// Minimum spacing between remote lookups.
    pub min_request_interval: Duration,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
        }
    }
}

/// Answer available without touching the network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncVerdict {
    Valid,
    Invalid,
    /// Not decidable offline; `check` must consult the remote dictionary.
    Unknown,
}

/// Submission-level verdict combining validity with session bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// Needs a remote lookup before it can be accepted.
    Pending,
    /// Already accepted this level; valid but worth nothing.
    Duplicate,
}

/// The word validation service. Cheap to share behind an `Arc`; all interior
/// state is synchronized.
#[derive(Debug)]
pub struct Lexicon {
    client: reqwest::Client,
    endpoint: String,
    limiter: RateLimiter,
    cache: LexiconCache,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(LexiconConfig::default())
    }
}

impl Lexicon {
    pub fn new(config: LexiconConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint,
            limiter: RateLimiter::new(config.min_request_interval),
            cache: LexiconCache::default(),
        }
    }

    /// Offline tiers only: length gate, then the cache of settled remote
    /// answers, then the static common-word set. Static hits are not written
    /// to the cache; the set already answers them at the same cost.
    pub fn check_sync(&self, word: &str) -> SyncVerdict {
        let word = word.to_ascii_lowercase();
        if word.chars().count() < MIN_WORD_LEN {
            return SyncVerdict::Invalid;
        }
        if let Some(valid) = self.cache.verdict(&word) {
            return if valid {
                SyncVerdict::Valid
            } else {
                SyncVerdict::Invalid
            };
        }
        if common_words().contains(word.as_str()) {
            return SyncVerdict::Valid;
        }
        SyncVerdict::Unknown
    }

    /// Full validation. Resolves offline when possible, otherwise waits its
    /// turn on the rate limiter and asks the remote dictionary, caching the
    /// answer either way.
    ///
    /// A transport failure is treated as "not a word" and cached as such, so
    /// a flaky network degrades the game to the offline tier instead of
    /// blocking submissions.
    pub async fn check(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        match self.check_sync(&word) {
            SyncVerdict::Valid => return true,
            SyncVerdict::Invalid => return false,
            SyncVerdict::Unknown => {}
        }

        self.limiter.acquire().await;
        // Another task may have settled the word while we waited.
        if let Some(valid) = self.cache.verdict(&word) {
            return valid;
        }

        let valid = match remote::lookup(&self.client, &self.endpoint, &word).await {
            Ok(RemoteOutcome::Found { definition }) => {
                if let Some(definition) = definition {
                    self.cache.record_definition(&word, definition);
                }
                true
            }
            Ok(RemoteOutcome::NotFound) => false,
            Err(err) => {
                log::warn!("dictionary lookup for {word:?} failed: {err}");
                false
            }
        };
        self.cache.record_verdict(&word, valid);
        valid
    }

    /// Submission verdict for the game loop. Never touches the network; a
    /// `Pending` result tells the caller to run [`check`](Self::check).
    pub fn verdict(&self, word: &str, already_found: bool) -> Verdict {
        match self.check_sync(word) {
            SyncVerdict::Invalid => Verdict::Invalid,
            SyncVerdict::Valid if already_found => Verdict::Duplicate,
            SyncVerdict::Valid => Verdict::Valid,
            SyncVerdict::Unknown => Verdict::Pending,
        }
    }

    /// Definition of a word, if the dictionary supplies one. Served from the
    /// cache when the word has already been looked up; otherwise resolves the
    /// word first. Offline-tier words carry no definition.
    pub async fn definition(&self, word: &str) -> Option<String> {
        let word = word.to_ascii_lowercase();
        if let Some(definition) = self.cache.definition(&word) {
            return Some(definition);
        }
        if self.check_sync(&word) == SyncVerdict::Unknown {
            self.check(&word).await;
        }
        self.cache.definition(&word)
    }

    /// Drops all cached verdicts and definitions.
    pub fn clear(&self) {
        self.cache.clear();
    }
}
