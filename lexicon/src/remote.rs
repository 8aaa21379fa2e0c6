use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Serializes remote lookups and spaces them at least `min_interval` apart.
/// Callers awaiting `acquire` queue on the mutex, so bursts of submissions
/// drain one request at a time instead of hammering the API.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
        }
    }

    pub(crate) async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                tokio::time::sleep(ready_at - now).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// What the dictionary said about a word. A malformed or error response body
/// on a 2xx status is treated as `NotFound` rather than surfaced; only
/// transport failures bubble up as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RemoteOutcome {
    Found { definition: Option<String> },
    NotFound,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Deserialize)]
struct Definition {
    #[serde(default)]
    definition: String,
}

/// One GET against the dictionary API. The endpoint follows the
/// dictionaryapi.dev shape: `{endpoint}/{word}` returning a JSON array of
/// entries on success and a non-2xx status for unknown words.
pub(crate) async fn lookup(
    client: &reqwest::Client,
    endpoint: &str,
    word: &str,
) -> Result<RemoteOutcome, LookupError> {
    let url = format!("{}/{word}", endpoint.trim_end_matches('/'));
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Ok(RemoteOutcome::NotFound);
    }

    let entries: Vec<Entry> = match response.json().await {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("unparseable dictionary response for {word:?}: {err}");
            return Ok(RemoteOutcome::NotFound);
        }
    };

    if entries.is_empty() {
        return Ok(RemoteOutcome::NotFound);
    }

    let definition = entries
        .iter()
        .flat_map(|entry| &entry.meanings)
        .flat_map(|meaning| &meaning.definitions)
        .map(|d| d.definition.trim())
        .find(|text| !text.is_empty())
        .map(str::to_owned);

    Ok(RemoteOutcome::Found { definition })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn limiter_spaces_consecutive_acquires() {
        let limiter = RateLimiter::new(Duration::from_millis(500));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn first_acquire_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        let start = std::time::Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
