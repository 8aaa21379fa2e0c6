use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Session-lifetime memo of remote lookup results. Verdicts and definitions
/// are keyed by lowercase word and never evicted; a board's worth of words
/// stays small.
#[derive(Debug, Default)]
pub(crate) struct LexiconCache {
    verdicts: Mutex<HashMap<String, bool>>,
    definitions: Mutex<HashMap<String, String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl LexiconCache {
    pub(crate) fn verdict(&self, word: &str) -> Option<bool> {
        lock(&self.verdicts).get(word).copied()
    }

    pub(crate) fn record_verdict(&self, word: &str, valid: bool) {
        lock(&self.verdicts).insert(word.to_owned(), valid);
    }

    pub(crate) fn definition(&self, word: &str) -> Option<String> {
        lock(&self.definitions).get(word).cloned()
    }

    pub(crate) fn record_definition(&self, word: &str, definition: String) {
        lock(&self.definitions).insert(word.to_owned(), definition);
    }

    pub(crate) fn clear(&self) {
        lock(&self.verdicts).clear();
        lock(&self.definitions).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_round_trip() {
        let cache = LexiconCache::default();
        assert_eq!(cache.verdict("cat"), None);
        cache.record_verdict("cat", true);
        cache.record_verdict("xyzzy", false);
        assert_eq!(cache.verdict("cat"), Some(true));
        assert_eq!(cache.verdict("xyzzy"), Some(false));
    }

    #[test]
    fn clear_forgets_everything() {
        let cache = LexiconCache::default();
        cache.record_verdict("cat", true);
        cache.record_definition("cat", "a small domesticated feline".into());
        cache.clear();
        assert_eq!(cache.verdict("cat"), None);
        assert_eq!(cache.definition("cat"), None);
    }
}
