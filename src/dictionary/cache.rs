//! Cached word validity checks
//!
//! Word validity never changes, so every resolved answer is kept for the life
//! of the checker. Racing writers for the same word store the same value.

use super::{Lookup, LookupError, MIN_WORD_LEN};
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};

/// Resolved validity answers, keyed by uppercase word
#[derive(Debug, Default)]
pub struct DictionaryCache {
    entries: RwLock<FxHashMap<String, bool>>,
}

impl DictionaryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Previously resolved answer for `word`, if any
    #[must_use]
    pub fn get(&self, word: &str) -> Option<bool> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
            .copied()
    }

    /// Record an answer (idempotent)
    pub fn insert(&self, word: String, valid: bool) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word, valid);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dictionary lookups with a minimum length rule and caching
///
/// Shared by reference across a session; all methods take `&self`.
#[derive(Debug)]
pub struct WordChecker<L: Lookup> {
    lookup: L,
    cache: DictionaryCache,
}

impl<L: Lookup> WordChecker<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: DictionaryCache::new(),
        }
    }

    /// Check a single word
    ///
    /// Words shorter than three letters are rejected without a lookup. Cache
    /// hits never reach the dictionary. Lookup failures count as invalid.
    pub fn is_valid_word(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LEN {
            return false;
        }

        let key = word.to_ascii_uppercase();
        if let Some(valid) = self.cache.get(&key) {
            return valid;
        }

        debug!("Dictionary cache miss for {key}");
        let valid = match self.lookup.lookup(&key) {
            Ok(()) => true,
            Err(LookupError::NotFound) => false,
            Err(err) => {
                warn!("Lookup for {key} failed: {err}");
                false
            }
        };
        self.cache.insert(key, valid);
        valid
    }

    /// Check several words concurrently
    ///
    /// Results come back in input order regardless of completion order.
    pub fn validate_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<bool> {
        words
            .par_iter()
            .map(|w| self.is_valid_word(w.as_ref()))
            .collect()
    }

    #[must_use]
    pub const fn cache(&self) -> &DictionaryCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and knows a fixed set of words
    struct CountingLookup {
        inner: WordList,
        calls: AtomicUsize,
    }

    impl CountingLookup {
        fn new(words: &[&str]) -> Self {
            Self {
                inner: WordList::from_slice(words),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Lookup for CountingLookup {
        fn lookup(&self, word: &str) -> Result<(), LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.lookup(word)
        }
    }

    struct BrokenLookup;

    impl Lookup for BrokenLookup {
        fn lookup(&self, _word: &str) -> Result<(), LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn short_words_skip_lookup() {
        let lookup = CountingLookup::new(&["cat"]);
        let checker = WordChecker::new(&lookup);

        assert!(!checker.is_valid_word("AT"));
        assert!(!checker.is_valid_word(""));
        assert_eq!(lookup.calls(), 0);
        assert!(checker.cache().is_empty());
    }

    #[test]
    fn cache_hit_skips_lookup() {
        let lookup = CountingLookup::new(&["cat"]);
        let checker = WordChecker::new(&lookup);

        assert!(checker.is_valid_word("CAT"));
        assert!(checker.is_valid_word("CAT"));
        assert!(!checker.is_valid_word("CAB"));
        assert!(!checker.is_valid_word("CAB"));

        assert_eq!(lookup.calls(), 2);
        assert_eq!(checker.cache().len(), 2);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lookup = CountingLookup::new(&["cat"]);
        let checker = WordChecker::new(&lookup);

        assert!(checker.is_valid_word("cat"));
        assert!(checker.is_valid_word("Cat"));
        assert_eq!(lookup.calls(), 1);
        assert_eq!(checker.cache().get("CAT"), Some(true));
    }

    #[test]
    fn failures_mean_invalid() {
        let checker = WordChecker::new(BrokenLookup);
        assert!(!checker.is_valid_word("CAT"));
        assert_eq!(checker.cache().get("CAT"), Some(false));
    }

    #[test]
    fn validate_all_preserves_order() {
        let lookup = CountingLookup::new(&["cat", "dog", "owl"]);
        let checker = WordChecker::new(&lookup);

        let results = checker.validate_all(&["DOG", "XYZ", "OWL", "CA", "CAT"]);
        assert_eq!(results, vec![true, false, true, false, true]);
        assert_eq!(lookup.calls(), 4);
    }

    #[test]
    fn cache_insert_is_idempotent() {
        let cache = DictionaryCache::new();
        cache.insert("CAT".to_string(), true);
        cache.insert("CAT".to_string(), true);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("CAT"), Some(true));
        assert_eq!(cache.get("DOG"), None);
    }
}
