//! Best score per calendar day
//!
//! All days live in one JSON object under a single key, read on every `get`
//! and rewritten whole on every improving `set`. Data that cannot be parsed is
//! treated as an empty record and replaced by the next successful write.

use super::{KeyValueStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::BTreeMap;

/// Store key holding the day -> score map
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Key for a calendar day, in en-US short form (`M/D/YYYY`)
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Monotonic per-day record of the best score
#[derive(Debug, Clone)]
pub struct HighScoreStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HighScoreStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Best score recorded for `date`, or 0
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> u32 {
        self.records().get(&day_key(date)).copied().unwrap_or(0)
    }

    /// Record `score` for `date` if it beats the stored best
    ///
    /// Returns whether the record changed.
    ///
    /// # Errors
    /// Returns `StoreError` if the updated map cannot be written.
    pub fn set(&mut self, date: NaiveDate, score: u32) -> Result<bool, StoreError> {
        let mut records = self.records();
        let key = day_key(date);
        let current = records.get(&key).copied().unwrap_or(0);

        if score <= current {
            return Ok(false);
        }

        records.insert(key, score);
        let encoded = serde_json::to_string(&records)?;
        self.store.set(HIGH_SCORE_KEY, &encoded)?;
        info!("New best for {}: {score} (was {current})", day_key(date));
        Ok(true)
    }

    /// Every recorded day and its best score
    #[must_use]
    pub fn records(&self) -> BTreeMap<String, u32> {
        let Some(raw) = self.store.get(HIGH_SCORE_KEY) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("Ignoring unreadable high score data: {err}");
            BTreeMap::new()
        })
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(day()), "7/4/2024");
        assert_eq!(day_key(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()), "12/25/2025");
    }

    #[test]
    fn missing_day_is_zero() {
        let store = HighScoreStore::new(MemoryStore::new());
        assert_eq!(store.get(day()), 0);
    }

    #[test]
    fn scores_never_decrease() {
        let mut store = HighScoreStore::new(MemoryStore::new());

        assert!(store.set(day(), 50).unwrap());
        assert!(!store.set(day(), 30).unwrap());
        assert_eq!(store.get(day()), 50);

        assert!(store.set(day(), 80).unwrap());
        assert_eq!(store.get(day()), 80);
    }

    #[test]
    fn days_are_independent() {
        let mut store = HighScoreStore::new(MemoryStore::new());
        let other = day().succ_opt().unwrap();

        store.set(day(), 20).unwrap();
        store.set(other, 5).unwrap();

        assert_eq!(store.get(day()), 20);
        assert_eq!(store.get(other), 5);
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn zero_score_is_not_written() {
        let mut store = HighScoreStore::new(MemoryStore::new());
        assert!(!store.set(day(), 0).unwrap());
        assert_eq!(store.store().get(HIGH_SCORE_KEY), None);
    }

    #[test]
    fn stored_as_json_map() {
        let mut store = HighScoreStore::new(MemoryStore::new());
        store.set(day(), 12).unwrap();
        assert_eq!(
            store.into_inner().get(HIGH_SCORE_KEY).as_deref(),
            Some("{\"7/4/2024\":12}")
        );
    }

    #[test]
    fn corrupt_data_reads_as_empty() {
        let mut raw = MemoryStore::new();
        raw.set(HIGH_SCORE_KEY, "{not json").unwrap();
        let mut store = HighScoreStore::new(raw);

        assert_eq!(store.get(day()), 0);
        assert!(store.records().is_empty());

        // Next write replaces the bad data
        assert!(store.set(day(), 9).unwrap());
        assert_eq!(store.get(day()), 9);
    }

    #[test]
    fn wrong_shape_reads_as_empty() {
        let mut raw = MemoryStore::new();
        raw.set(HIGH_SCORE_KEY, "{\"7/4/2024\": -3}").unwrap();
        let store = HighScoreStore::new(raw);
        assert_eq!(store.get(day()), 0);
    }

    #[test]
    fn file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = HighScoreStore::new(FileStore::new(dir.path()));
            store.set(day(), 42).unwrap();
        }
        let store = HighScoreStore::new(FileStore::new(dir.path()));
        assert_eq!(store.get(day()), 42);
    }
}
