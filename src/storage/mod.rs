//! Persistent state
//!
//! A minimal string key-value boundary ([`KeyValueStore`]) with in-memory and
//! on-disk implementations, and the [`HighScoreStore`] built on top of it.

mod file;
mod highscore;
mod memory;

pub use file::FileStore;
pub use highscore::{HIGH_SCORE_KEY, HighScoreStore, day_key};
pub use memory::MemoryStore;

use std::fmt;
use std::io;

/// Error type for store writes
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to write store: {err}"),
            Self::Serialize(err) => write!(f, "Failed to encode store data: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// String-keyed storage of string values
pub trait KeyValueStore {
    /// Current value for `key`; unreadable values read as absent
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
