//! Dictionary lookup and validity checking
//!
//! The engine only ever asks one question of a dictionary: "is this a word?".
//! [`Lookup`] is that boundary; [`WordChecker`] layers the minimum-length rule
//! and a per-run [`DictionaryCache`] on top of it.

mod cache;
mod embedded;
pub mod loader;

pub use cache::{DictionaryCache, WordChecker};
pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordList;

use std::fmt;

/// Minimum number of letters for a run to count as a word
pub const MIN_WORD_LEN: usize = 3;

/// Why a lookup did not confirm a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The dictionary answered and does not know the word
    NotFound,
    /// The dictionary could not answer
    Unavailable(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Word not found"),
            Self::Unavailable(reason) => write!(f, "Dictionary unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// External dictionary boundary
///
/// `word` is always passed uppercase. `Ok(())` means the word is recognized;
/// any error is treated by callers as "not a word".
pub trait Lookup: Send + Sync {
    /// Look up a single word
    ///
    /// # Errors
    /// Returns `LookupError::NotFound` for unknown words and
    /// `LookupError::Unavailable` when the source cannot be consulted.
    fn lookup(&self, word: &str) -> Result<(), LookupError>;
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, word: &str) -> Result<(), LookupError> {
        (**self).lookup(word)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    fn lookup(&self, word: &str) -> Result<(), LookupError> {
        (**self).lookup(word)
    }
}
