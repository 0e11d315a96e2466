//! Word list loading
//!
//! Builds an in-memory [`WordList`] from a file or from the embedded list.

use super::{LookupError, Lookup, MIN_WORD_LEN, WORDS};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// In-memory dictionary of uppercase words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS)
    }

    /// Build a list from string slices
    ///
    /// Entries are uppercased; blanks, entries shorter than three letters and
    /// entries with non-letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::dictionary::WordList;
    ///
    /// let list = WordList::from_slice(&["cat", "ox", "dog"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("CAT"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        slice.iter().copied().collect()
    }

    /// Load words from a newline-separated file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use wordgrid::dictionary::WordList;
    ///
    /// let list = WordList::load_from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(content.lines().collect())
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
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

impl<'s> FromIterator<&'s str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(str::trim)
            .filter(|w| w.len() >= MIN_WORD_LEN && w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
            .collect();
        Self { words }
    }
}

impl Lookup for WordList {
    fn lookup(&self, word: &str) -> Result<(), LookupError> {
        if self.contains(word) {
            Ok(())
        } else {
            Err(LookupError::NotFound)
        }
    }
}
