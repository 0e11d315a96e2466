//! Word scoring
//!
//! The base rule awards one point per letter. [`Scoring`] is the seam for
//! other rules (positional multipliers and the like): implementors see the
//! whole [`Word`], including where it sits on the board.

use crate::core::Word;

/// Points earned by one newly formed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub word: String,
    pub points: u32,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, points: u32) -> Self {
        Self {
            word: word.into(),
            points,
        }
    }
}

/// Rule that turns new words into points
pub trait Scoring {
    /// Points for a single word
    fn points(&self, word: &Word) -> u32;

    /// One entry per word, in input order
    fn score(&self, words: &[Word]) -> Vec<ScoreEntry> {
        words
            .iter()
            .map(|word| ScoreEntry::new(word.text(), self.points(word)))
            .collect()
    }
}

/// One point per letter
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthScoring;

impl Scoring for LengthScoring {
    fn points(&self, word: &Word) -> u32 {
        word.letter_count() as u32
    }
}

/// Sum of points across entries
#[must_use]
pub fn total<'a>(entries: impl IntoIterator<Item = &'a ScoreEntry>) -> u32 {
    entries.into_iter().map(|e| e.points).sum()
}
