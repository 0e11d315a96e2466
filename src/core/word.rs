//! Words found on the board
//!
//! A `Word` is a run of letters together with where it sits on the grid, so a
//! scorer or renderer can map it back to cells.

use super::Position;
use std::fmt;

/// Direction a word runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// Left to right along a row
    Row,
    /// Top to bottom along a column
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "across"),
            Self::Column => write!(f, "down"),
        }
    }
}

/// A run of letters extracted from a grid
///
/// Two words are equal only if their text, axis and start position all match:
/// the same spelling at another spot on the board is a different word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    axis: Axis,
    start: Position,
}

impl Word {
    /// Create a word starting at `start` and running along `axis`
    ///
    /// The text is normalized to uppercase.
    #[must_use]
    pub fn new(text: impl Into<String>, axis: Axis, start: Position) -> Self {
        Self {
            text: text.into().to_ascii_uppercase(),
            axis,
            start,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Position of the last letter
    #[must_use]
    pub fn end(&self) -> Position {
        let offset = self.letter_count().saturating_sub(1);
        match self.axis {
            Axis::Row => Position::new(self.start.x + offset, self.start.y),
            Axis::Column => Position::new(self.start.x, self.start.y + offset),
        }
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.len()
    }

    /// Positions covered by the word, in reading order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, axis) = (self.start, self.axis);
        (0..self.letter_count()).map(move |i| match axis {
            Axis::Row => Position::new(start.x + i, start.y),
            Axis::Column => Position::new(start.x, start.y + i),
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_text_uppercased() {
        let word = Word::new("cat", Axis::Row, Position::new(0, 0));
        assert_eq!(word.text(), "CAT");
        assert_eq!(word.letter_count(), 3);
    }

    #[test]
    fn row_word_end_and_positions() {
        let word = Word::new("DOGS", Axis::Row, Position::new(2, 5));
        assert_eq!(word.end(), Position::new(5, 5));
        let positions: Vec<Position> = word.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(2, 5),
                Position::new(3, 5),
                Position::new(4, 5),
                Position::new(5, 5)
            ]
        );
    }

    #[test]
    fn column_word_end() {
        let word = Word::new("ANT", Axis::Column, Position::new(1, 0));
        assert_eq!(word.end(), Position::new(1, 2));
    }

    #[test]
    fn same_text_different_location_differs() {
        let a = Word::new("CAT", Axis::Row, Position::new(0, 0));
        let b = Word::new("CAT", Axis::Row, Position::new(0, 3));
        let c = Word::new("CAT", Axis::Column, Position::new(0, 0));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Word::new("cat", Axis::Row, Position::new(0, 0)));
    }

    #[test]
    fn display_shows_text() {
        let word = Word::new("owl", Axis::Column, Position::new(0, 0));
        assert_eq!(format!("{word}"), "OWL");
        assert_eq!(format!("{}", word.axis()), "down");
    }
}
