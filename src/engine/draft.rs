//! Pending cell edits
//!
//! A `Draft` collects letters typed into editable cells before a move is
//! submitted, then assembles them onto the committed board as a candidate grid.

use crate::core::{Axis, Grid, GridError, Position, normalize_letter};
use std::collections::BTreeMap;

/// Letters typed into cells but not yet submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    edits: BTreeMap<Position, u8>,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter for a cell, replacing any earlier edit there
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` for non-letters.
    pub fn set(&mut self, pos: Position, letter: char) -> Result<(), GridError> {
        let byte = normalize_letter(letter).ok_or(GridError::InvalidLetter(letter))?;
        self.edits.insert(pos, byte);
        Ok(())
    }

    pub fn clear(&mut self, pos: Position) {
        self.edits.remove(&pos);
    }

    pub fn reset(&mut self) {
        self.edits.clear();
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.edits.get(&pos).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Build the candidate grid: edits land only on empty, on-board cells
    #[must_use]
    pub fn assemble(&self, committed: &Grid) -> Grid {
        let mut candidate = committed.clone();
        for (&pos, &letter) in &self.edits {
            if committed.contains(pos) && !committed.is_filled(pos) {
                candidate.place(pos, letter);
            }
        }
        candidate
    }

    /// Draft that writes `letters` from `start` along `axis`
    ///
    /// Cells that already hold a letter are stepped over, so the letters slot
    /// in around existing ones.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` for non-letters and
    /// `GridError::OutOfBounds` if the letters run off the board.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::{Axis, Grid, Position};
    /// use wordgrid::engine::Draft;
    ///
    /// let board = Grid::from_rows(&[".a..."]).unwrap();
    /// let draft = Draft::along(&board, Position::new(0, 0), Axis::Row, "ct").unwrap();
    /// assert_eq!(draft.assemble(&board).to_string(), "CAT..\n");
    /// ```
    pub fn along(committed: &Grid, start: Position, axis: Axis, letters: &str) -> Result<Self, GridError> {
        let mut draft = Self::new();
        let mut pos = start;

        for letter in letters.chars() {
            while committed.is_filled(pos) {
                pos = step(pos, axis);
            }
            if !committed.contains(pos) {
                return Err(GridError::OutOfBounds(pos));
            }
            draft.set(pos, letter)?;
            pos = step(pos, axis);
        }

        Ok(draft)
    }
}

const fn step(pos: Position, axis: Axis) -> Position {
    match axis {
        Axis::Row => Position::new(pos.x + 1, pos.y),
        Axis::Column => Position::new(pos.x, pos.y + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_places_edits() {
        let board = Grid::empty(3, 3).unwrap();
        let mut draft = Draft::new();
        draft.set(Position::new(0, 0), 'c').unwrap();
        draft.set(Position::new(1, 0), 'A').unwrap();

        let candidate = draft.assemble(&board);
        assert_eq!(candidate.to_string(), "CA.\n...\n...\n");
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn edits_on_locked_cells_are_ignored() {
        let board = Grid::from_rows(&["c..", "..."]).unwrap();
        let mut draft = Draft::new();
        draft.set(Position::new(0, 0), 'x').unwrap();
        draft.set(Position::new(1, 0), 'a').unwrap();

        assert_eq!(draft.assemble(&board).to_string(), "CA.\n...\n");
    }

    #[test]
    fn off_board_edits_are_ignored() {
        let board = Grid::empty(2, 2).unwrap();
        let mut draft = Draft::new();
        draft.set(Position::new(5, 5), 'a').unwrap();
        assert_eq!(draft.assemble(&board), board);
    }

    #[test]
    fn set_rejects_non_letters() {
        let mut draft = Draft::new();
        assert_eq!(
            draft.set(Position::new(0, 0), '7'),
            Err(GridError::InvalidLetter('7'))
        );
        assert!(draft.is_empty());
    }

    #[test]
    fn clear_and_reset() {
        let mut draft = Draft::new();
        draft.set(Position::new(0, 0), 'a').unwrap();
        draft.set(Position::new(1, 0), 'b').unwrap();
        draft.clear(Position::new(0, 0));
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.get(Position::new(1, 0)), Some(b'B'));

        draft.reset();
        assert!(draft.is_empty());
    }

    #[test]
    fn along_column_skips_filled() {
        let board = Grid::from_rows(&["...", ".w.", "..."]).unwrap();
        let draft = Draft::along(&board, Position::new(1, 0), Axis::Column, "ol").unwrap();
        assert_eq!(draft.assemble(&board).to_string(), ".O.\n.W.\n.L.\n");
    }

    #[test]
    fn along_runs_off_board() {
        let board = Grid::empty(3, 1).unwrap();
        assert_eq!(
            Draft::along(&board, Position::new(1, 0), Axis::Row, "abc"),
            Err(GridError::OutOfBounds(Position::new(3, 0)))
        );
    }
}
