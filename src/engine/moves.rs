//! Move validation
//!
//! A move is a previous grid and a candidate grid. It is legal when the
//! candidate only fills empty cells, every filled cell lies in one row or one
//! column, and any cell between the first and last new letter that was not
//! filled by the move already held a letter.

use crate::core::{Grid, Position};
use log::debug;
use std::fmt;

/// Shape of a legal placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One letter; lies on both axes
    Single(Position),
    /// Letters along row `y`, spanning columns `from..=to`
    Row { y: usize, from: usize, to: usize },
    /// Letters along column `x`, spanning rows `from..=to`
    Column { x: usize, from: usize, to: usize },
}

/// Why a candidate grid is not a legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    DimensionMismatch,
    NoChange,
    /// A previously placed letter was replaced by another
    Overwrites(Position),
    /// A previously placed letter was removed
    Clears(Position),
    /// New letters span more than one row and more than one column
    NotInLine,
    /// An empty cell sits between new letters
    Gap(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch => write!(f, "Board size does not match"),
            Self::NoChange => write!(f, "No letters were placed"),
            Self::Overwrites(pos) => write!(f, "Letter at {pos} is already placed"),
            Self::Clears(pos) => write!(f, "Letter at {pos} cannot be removed"),
            Self::NotInLine => write!(f, "Letters must be placed in a single row or column"),
            Self::Gap(pos) => write!(f, "Empty cell at {pos} breaks up the placement"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Validate a move and describe its shape
///
/// # Errors
/// Returns the first `MoveError` that makes the move illegal.
///
/// # Examples
/// ```
/// use wordgrid::core::Grid;
/// use wordgrid::engine::{MoveError, validate_move};
///
/// let before = Grid::from_rows(&[".....", "....."]).unwrap();
/// let straight = Grid::from_rows(&["cat..", "....."]).unwrap();
/// let gapped = Grid::from_rows(&["c.t..", "....."]).unwrap();
///
/// assert!(validate_move(&before, &straight).is_ok());
/// assert!(matches!(validate_move(&before, &gapped), Err(MoveError::Gap(_))));
/// ```
pub fn validate_move(previous: &Grid, candidate: &Grid) -> Result<Placement, MoveError> {
    let changed = previous
        .diff(candidate)
        .map_err(|_| MoveError::DimensionMismatch)?;

    let (first, last) = match (changed.first(), changed.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(MoveError::NoChange),
    };

    for &pos in &changed {
        match (previous.get(pos), candidate.get(pos)) {
            (Some(_), Some(_)) => return Err(MoveError::Overwrites(pos)),
            (Some(_), None) => return Err(MoveError::Clears(pos)),
            _ => {}
        }
    }

    if changed.len() == 1 {
        return Ok(Placement::Single(first));
    }

    // `changed` is row-major, so the extremes are first and last
    let placement = if changed.iter().all(|p| p.y == first.y) {
        Placement::Row {
            y: first.y,
            from: first.x,
            to: last.x,
        }
    } else if changed.iter().all(|p| p.x == first.x) {
        Placement::Column {
            x: first.x,
            from: first.y,
            to: last.y,
        }
    } else {
        return Err(MoveError::NotInLine);
    };

    if let Some(gap) = span(placement).find(|&p| !candidate.is_filled(p)) {
        return Err(MoveError::Gap(gap));
    }

    Ok(placement)
}

/// Every position covered by a placement, first to last
fn span(placement: Placement) -> Box<dyn Iterator<Item = Position>> {
    match placement {
        Placement::Single(pos) => Box::new(std::iter::once(pos)),
        Placement::Row { y, from, to } => Box::new((from..=to).map(move |x| Position::new(x, y))),
        Placement::Column { x, from, to } => {
            Box::new((from..=to).map(move |y| Position::new(x, y)))
        }
    }
}

/// Boolean form of [`validate_move`]
#[must_use]
pub fn is_legal(previous: &Grid, candidate: &Grid) -> bool {
    match validate_move(previous, candidate) {
        Ok(_) => true,
        Err(reason) => {
            debug!("Rejected move: {reason}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn single_letter_is_legal() {
        let before = grid(&["...", "...", "..."]);
        let after = grid(&["...", ".x.", "..."]);

        assert_eq!(
            validate_move(&before, &after),
            Ok(Placement::Single(Position::new(1, 1)))
        );
    }

    #[test]
    fn unchanged_grid_is_rejected() {
        let before = grid(&["cat", "...", "..."]);
        assert_eq!(validate_move(&before, &before), Err(MoveError::NoChange));
        assert!(!is_legal(&before, &before));
    }

    #[test]
    fn contiguous_row_is_legal() {
        let before = grid(&[".......", "......."]);
        let after = grid(&["cat....", "......."]);

        assert_eq!(
            validate_move(&before, &after),
            Ok(Placement::Row { y: 0, from: 0, to: 2 })
        );
    }

    #[test]
    fn contiguous_column_is_legal() {
        let before = grid(&["...", "...", "..."]);
        let after = grid(&["..o", "..w", "..l"]);

        assert_eq!(
            validate_move(&before, &after),
            Ok(Placement::Column { x: 2, from: 0, to: 2 })
        );
    }

    #[test]
    fn diagonal_cells_are_not_in_line() {
        let before = grid(&["...", "...", "..."]);
        let after = grid(&["a..", "...", "..b"]);

        assert_eq!(validate_move(&before, &after), Err(MoveError::NotInLine));
    }

    #[test]
    fn l_shape_is_not_in_line() {
        let before = grid(&["...", "...", "..."]);
        let after = grid(&["ab.", "c..", "..."]);

        assert_eq!(validate_move(&before, &after), Err(MoveError::NotInLine));
    }

    #[test]
    fn empty_gap_is_illegal() {
        let before = grid(&["....."]);
        let after = grid(&["ca.s."]);

        assert_eq!(
            validate_move(&before, &after),
            Err(MoveError::Gap(Position::new(2, 0)))
        );
    }

    #[test]
    fn prefilled_gap_is_legal() {
        let before = grid(&["..t.."]);
        let after = grid(&["cats."]);

        assert_eq!(
            validate_move(&before, &after),
            Ok(Placement::Row { y: 0, from: 0, to: 3 })
        );
    }

    #[test]
    fn column_gap_is_illegal() {
        let before = grid(&[".", ".", ".", "."]);
        let after = grid(&["a", ".", "b", "."]);

        assert_eq!(
            validate_move(&before, &after),
            Err(MoveError::Gap(Position::new(0, 1)))
        );
    }

    #[test]
    fn overwriting_is_illegal() {
        let before = grid(&["cat"]);
        let after = grid(&["cot"]);

        assert_eq!(
            validate_move(&before, &after),
            Err(MoveError::Overwrites(Position::new(1, 0)))
        );
    }

    #[test]
    fn clearing_is_illegal() {
        let before = grid(&["cat"]);
        let after = grid(&["ca."]);

        assert_eq!(
            validate_move(&before, &after),
            Err(MoveError::Clears(Position::new(2, 0)))
        );
    }

    #[test]
    fn mismatched_dimensions() {
        let before = grid(&["...", "..."]);
        let after = grid(&["....", "...."]);

        assert_eq!(
            validate_move(&before, &after),
            Err(MoveError::DimensionMismatch)
        );
    }

    #[test]
    fn error_messages_name_positions() {
        let message = MoveError::Gap(Position::new(3, 1)).to_string();
        assert!(message.contains("(3, 1)"));
    }
}
