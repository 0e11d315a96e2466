//! Daily puzzle command
//!
//! Builds the day's starting board and reports what is already on it.

use crate::config::GameConfig;
use crate::core::{Grid, GridError, Word};
use crate::dictionary::{Lookup, WordChecker};
use crate::engine::{extract_words, generate, seed_for};
use chrono::NaiveDate;

/// The starting state for one day
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub seed: u64,
    pub grid: Grid,
    /// Dictionary words formed by the generated letters
    pub words: Vec<Word>,
    pub best: u32,
}

/// Generate the puzzle for `date`
///
/// `best` is the recorded high score for the day, supplied by the caller.
///
/// # Errors
///
/// Returns an error if the configured board has a zero dimension.
pub fn load_daily<L: Lookup>(
    date: NaiveDate,
    config: &GameConfig,
    checker: &WordChecker<L>,
    best: u32,
) -> Result<DailyPuzzle, GridError> {
    let grid = generate(date, config)?;
    let words = extract_words(&grid, checker);

    Ok(DailyPuzzle {
        date,
        seed: seed_for(date),
        grid,
        words,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    #[test]
    fn daily_puzzle_matches_generator() {
        let config = GameConfig::default();
        let checker = WordChecker::new(WordList::embedded());
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();

        let puzzle = load_daily(date, &config, &checker, 17).unwrap();

        assert_eq!(puzzle.grid, generate(date, &config).unwrap());
        assert_eq!(puzzle.seed, 20_241_105);
        assert_eq!(puzzle.best, 17);
    }

    #[test]
    fn zero_sized_board_is_an_error() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        let checker = WordChecker::new(WordList::default());
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();

        assert!(load_daily(date, &config, &checker, 0).is_err());
    }
}
