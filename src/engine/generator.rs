//! Daily board generation
//!
//! Every calendar date maps to exactly one starting board, so everyone playing
//! on the same day sees the same puzzle.
//!
//! # Algorithm
//! The stream is ChaCha8 (`rand_chacha`) seeded with the date written as the
//! integer `YYYYMMDD`. All draws are `u32` ranges so results do not depend on
//! pointer width. In order:
//! 1. letter count `n` from `seed_letters` (2..=6 by default)
//! 2. `n` times: column, row, alphabet index
//! 3. if the letter is hard (Q, X, Z by default), one more alphabet index
//!    replaces it; no extra position is drawn
//!
//! Later placements overwrite earlier ones at the same cell.

use crate::config::GameConfig;
use crate::core::{Grid, GridError, Position};
use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Seed derived from a calendar date (`YYYYMMDD`)
#[must_use]
pub fn seed_for(date: NaiveDate) -> u64 {
    let digits = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    digits as u64
}

/// Generate the starting board for `date`
///
/// # Errors
/// Returns `GridError::ZeroDimension` if the configured board is empty.
pub fn generate(date: NaiveDate, config: &GameConfig) -> Result<Grid, GridError> {
    let mut grid = Grid::empty(config.width, config.height)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed_for(date));

    let count = if config.seed_letters.is_empty() {
        0
    } else {
        rng.random_range(config.seed_letters.clone())
    };
    for _ in 0..count {
        let x = rng.random_range(0..config.width as u32) as usize;
        let y = rng.random_range(0..config.height as u32) as usize;
        let mut letter = draw_letter(&mut rng);
        if config.is_hard(letter) {
            letter = draw_letter(&mut rng);
        }
        grid.place(Position::new(x, y), letter);
    }

    Ok(grid)
}

fn draw_letter(rng: &mut ChaCha8Rng) -> u8 {
    ALPHABET[rng.random_range(0..ALPHABET.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_is_date_digits() {
        assert_eq!(seed_for(date(2024, 3, 9)), 20_240_309);
        assert_eq!(seed_for(date(1999, 12, 31)), 19_991_231);
    }

    #[test]
    fn same_date_same_board() {
        let config = GameConfig::default();
        let day = date(2024, 6, 1);
        assert_eq!(generate(day, &config).unwrap(), generate(day, &config).unwrap());
    }

    #[test]
    fn letter_count_within_bounds() {
        let config = GameConfig::default();
        let mut day = date(2024, 1, 1);
        for _ in 0..200 {
            let grid = generate(day, &config).unwrap();
            // Collisions can only reduce the count
            assert!((1..=6).contains(&grid.filled_count()), "{day}: {grid}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn different_dates_differ() {
        let config = GameConfig::default();
        let start = date(2024, 1, 1);
        let boards: Vec<Grid> = start
            .iter_days()
            .take(30)
            .map(|d| generate(d, &config).unwrap())
            .collect();

        let distinct = boards
            .iter()
            .enumerate()
            .filter(|(i, b)| !boards[..*i].contains(b))
            .count();
        assert!(distinct > 25, "only {distinct} distinct boards in 30 days");
    }

    #[test]
    fn letters_are_uppercase() {
        let config = GameConfig::default();
        let grid = generate(date(2025, 2, 14), &config).unwrap();
        for pos in grid.positions() {
            if let Some(letter) = grid.get(pos) {
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn respects_configured_size() {
        let config = GameConfig::new(4, 3).unwrap();
        let grid = generate(date(2025, 5, 5), &config).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
    }

    #[test]
    fn hard_letters_are_rare() {
        // Without the redraw Q/X/Z would be about 3/26 of letters; with it about 1/78
        let config = GameConfig::default();
        let (mut hard, mut total) = (0usize, 0usize);
        for day in date(2020, 1, 1).iter_days().take(1000) {
            let grid = generate(day, &config).unwrap();
            for pos in grid.positions() {
                if let Some(letter) = grid.get(pos) {
                    total += 1;
                    if config.is_hard(letter) {
                        hard += 1;
                    }
                }
            }
        }
        assert!(hard * 20 < total, "{hard} hard letters out of {total}");
    }
}
