//! Generator sweep command
//!
//! Generates a run of consecutive daily boards and summarizes them, as a
//! sanity check on the daily generator.

use crate::config::GameConfig;
use crate::core::GridError;
use crate::dictionary::{Lookup, WordChecker};
use crate::engine::{extract_words, generate};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Summary of a sweep over consecutive days
pub struct SweepResult {
    pub start: NaiveDate,
    pub total_days: usize,
    /// Filled cells on the starting board -> number of days
    pub distribution: BTreeMap<usize, usize>,
    /// Occurrences of each letter A-Z across all boards
    pub letter_counts: [usize; 26],
    pub hard_letters: usize,
    /// Days whose starting board already spells a dictionary word
    pub boards_with_words: usize,
    pub duplicate_boards: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate `days` boards starting at `start`
///
/// # Errors
///
/// Returns an error if the configured board has a zero dimension.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_sweep<L: Lookup>(
    start: NaiveDate,
    days: usize,
    config: &GameConfig,
    checker: &WordChecker<L>,
    show_progress: bool,
) -> Result<SweepResult, GridError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(days as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let started = Instant::now();
    let mut distribution = BTreeMap::new();
    let mut letter_counts = [0usize; 26];
    let mut hard_letters = 0;
    let mut boards_with_words = 0;
    let mut seen = FxHashSet::default();
    let mut duplicate_boards = 0;

    let mut date = start;
    for _ in 0..days {
        let grid = generate(date, config)?;
        *distribution.entry(grid.filled_count()).or_insert(0) += 1;

        for letter in grid.positions().filter_map(|p| grid.get(p)) {
            letter_counts[usize::from(letter - b'A')] += 1;
            if config.is_hard(letter) {
                hard_letters += 1;
            }
        }

        if !extract_words(&grid, checker).is_empty() {
            boards_with_words += 1;
        }
        if !seen.insert(grid) {
            duplicate_boards += 1;
        }

        pb.set_message(date.to_string());
        pb.inc(1);
        date = date.checked_add_days(Days::new(1)).unwrap_or(date);
    }
    pb.finish_and_clear();

    let duration = started.elapsed();
    Ok(SweepResult {
        start,
        total_days: days,
        distribution,
        letter_counts,
        hard_letters,
        boards_with_words,
        duplicate_boards,
        duration,
        boards_per_second: days as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn run(days: usize) -> SweepResult {
        let checker = WordChecker::new(WordList::embedded());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        run_sweep(start, days, &GameConfig::default(), &checker, false).unwrap()
    }

    #[test]
    fn sweep_counts_every_day() {
        let result = run(50);
        assert_eq!(result.total_days, 50);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, 50);
    }

    #[test]
    fn sweep_letter_totals_match_distribution() {
        let result = run(40);

        let letters: usize = result.letter_counts.iter().sum();
        let cells: usize = result.distribution.iter().map(|(filled, days)| filled * days).sum();
        assert_eq!(letters, cells);
    }

    #[test]
    fn sweep_boards_have_few_letters() {
        let result = run(60);
        for &filled in result.distribution.keys() {
            assert!((1..=6).contains(&filled));
        }
        assert!(result.hard_letters <= result.letter_counts.iter().sum::<usize>());
    }

    #[test]
    fn sweep_empty_range() {
        let result = run(0);
        assert_eq!(result.total_days, 0);
        assert!(result.distribution.is_empty());
        assert_eq!(result.duplicate_boards, 0);
    }
}
