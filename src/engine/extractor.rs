//! Word extraction
//!
//! Scans every row left to right, then every column top to bottom, collecting
//! maximal runs of filled cells. Runs of three or more letters are candidate
//! words; a candidate is kept only if the dictionary accepts it.

use crate::core::{Axis, Cell, Grid, Position, Word};
use crate::dictionary::{Lookup, MIN_WORD_LEN, WordChecker};

/// All runs of at least three letters, row-major then column-major
///
/// No dictionary check is applied.
#[must_use]
pub fn candidate_runs(grid: &Grid) -> Vec<Word> {
    let mut runs = Vec::new();

    for y in 0..grid.height() {
        let cells = grid.row(y).iter().enumerate().map(|(x, &cell)| (Position::new(x, y), cell));
        collect_runs(cells, Axis::Row, &mut runs);
    }

    for x in 0..grid.width() {
        let cells = grid
            .column(x)
            .enumerate()
            .map(|(y, cell)| (Position::new(x, y), cell));
        collect_runs(cells, Axis::Column, &mut runs);
    }

    runs
}

/// Accumulate runs along one line, flushing at each gap and at the line end
fn collect_runs(cells: impl Iterator<Item = (Position, Cell)>, axis: Axis, out: &mut Vec<Word>) {
    let mut text = String::new();
    let mut start = None;

    for (pos, cell) in cells {
        if let Some(letter) = cell {
            start.get_or_insert(pos);
            text.push(char::from(letter));
        } else {
            flush_run(&mut text, &mut start, axis, out);
        }
    }
    flush_run(&mut text, &mut start, axis, out);
}

fn flush_run(text: &mut String, start: &mut Option<Position>, axis: Axis, out: &mut Vec<Word>) {
    if let Some(pos) = start.take()
        && text.len() >= MIN_WORD_LEN
    {
        out.push(Word::new(text.as_str(), axis, pos));
    }
    text.clear();
}

/// Every dictionary word on the grid, in scan order
///
/// Candidate checks are issued concurrently and joined before returning.
pub fn extract_words<L: Lookup>(grid: &Grid, checker: &WordChecker<L>) -> Vec<Word> {
    let runs = candidate_runs(grid);
    let texts: Vec<&str> = runs.iter().map(Word::text).collect();
    let verdicts = checker.validate_all(&texts);

    runs.into_iter()
        .zip(verdicts)
        .filter_map(|(word, valid)| valid.then_some(word))
        .collect()
}

/// Words in `current` that were not already in `previous`
#[must_use]
pub fn new_words(previous: &[Word], current: &[Word]) -> Vec<Word> {
    current
        .iter()
        .filter(|word| !previous.contains(word))
        .cloned()
        .collect()
}
