//! A single day's play
//!
//! The session owns the committed board and the score lists. Each submitted
//! candidate grid goes through the move rules, then word extraction, then
//! scoring; only a fully legal move touches any state.

use super::extractor::{extract_words, new_words};
use super::moves::{MoveError, validate_move};
use super::scorer::{LengthScoring, ScoreEntry, Scoring, total};
use crate::config::GameConfig;
use crate::core::{Cell, Grid, Position, Word};
use crate::dictionary::{Lookup, WordChecker};
use crate::storage::{HighScoreStore, KeyValueStore, StoreError};
use chrono::NaiveDate;
use log::{debug, info};

/// What the renderer needs for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Cell,
    /// Filled before this turn and no longer editable
    pub locked: bool,
}

/// A scored word prepared for the recent-words list
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub word: String,
    pub points: u32,
    /// 1.0 for the latest move, fading towards 0.0 for older words
    pub weight: f32,
    pub latest: bool,
}

/// Outcome of finishing a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishSummary {
    pub score: u32,
    /// Best for the day after merging this score
    pub best: u32,
    pub new_record: bool,
}

pub struct Session<'a, L: Lookup, S: Scoring = LengthScoring> {
    date: NaiveDate,
    grid: Grid,
    words: Vec<Word>,
    latest: Vec<ScoreEntry>,
    older: Vec<ScoreEntry>,
    moves: usize,
    checker: &'a WordChecker<L>,
    scoring: S,
    display_limit: usize,
}

impl<'a, L: Lookup> Session<'a, L, LengthScoring> {
    /// Start a session on `grid` with one-point-per-letter scoring
    pub fn new(date: NaiveDate, grid: Grid, checker: &'a WordChecker<L>) -> Self {
        Self::with_scoring(date, grid, checker, LengthScoring)
    }
}

impl<'a, L: Lookup, S: Scoring> Session<'a, L, S> {
    pub fn with_scoring(date: NaiveDate, grid: Grid, checker: &'a WordChecker<L>, scoring: S) -> Self {
        let words = extract_words(&grid, checker);
        debug!("Session for {date} starts with {} words on the board", words.len());

        Self {
            date,
            grid,
            words,
            latest: Vec::new(),
            older: Vec::new(),
            moves: 0,
            checker,
            scoring,
            display_limit: GameConfig::default().display_limit,
        }
    }

    /// Override how many entries [`Session::display_entries`] returns
    #[must_use]
    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Attempt a move
    ///
    /// On success the candidate becomes the committed board and the entries
    /// for the newly formed words are returned (possibly none). On failure
    /// nothing changes.
    ///
    /// # Errors
    /// Returns the `MoveError` that makes the candidate illegal.
    pub fn submit(&mut self, candidate: &Grid) -> Result<Vec<ScoreEntry>, MoveError> {
        let placement = validate_move(&self.grid, candidate).inspect_err(|err| {
            debug!("Move rejected: {err}");
        })?;

        let words = extract_words(candidate, self.checker);
        let fresh = new_words(&self.words, &words);
        let entries = self.scoring.score(&fresh);

        let mut older = std::mem::take(&mut self.latest);
        older.append(&mut self.older);
        self.older = older;
        self.latest.clone_from(&entries);

        self.grid = candidate.clone();
        self.words = words;
        self.moves += 1;

        info!(
            "Move {} ({placement:?}) scored {} for {:?}",
            self.moves,
            total(&entries),
            entries.iter().map(|e| e.word.as_str()).collect::<Vec<_>>()
        );
        Ok(entries)
    }

    /// Merge the session total into the day's record
    ///
    /// # Errors
    /// Returns `StoreError` if an improved record cannot be written.
    pub fn finish<K: KeyValueStore>(
        &self,
        store: &mut HighScoreStore<K>,
    ) -> Result<FinishSummary, StoreError> {
        let score = self.total();
        let new_record = store.set(self.date, score)?;
        Ok(FinishSummary {
            score,
            best: store.get(self.date).max(score),
            new_record,
        })
    }

    /// Total points across every move
    #[must_use]
    pub fn total(&self) -> u32 {
        total(self.latest.iter().chain(&self.older))
    }

    /// Recent words for display, latest first
    ///
    /// Latest entries are always shown at full weight; older entries fill the
    /// remaining slots up to the display limit with decreasing weight.
    #[must_use]
    pub fn display_entries(&self) -> Vec<DisplayEntry> {
        let limit = self.display_limit;
        let latest = self.latest.iter().map(|e| DisplayEntry {
            word: e.word.clone(),
            points: e.points,
            weight: 1.0,
            latest: true,
        });

        let shown_latest = self.latest.len();
        let older = self
            .older
            .iter()
            .take(limit.saturating_sub(shown_latest))
            .enumerate()
            .map(|(i, e)| DisplayEntry {
                word: e.word.clone(),
                points: e.points,
                weight: (limit - (shown_latest + i)) as f32 / limit as f32,
                latest: false,
            });

        latest.chain(older).collect()
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> CellView {
        let letter = self.grid.get(pos);
        CellView {
            letter,
            locked: letter.is_some(),
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Dictionary words currently on the board
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn latest(&self) -> &[ScoreEntry] {
        &self.latest
    }

    #[must_use]
    pub fn older(&self) -> &[ScoreEntry] {
        &self.older
    }

    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }
}
