//! Game configuration
//!
//! Board dimensions and daily-generation parameters, plus where persisted
//! state lives on disk.

use crate::core::GridError;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Default board width and height
pub const DEFAULT_SIZE: usize = 7;

/// Letters that are redrawn once when the daily generator picks them
pub const DEFAULT_HARD_LETTERS: &[u8] = b"QXZ";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WORDGRID_DATA_DIR";

/// Parameters shared by the generator, session and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// How many letters the daily generator places (inclusive)
    pub seed_letters: RangeInclusive<u32>,
    pub hard_letters: Vec<u8>,
    /// Number of scored words shown in the recent-words list
    pub display_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed_letters: 2..=6,
            hard_letters: DEFAULT_HARD_LETTERS.to_vec(),
            display_limit: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a board of the given size
    ///
    /// # Errors
    /// Returns `GridError::ZeroDimension` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension);
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }

    #[inline]
    #[must_use]
    pub fn is_hard(&self, letter: u8) -> bool {
        self.hard_letters.contains(&letter)
    }
}

/// Resolve the directory persisted state is written to
///
/// An explicit path wins, then the platform's local data directory; the
/// current directory is the last resort.
#[must_use]
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordgrid")
    })
}
