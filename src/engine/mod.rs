//! Game engine
//!
//! Move rules, word extraction, scoring and daily board generation, plus the
//! [`Session`] that runs them in order for each submitted move.

pub mod draft;
pub mod extractor;
pub mod generator;
pub mod moves;
pub mod scorer;
pub mod session;

pub use draft::Draft;
pub use extractor::{candidate_runs, extract_words, new_words};
pub use generator::{generate, seed_for};
pub use moves::{MoveError, Placement, is_legal, validate_move};
pub use scorer::{LengthScoring, ScoreEntry, Scoring};
pub use session::{CellView, DisplayEntry, FinishSummary, Session};
