//! Command implementations

pub mod check;
pub mod daily;
pub mod simple;
pub mod sweep;

pub use check::{CheckResult, check_words, rejection_reason};
pub use daily::{DailyPuzzle, load_daily};
pub use simple::{TypedMove, parse_cell, parse_move, run_simple};
pub use sweep::{SweepResult, run_sweep};
