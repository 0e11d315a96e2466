//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_results, print_daily, print_finish, print_move_scores, print_scores,
    print_sweep_result,
};
