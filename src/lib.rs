//! Word Grid
//!
//! A daily word-placement puzzle: letters go into a single row or column of a
//! seeded 7x7 board, and every new dictionary word of three or more letters
//! scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordgrid::core::Grid;
//! use wordgrid::engine::validate_move;
//!
//! // Place "CAT" along the top row of an empty board
//! let before = Grid::empty(7, 7).unwrap();
//! let after = Grid::from_rows(&[
//!     "cat....", ".......", ".......", ".......", ".......", ".......", ".......",
//! ])
//! .unwrap();
//!
//! let placement = validate_move(&before, &after).unwrap();
//! println!("Legal move: {placement:?}");
//! ```

// Core domain types
pub mod core;

// Board and game settings
pub mod config;

// Word validity checks
pub mod dictionary;

// Generation, move rules, extraction and scoring
pub mod engine;

// Persisted high scores
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
