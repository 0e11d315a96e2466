//! Core domain types for the word grid
//!
//! This module contains the board and word types with zero I/O.
//! Everything here is a plain value: cheap to clone, compare and test.

mod grid;
mod word;

pub use grid::{Cell, Grid, GridError, Position, normalize_letter};
pub use word::{Axis, Word};
