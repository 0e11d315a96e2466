//! Simple interactive CLI mode
//!
//! Line-oriented game without TUI. Moves are typed as a start cell, a
//! direction and the letters to place, e.g. `b3 across cat`.

use crate::core::{Axis, Position};
use crate::dictionary::Lookup;
use crate::engine::{Draft, Session};
use crate::output::display::{print_board, print_finish, print_move_scores};
use crate::storage::{HighScoreStore, KeyValueStore};
use colored::Colorize;
use std::io::{self, Write};

/// A typed placement before it is applied to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedMove {
    pub start: Position,
    pub axis: Axis,
    pub letters: String,
}

/// Parse `<cell> <across|down> <letters>`
///
/// Cells are a column letter and a 1-based row number (`a1` is the top left).
///
/// # Errors
/// Returns a message describing the first malformed part.
pub fn parse_move(input: &str) -> Result<TypedMove, String> {
    let mut parts = input.split_whitespace();
    let (Some(cell), Some(direction), Some(letters), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err("Expected: <cell> <across|down> <letters>, e.g. 'b3 across cat'".to_string());
    };

    let start = parse_cell(cell)?;
    let axis = match direction.to_lowercase().as_str() {
        "across" | "a" | "right" | "r" => Axis::Row,
        "down" | "d" => Axis::Column,
        other => return Err(format!("Unknown direction '{other}', use across or down")),
    };
    if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("'{letters}' must contain only letters"));
    }

    Ok(TypedMove {
        start,
        axis,
        letters: letters.to_uppercase(),
    })
}

/// Parse a cell name like `c4`
///
/// # Errors
/// Returns a message if the name is not a letter followed by a row number.
pub fn parse_cell(cell: &str) -> Result<Position, String> {
    let mut chars = cell.chars();
    let column = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| format!("Cell '{cell}' must start with a column letter"))?;
    let row: usize = chars
        .as_str()
        .parse()
        .ok()
        .filter(|&r| r >= 1)
        .ok_or_else(|| format!("Cell '{cell}' needs a row number from 1"))?;

    let x = usize::from(column.to_ascii_lowercase() as u8 - b'a');
    Ok(Position::new(x, row - 1))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<L: Lookup, K: KeyValueStore>(
    session: &mut Session<'_, L>,
    store: &mut HighScoreStore<K>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Grid - Daily Puzzle                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Place letters in a single row or column to form words.");
    println!("Every new word of three or more letters scores one point per letter.\n");
    println!("  - Move:   <cell> <across|down> <letters>   e.g. 'b3 across cat'");
    println!("            letters skip over cells that are already filled");
    println!("  - finish: record your score for {}", session.date());
    println!("  - quit:   leave without recording\n");

    let best = store.get(session.date());
    if best > 0 {
        println!("Today's best so far: {}\n", best.to_string().bright_yellow().bold());
    }

    loop {
        print_board(session.grid(), None);
        println!("Score: {}\n", session.total().to_string().bright_cyan().bold());

        let input = get_user_input("Move")?;
        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "finish" | "f" | "done" => {
                match session.finish(store) {
                    Ok(summary) => print_finish(&summary),
                    Err(err) => println!("❌ {err}"),
                }
                return Ok(());
            }
            "help" | "h" | "?" => {
                println!("Move: <cell> <across|down> <letters>, 'finish' or 'quit'\n");
            }
            _ => match parse_move(&input) {
                Ok(typed) => {
                    let draft = match Draft::along(session.grid(), typed.start, typed.axis, &typed.letters) {
                        Ok(draft) => draft,
                        Err(err) => {
                            println!("❌ {err}\n");
                            continue;
                        }
                    };
                    let candidate = draft.assemble(session.grid());
                    match session.submit(&candidate) {
                        Ok(entries) => print_move_scores(&entries),
                        Err(err) => println!("❌ {err}\n"),
                    }
                }
                Err(message) => println!("❌ {message}\n"),
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_across_move() {
        assert_eq!(
            parse_move("b3 across cat").unwrap(),
            TypedMove {
                start: Position::new(1, 2),
                axis: Axis::Row,
                letters: "CAT".to_string()
            }
        );
    }

    #[test]
    fn parse_short_direction() {
        let typed = parse_move("A1 d owl").unwrap();
        assert_eq!(typed.start, Position::new(0, 0));
        assert_eq!(typed.axis, Axis::Column);
    }

    #[test]
    fn parse_rejects_bad_parts() {
        assert!(parse_move("b3 cat").is_err());
        assert!(parse_move("b3 sideways cat").is_err());
        assert!(parse_move("b3 across c4t").is_err());
        assert!(parse_move("b3 across cat extra").is_err());
    }

    #[test]
    fn parse_cell_names() {
        assert_eq!(parse_cell("g7"), Ok(Position::new(6, 6)));
        assert_eq!(parse_cell("C12"), Ok(Position::new(2, 11)));
        assert!(parse_cell("3b").is_err());
        assert!(parse_cell("b0").is_err());
        assert!(parse_cell("b").is_err());
    }
}
