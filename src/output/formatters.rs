//! Formatting utilities for terminal output

use crate::core::Grid;

/// Column label for a 0-based column index (`0` -> `A`)
#[must_use]
pub fn column_label(x: usize) -> char {
    u8::try_from(x)
        .ok()
        .filter(|&x| x < 26)
        .map_or('?', |x| char::from(b'A' + x))
}

/// Capitalize a word for display ("CAT" -> "Cat")
#[must_use]
pub fn word_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Score padded to four digits, as shown on the scoreboard
#[must_use]
pub fn score_display(score: u32) -> String {
    format!("{score:04}")
}

/// Render a grid as labelled text rows
///
/// The first line holds column labels; each following line starts with the
/// 1-based row number. Empty cells show as `·`.
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    let header: String = (0..grid.width())
        .map(|x| format!(" {}", column_label(x)))
        .collect();
    let mut lines = vec![format!("   {header}")];

    for y in 0..grid.height() {
        let cells: String = grid
            .row(y)
            .iter()
            .map(|cell| format!(" {}", cell.map_or('·', char::from)))
            .collect();
        lines.push(format!("{:>2} {cells}", y + 1));
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_labels() {
        assert_eq!(column_label(0), 'A');
        assert_eq!(column_label(6), 'G');
        assert_eq!(column_label(26), '?');
    }

    #[test]
    fn word_case_capitalizes() {
        assert_eq!(word_case("CAT"), "Cat");
        assert_eq!(word_case("garden"), "Garden");
        assert_eq!(word_case(""), "");
    }

    #[test]
    fn score_is_zero_padded() {
        assert_eq!(score_display(0), "0000");
        assert_eq!(score_display(42), "0042");
        assert_eq!(score_display(12345), "12345");
    }

    #[test]
    fn grid_lines_label_rows_and_columns() {
        let grid = Grid::from_rows(&["c..", ".a."]).unwrap();
        assert_eq!(
            grid_lines(&grid),
            vec![
                "    A B C".to_string(),
                " 1  C · ·".to_string(),
                " 2  · A ·".to_string()
            ]
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
