//! Display functions for command results

use super::formatters::{create_progress_bar, grid_lines, score_display, word_case};
use crate::commands::{CheckResult, DailyPuzzle, SweepResult, rejection_reason};
use crate::core::Grid;
use crate::engine::{FinishSummary, ScoreEntry};
use crate::engine::generator::ALPHABET;
use colored::Colorize;
use std::collections::BTreeMap;

/// Print a board with row and column labels
pub fn print_board(grid: &Grid, title: Option<&str>) {
    if let Some(title) = title {
        println!("{}", title.bright_cyan().bold());
    }
    for (i, line) in grid_lines(grid).into_iter().enumerate() {
        if i == 0 {
            println!("{}", line.bright_black());
        } else {
            println!("{line}");
        }
    }
    println!();
}

/// Print the words scored by one move
pub fn print_move_scores(entries: &[ScoreEntry]) {
    if entries.is_empty() {
        println!("{}\n", "No new words.".bright_black());
        return;
    }
    for entry in entries {
        println!(
            "  {} {}",
            format!("{:<8}", word_case(&entry.word)).bright_white().bold(),
            format!("+{}", entry.points).green()
        );
    }
    println!();
}

/// Print the result of finishing a game
pub fn print_finish(summary: &FinishSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("  Final score: {}", score_display(summary.score).bright_yellow().bold());
    if summary.new_record {
        println!("  {}", "🏆 New best for today!".bright_green().bold());
    } else {
        println!("  Today's best: {}", score_display(summary.best).bright_white());
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the day's starting puzzle
pub fn print_daily(puzzle: &DailyPuzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle for {} {}",
        puzzle.date.to_string().bright_yellow().bold(),
        format!("(seed {})", puzzle.seed).bright_black()
    );
    println!("{}\n", "─".repeat(60).cyan());

    print_board(&puzzle.grid, None);

    println!("Letters placed:  {}", puzzle.grid.filled_count());
    if puzzle.words.is_empty() {
        println!("Words on board:  none");
    } else {
        let words: Vec<String> = puzzle
            .words
            .iter()
            .map(|w| format!("{} ({})", word_case(w.text()), w.axis()))
            .collect();
        println!("Words on board:  {}", words.join(", "));
    }
    println!("Best today:      {}", score_display(puzzle.best));
}

/// Print dictionary check results
pub fn print_check_results(results: &[CheckResult]) {
    for result in results {
        if result.valid {
            println!(
                "  ✅ {} {}",
                format!("{:<10}", result.word).bright_white().bold(),
                format!("{} points", result.points).green()
            );
        } else {
            println!(
                "  ❌ {} {}",
                format!("{:<10}", result.word).bright_black(),
                rejection_reason(&result.word).red()
            );
        }
    }
}

/// Print recorded best scores
pub fn print_scores(records: &BTreeMap<String, u32>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "BEST SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if records.is_empty() {
        println!("\n  No games finished yet.");
        return;
    }

    let max = records.values().copied().max().unwrap_or(0);
    for (day, &score) in records {
        let bar = create_progress_bar(f64::from(score), f64::from(max), 20);
        println!("  {day:>10}  {} {}", bar.green(), score_display(score).bright_yellow());
    }
}

/// Print the result of a generator sweep
pub fn print_sweep_result(result: &SweepResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR SWEEP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Boards:".bright_cyan().bold());
    println!("   Days generated:    {} from {}", result.total_days, result.start);
    println!(
        "   With a word:       {}",
        result.boards_with_words.to_string().bright_yellow()
    );
    println!("   Duplicate boards:  {}", result.duplicate_boards);
    println!("   Hard letters:      {}", result.hard_letters);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:     {:.1}", result.boards_per_second);

    println!("\n📈 {}", "Letters per board:".bright_cyan().bold());
    for (&filled, &count) in &result.distribution {
        let pct = (count as f64 / result.total_days as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {filled}: {bar} {count:4} ({pct:5.1}%)");
    }

    println!("\n🔤 {}", "Letter frequency:".bright_cyan().bold());
    let max = result.letter_counts.iter().copied().max().unwrap_or(0);
    for (letter, &count) in ALPHABET.iter().zip(&result.letter_counts) {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {}: {} {count}", char::from(*letter), bar.cyan());
    }
}
