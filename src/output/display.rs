//! Display functions for command results

use super::formatters::{format_board, format_path};
use crate::commands::{CheckResult, MissedResult};
use crate::core::Grid;
use colored::Colorize;

/// Print a board with a header line
pub fn print_board(grid: &Grid) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} {}", "BOARD".bright_cyan().bold(), grid.to_string().bright_black());
    println!("{}", "═".repeat(40).cyan());
    println!("\n{}\n", format_board(grid).bright_yellow().bold());
}

/// Print the outcome of checking a player's words
pub fn print_check_result(result: &CheckResult) {
    print_board(&result.board);

    let rejected = &result.classification.rejected;
    println!("{}", "The following words are not allowed:".red().bold());
    if rejected.is_empty() {
        println!("   {}", "(none)".bright_black());
    }
    for word in rejected {
        println!("   {}", word.red());
    }

    println!("\n{}", "The following words scored points:".green().bold());
    if result.scores.words.is_empty() {
        println!("   {}", "(none)".bright_black());
    }
    for scored in &result.scores.words {
        println!(
            "   {:<16} {}",
            scored.word.green(),
            scored.score.to_string().bright_yellow()
        );
    }

    if !result.paths.is_empty() {
        println!("\n{}", "Paths:".bright_cyan().bold());
        for (word, path) in &result.paths {
            println!("   {:<16} {}", word, format_path(&result.board, path));
        }
    }

    println!(
        "\nTotal score: {}",
        result.scores.total.to_string().bright_yellow().bold()
    );
}

/// Print the words a player could have found
pub fn print_missed_result(result: &MissedResult) {
    println!(
        "{} {} words on this board, {} missed ({} points)",
        "📊".bright_cyan(),
        result.available,
        result.missed.len().to_string().yellow(),
        result.missed_points.to_string().bright_yellow()
    );
    for scored in &result.missed {
        println!("   {:<16} {}", scored.word, scored.score);
    }
}
