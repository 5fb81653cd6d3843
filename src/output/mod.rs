//! Terminal output formatting
//!
//! Board-cell rendering for codes and responses, plus summary printers for
//! the solve and benchmark commands.

use crate::commands::{BenchmarkResult, GameResult};
use crate::core::{Code, Peg, Response};
use colored::Colorize;

/// Render a peg as a coloured board cell
#[must_use]
pub fn paint_peg(peg: Peg) -> String {
    let cell = peg.to_string();
    match peg {
        Peg::Red => cell.red().to_string(),
        Peg::Green => cell.green().to_string(),
        Peg::Blue => cell.blue().to_string(),
        Peg::Yellow => cell.yellow().to_string(),
        Peg::Cyan => cell.cyan().to_string(),
        Peg::Purple => cell.magenta().to_string(),
        Peg::Black => cell.bright_black().to_string(),
        Peg::White => cell.white().to_string(),
        Peg::None => cell.dimmed().to_string(),
    }
}

/// Render a code as four coloured cells
#[must_use]
pub fn paint_code(code: Code) -> String {
    code.pegs().iter().map(|&peg| paint_peg(peg)).collect()
}

/// Render a response as black and white feedback pegs
///
/// Blacks first, then whites, empty slots as placeholders, e.g. `(B)(B)(W)[*]`.
#[must_use]
pub fn format_response_pegs(response: Response) -> String {
    let mut cells = String::new();
    for _ in 0..response.black() {
        cells.push_str(&paint_peg(Peg::Black));
    }
    for _ in 0..response.white() {
        cells.push_str(&paint_peg(Peg::White));
    }
    for _ in (response.black() + response.white())..4 {
        cells.push_str(&paint_peg(Peg::None));
    }
    cells
}

/// Print the solution path of one game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("Secret: {}", paint_code(result.secret));
    println!();

    for (turn, step) in result.turns.iter().enumerate() {
        let line = format!(
            "Turn {:>2}: {}  {}",
            turn + 1,
            paint_code(step.guess),
            format_response_pegs(step.response),
        );
        if verbose {
            println!("{line}  ({} candidates held)", step.remaining);
        } else {
            println!("{line}");
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Broken in {} turns", result.turn_count()).green()
        );
    } else {
        println!(
            "{}",
            format!("Not broken within {} turns", result.turn_count()).red()
        );
    }
}

/// Print aggregate benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!();
    println!("Strategy:   {}", result.strategy);
    println!("Games:      {}", result.total_games);
    println!("Average:    {:.3} turns", result.average_turns);
    println!(
        "Range:      {} - {} turns",
        result.min_turns, result.max_turns
    );
    if result.failures > 0 {
        println!("{}", format!("Failures:   {}", result.failures).red());
    }
    println!(
        "Throughput: {:.1} games/s ({:.2?} total)",
        result.games_per_second, result.duration
    );
    println!();

    let mut turn_counts: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    turn_counts.sort();
    for (turns, games) in turn_counts {
        let width = games * 50 / result.total_games.max(1);
        println!("{turns:>3}: {:<5} {}", games, "█".repeat(width));
    }
}
