//! Benchmark command
//!
//! Replays a strategy against many secrets and aggregates the turn counts.

use super::solve::{GameConfig, play_game};
use crate::core::Code;
use crate::rules::Rules;
use crate::solver::{Solver, StrategyKind};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub total_games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Games that exhausted the turn budget
    pub failures: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run a strategy against a set of secrets
///
/// Each game gets a fresh solver; randomized strategies derive a per-game
/// seed from `seed` so the whole run is reproducible. Pass `progress` to
/// draw a bar on long runs.
#[must_use]
pub fn run_benchmark(
    rules: &Rules,
    strategy: StrategyKind,
    secrets: &[Code],
    seed: u64,
    progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut failures = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let bar = if progress {
        Some(ProgressBar::new(secrets.len() as u64))
    } else {
        None
    };

    for (game, &secret) in secrets.iter().enumerate() {
        let mut solver = Solver::seeded(strategy, rules, seed.wrapping_add(game as u64));
        let result = play_game(&GameConfig::new(secret), rules, &mut solver)
            .expect("honest feedback cannot empty the working set");

        let turns = result.turn_count();
        total_turns += turns;
        min_turns = min_turns.min(turns);
        max_turns = max_turns.max(turns);
        if !result.success {
            failures += 1;
        }
        *distribution.entry(turns).or_insert(0) += 1;

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    BenchmarkResult {
        strategy,
        total_games,
        total_turns,
        average_turns: total_turns as f64 / total_games as f64,
        min_turns,
        max_turns,
        failures,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}
