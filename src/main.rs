//! Mastermind Solver - CLI
//!
//! Breaks a hidden four-peg code from black/white feedback, or benchmarks
//! a strategy across the candidate space.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{GameConfig, play_game, run_benchmark},
    core::Code,
    output::{print_benchmark_result, print_game_result},
    rules::Rules,
    solver::{Solver, StrategyKind},
};
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using minimax and consistency filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), greedy, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// RNG seed for secret generation and the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a secret code (random unless given)
    Solve {
        /// The secret as four colour letters (r g b y c p), e.g. "rgby"
        #[arg(short = 'c', long)]
        secret: Option<String>,

        /// Turn budget
        #[arg(short, long, default_value = "13")]
        turns: usize,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark a strategy over many secrets
    Benchmark {
        /// Number of secrets sampled evenly from the candidate space
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test against every one of the 1296 secrets
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = Rules::new();
    let strategy = StrategyKind::from_name(&cli.strategy);
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    let command = cli.command.unwrap_or(Commands::Solve {
        secret: None,
        turns: 13,
        verbose: false,
    });

    match command {
        Commands::Solve {
            secret,
            turns,
            verbose,
        } => run_solve_command(&rules, strategy, seed, secret.as_deref(), turns, verbose),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&rules, strategy, seed, count, all);
            Ok(())
        }
    }
}

fn run_solve_command(
    rules: &Rules,
    strategy: StrategyKind,
    seed: u64,
    secret: Option<&str>,
    turns: usize,
    verbose: bool,
) -> Result<()> {
    let secret = match secret {
        Some(s) => Code::parse(s).with_context(|| format!("invalid secret '{s}'"))?,
        None => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            Code::random(&mut rng)
        }
    };

    let mut config = GameConfig::new(secret);
    config.max_turns = turns;

    let mut solver = Solver::seeded(strategy, rules, seed);
    let result = play_game(&config, rules, &mut solver)?;

    print_game_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(rules: &Rules, strategy: StrategyKind, seed: u64, count: usize, all: bool) {
    let secrets: Vec<Code> = if all {
        rules.all_codes().to_vec()
    } else {
        let step = (rules.all_codes().len() / count.max(1)).max(1);
        rules.all_codes().iter().copied().step_by(step).collect()
    };

    println!(
        "Benchmarking {} over {} secrets...",
        strategy,
        secrets.len()
    );

    let result = run_benchmark(rules, strategy, &secrets, seed, true);
    print_benchmark_result(&result);
}
