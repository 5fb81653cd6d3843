//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{DEFAULT_TURN_BUDGET, GameConfig, GameResult, TurnStep, play_game};
