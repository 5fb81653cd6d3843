//! Code-breaking strategies
//!
//! Filtering shared by every strategy, the minimax search, and the engine
//! that drives a game turn by turn.

mod engine;
pub mod filter;
pub mod minimax;
mod strategy;

pub use engine::{OPENING, SolveError, Solver};
pub use filter::filter_consistent;
pub use strategy::StrategyKind;
