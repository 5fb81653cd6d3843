//! Minimax ("worst-case candidate count") strategy internals

mod calculator;
mod selector;

pub use calculator::largest_partition;
pub use selector::select_guess;
