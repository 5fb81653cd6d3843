//! The solver engine
//!
//! Owns the mutable working set for one game and applies the chosen
//! strategy each turn: filter the working set against the previous turn's
//! feedback, then select the next guess from what survives.

use super::filter::filter_consistent;
use super::minimax;
use super::strategy::StrategyKind;
use crate::core::{Code, Peg, Response};
use crate::rules::Rules;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The fixed opening guess: two colours, each twice
pub const OPENING: Code = Code::new([Peg::Red, Peg::Red, Peg::Green, Peg::Green]);

/// Error type for a solving turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Filtering emptied the working set: the feedback sequence is
    /// consistent with no code at all
    EmptyWorkingSet,
    /// `next_guess` was called before any guess was issued
    NoGuessOutstanding,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorkingSet => {
                write!(f, "no code is consistent with the feedback received")
            }
            Self::NoGuessOutstanding => {
                write!(f, "next_guess called before an initial guess was made")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// A code-breaking solver for a single game
///
/// Holds its own working set, initialized to the full candidate space and
/// narrowed every turn. The RNG is injected so randomized strategies are
/// reproducible under a fixed seed.
pub struct Solver<'a, R: Rng> {
    strategy: StrategyKind,
    rules: &'a Rules,
    working: Vec<Code>,
    last_guess: Option<Code>,
    rng: R,
}

impl<'a> Solver<'a, StdRng> {
    /// Create a solver with a seeded standard RNG
    #[must_use]
    pub fn seeded(strategy: StrategyKind, rules: &'a Rules, seed: u64) -> Self {
        Self::new(strategy, rules, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Solver<'a, R> {
    /// Create a solver with the given strategy and RNG
    #[must_use]
    pub fn new(strategy: StrategyKind, rules: &'a Rules, rng: R) -> Self {
        Self {
            strategy,
            rules,
            working: rules.all_codes().to_vec(),
            last_guess: None,
            rng,
        }
    }

    /// The strategy this solver plays
    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Number of codes still consistent with all feedback so far
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.working.len()
    }

    /// The current working set
    #[must_use]
    pub fn working_set(&self) -> &[Code] {
        &self.working
    }

    /// The opening guess, independent of any search
    pub fn initial_guess(&mut self) -> Code {
        self.last_guess = Some(OPENING);
        OPENING
    }

    /// Produce the next guess from the previous turn's feedback
    ///
    /// Narrows the working set to the codes consistent with the previous
    /// guess and `prior`, then selects from the narrowed set per strategy.
    ///
    /// # Errors
    /// - [`SolveError::NoGuessOutstanding`] if no guess has been issued yet
    /// - [`SolveError::EmptyWorkingSet`] if filtering leaves nothing, which
    ///   means the supplied feedback contradicts itself
    pub fn next_guess(&mut self, prior: Response) -> Result<Code, SolveError> {
        let prior_guess = self.last_guess.ok_or(SolveError::NoGuessOutstanding)?;

        self.working = filter_consistent(self.rules, &self.working, prior_guess, prior);
        if self.working.is_empty() {
            return Err(SolveError::EmptyWorkingSet);
        }

        let guess = match self.strategy {
            StrategyKind::Minimax => {
                minimax::select_guess(self.rules, &self.working)
                    .map(|(code, _)| code)
                    .ok_or(SolveError::EmptyWorkingSet)?
            }
            StrategyKind::GreedyLast => self.working[self.working.len() - 1],
            StrategyKind::RandomFiltered => {
                self.working[random_index(&mut self.rng, self.working.len())]
            }
        };

        self.last_guess = Some(guess);
        Ok(guess)
    }
}

/// Index selection for the random strategy
///
/// The upper bound deliberately excludes the last index, so a multi-element
/// set never yields its final element. The game stays winnable: filtering
/// eventually narrows the set to a singleton, and a singleton yields index 0.
fn random_index<R: Rng>(rng: &mut R, len: usize) -> usize {
    if len <= 1 { 0 } else { rng.random_range(0..len - 1) }
}
