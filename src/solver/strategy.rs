//! Guess selection strategies
//!
//! A closed set of tagged variants; the shared filtering step lives in
//! [`crate::solver::filter`] and the per-variant selection in the engine.

use std::fmt;

/// How a solver picks its guess from the filtered working set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Minimize the worst-case partition over the full candidate space
    Minimax,
    /// Take the last element of the filtered set
    GreedyLast,
    /// Draw from the filtered set at random
    RandomFiltered,
}

impl StrategyKind {
    /// Create a strategy from a name string
    ///
    /// Supported names: "minimax"/"knuth", "greedy"/"simple", "random"/"swaszek".
    /// Defaults to minimax if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "greedy" | "greedy-last" | "simple" => Self::GreedyLast,
            "random" | "swaszek" => Self::RandomFiltered,
            _ => Self::Minimax,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::GreedyLast => "greedy",
            Self::RandomFiltered => "random",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_aliases() {
        assert_eq!(StrategyKind::from_name("minimax"), StrategyKind::Minimax);
        assert_eq!(StrategyKind::from_name("knuth"), StrategyKind::Minimax);
        assert_eq!(StrategyKind::from_name("greedy"), StrategyKind::GreedyLast);
        assert_eq!(StrategyKind::from_name("simple"), StrategyKind::GreedyLast);
        assert_eq!(
            StrategyKind::from_name("random"),
            StrategyKind::RandomFiltered
        );
        assert_eq!(
            StrategyKind::from_name("swaszek"),
            StrategyKind::RandomFiltered
        );
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert_eq!(StrategyKind::from_name(""), StrategyKind::Minimax);
        assert_eq!(StrategyKind::from_name("entropy"), StrategyKind::Minimax);
    }

    #[test]
    fn names_roundtrip() {
        for kind in [
            StrategyKind::Minimax,
            StrategyKind::GreedyLast,
            StrategyKind::RandomFiltered,
        ] {
            assert_eq!(StrategyKind::from_name(kind.name()), kind);
        }
    }
}
