//! Mastermind Solver
//!
//! Deduces a hidden four-peg code from black/white feedback using
//! consistency filtering and a Knuth-style worst-case minimax search.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Response};
//! use mastermind_solver::rules::Rules;
//!
//! let rules = Rules::new();
//!
//! // Score a guess against a secret
//! let guess = Code::parse("rgbb").unwrap();
//! let secret = Code::parse("rrbg").unwrap();
//! assert_eq!(rules.check(guess, secret), Response::new(2, 1));
//! ```

// Core domain types
pub mod core;

// Candidate space and validated scoring
pub mod rules;

// Solving strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
