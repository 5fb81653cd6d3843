//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond the RNG used for secret generation. All types here
//! are pure, testable, and have clear mathematical properties.

mod code;
mod peg;
mod response;

pub use code::{Code, CodeError, SLOTS};
pub use peg::{GUESSABLE, Peg};
pub use response::Response;
