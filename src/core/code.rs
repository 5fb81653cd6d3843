//! Code combinations
//!
//! A code is an ordered sequence of four guessable pegs. Codes are immutable
//! values compared slot by slot.

use super::peg::{GUESSABLE, Peg};
use rand::Rng;
use std::fmt;

/// Number of peg slots in a code
pub const SLOTS: usize = 4;

/// An ordered four-peg combination
///
/// Structural equality and hashing; a code never changes once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Peg; SLOTS]);

/// Error type for invalid code input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidColour(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {SLOTS} pegs, got {len}")
            }
            Self::InvalidColour(c) => {
                write!(f, "'{c}' is not a guessable colour (use r g b y c p)")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from four pegs
    ///
    /// # Panics
    /// Panics in debug mode if any peg is a feedback marker or the empty
    /// placeholder; codes hold guessable colours only.
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Peg; SLOTS]) -> Self {
        let mut slot = 0;
        while slot < SLOTS {
            debug_assert!(
                pegs[slot].is_guessable(),
                "code pegs must be guessable colours"
            );
            slot += 1;
        }
        Self(pegs)
    }

    /// Get the peg in a specific slot (0-3)
    ///
    /// # Panics
    /// Panics if slot >= 4
    #[inline]
    #[must_use]
    pub const fn peg(&self, slot: usize) -> Peg {
        self.0[slot]
    }

    /// Get the peg in a slot, or `None` when the slot is out of range
    #[inline]
    #[must_use]
    pub const fn get(&self, slot: usize) -> Option<Peg> {
        if slot < SLOTS { Some(self.0[slot]) } else { None }
    }

    /// Get all four pegs
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; SLOTS] {
        &self.0
    }

    /// Parse a code from four colour letters, e.g. `"rgby"` or `"RGBY"`
    ///
    /// # Errors
    /// Returns `CodeError` if the input is not exactly four characters or
    /// contains a character that is not a guessable colour letter.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let letters: Vec<char> = s.chars().collect();

        if letters.len() != SLOTS {
            return Err(CodeError::InvalidLength(letters.len()));
        }

        let mut pegs = [Peg::None; SLOTS];
        for (slot, &letter) in letters.iter().enumerate() {
            pegs[slot] = Peg::from_letter(letter).ok_or(CodeError::InvalidColour(letter))?;
        }

        Ok(Self(pegs))
    }

    /// Draw a uniformly random code, each slot independent
    ///
    /// This is how a session's secret is generated.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut pegs = [Peg::None; SLOTS];
        for peg in &mut pegs {
            *peg = GUESSABLE[rng.random_range(0..GUESSABLE.len())];
        }
        Self(pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
