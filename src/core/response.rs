//! Scoring responses
//!
//! A response is the feedback for one guess: the number of black pegs
//! (correct colour in the correct slot) and white pegs (correct colour in a
//! wrong slot, no slot counted twice). For a four-slot, six-colour game only
//! 14 of the pairs with black + white <= 4 can actually occur; `(3, 1)` in
//! particular is impossible, because three exact matches leave a single slot
//! whose colour either matches exactly or matches nothing.

use super::code::{Code, SLOTS};
use std::fmt;

/// Black/white feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Response {
    black: u8,
    white: u8,
}

impl Response {
    /// The winning response: every slot exact
    pub const WIN: Self = Self { black: 4, white: 0 };

    /// Every response a four-slot, six-colour game can produce
    pub const ALL: [Self; 14] = [
        Self::new(0, 0),
        Self::new(0, 1),
        Self::new(0, 2),
        Self::new(0, 3),
        Self::new(0, 4),
        Self::new(1, 0),
        Self::new(1, 1),
        Self::new(1, 2),
        Self::new(1, 3),
        Self::new(2, 0),
        Self::new(2, 1),
        Self::new(2, 2),
        Self::new(3, 0),
        Self::new(4, 0),
    ];

    /// Create a response from black and white counts
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        debug_assert!(black + white <= 4, "at most 4 pegs of feedback");
        Self { black, white }
    }

    /// Number of exact-position matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// Number of colour-only matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// Check whether this is the winning response
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.black == 4
    }

    /// Check whether this response appears in the 14-outcome list
    #[must_use]
    pub fn is_realizable(self) -> bool {
        Self::ALL.contains(&self)
    }

    /// Score a guess against a secret
    ///
    /// Two-pass matching: the first pass takes every exact match and consumes
    /// both slots; the second pass walks the remaining guess slots in order
    /// and, for each, consumes the first remaining secret slot holding the
    /// same colour. Counting is symmetric in guess and secret.
    #[must_use]
    pub fn score(guess: Code, secret: Code) -> Self {
        let mut black = 0u8;
        let mut white = 0u8;

        let mut used_guess = [false; SLOTS];
        let mut used_secret = [false; SLOTS];

        for i in 0..SLOTS {
            if guess.peg(i) == secret.peg(i) {
                black += 1;
                used_guess[i] = true;
                used_secret[i] = true;
            }
        }

        for i in 0..SLOTS {
            if used_guess[i] {
                continue;
            }

            for j in 0..SLOTS {
                if i != j && !used_secret[j] && guess.peg(i) == secret.peg(j) {
                    white += 1;
                    used_secret[j] = true;
                    break;
                }
            }
        }

        Self { black, white }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}
