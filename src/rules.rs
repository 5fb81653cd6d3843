//! Game rules: the candidate space and the validated scorer
//!
//! `Rules` enumerates every possible secret once at construction and is then
//! shared read-only by every solver in the session.

use crate::core::{Code, GUESSABLE, Response};

/// The full candidate space plus the validated scoring entry point
pub struct Rules {
    codes: Vec<Code>,
}

impl Rules {
    /// Generate the complete candidate space
    ///
    /// All 6^4 = 1296 codes, in a fixed nested order: slot 0 varies slowest,
    /// slot 3 fastest. The greedy-last strategy is defined in terms of this
    /// order, so it must stay reproducible.
    #[must_use]
    pub fn new() -> Self {
        let mut codes = Vec::with_capacity(GUESSABLE.len().pow(4));

        for a in GUESSABLE {
            for b in GUESSABLE {
                for c in GUESSABLE {
                    for d in GUESSABLE {
                        codes.push(Code::new([a, b, c, d]));
                    }
                }
            }
        }

        Self { codes }
    }

    /// Every possible secret, in generation order
    #[inline]
    #[must_use]
    pub fn all_codes(&self) -> &[Code] {
        &self.codes
    }

    /// Every response the game can produce
    #[inline]
    #[must_use]
    pub fn all_responses(&self) -> &'static [Response] {
        &Response::ALL
    }

    /// Score a guess against a secret and validate the outcome
    ///
    /// # Panics
    /// Panics if scoring produces a response outside the 14-outcome list.
    /// That is unreachable for any two valid codes and would mean the
    /// matching algorithm itself is broken, so it is asserted rather than
    /// surfaced as a recoverable error.
    #[must_use]
    pub fn check(&self, guess: Code, secret: Code) -> Response {
        let response = Response::score(guess, secret);
        assert!(
            response.is_realizable(),
            "unrealizable response ({response}) scoring {guess} against {secret}"
        );
        response
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
