//! Consistency filtering
//!
//! The narrowing step shared by every strategy: keep the codes that would
//! have produced the feedback the previous guess actually received.

use crate::core::{Code, Response};
use crate::rules::Rules;

/// Filter a candidate set down to the codes consistent with one turn of
/// feedback
///
/// Returns a fresh snapshot rather than mutating in place, so each turn's
/// working set is a distinct inspectable value. A candidate survives when
/// scoring it against the prior guess reproduces the prior response; scoring
/// is symmetric, so the true secret always survives.
#[must_use]
pub fn filter_consistent(
    rules: &Rules,
    codes: &[Code],
    prior_guess: Code,
    prior: Response,
) -> Vec<Code> {
    codes
        .iter()
        .copied()
        .filter(|&candidate| rules.check(candidate, prior_guess) == prior)
        .collect()
}
