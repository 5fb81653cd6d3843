//! Worst-case partition size for a candidate guess
//!
//! Given a guess, partitions a set of possible secrets by the response the
//! guess would receive against each one, and reports the largest partition.

use crate::core::{Code, Response};
use crate::rules::Rules;
use rustc_hash::FxHashMap;

/// Calculate the worst-case remaining candidates for a guess
///
/// The minimax score of a guess: however the adversary answers, at most this
/// many of `secrets` stay consistent. Every response a guess can produce is
/// one of the 14 outcomes, so grouping by response walks the same partition
/// the outcome list would.
#[must_use]
pub fn largest_partition(rules: &Rules, guess: Code, secrets: &[Code]) -> usize {
    if secrets.is_empty() {
        return 0;
    }

    let counts = group_by_response(rules, guess, secrets);
    counts.values().max().copied().unwrap_or(0)
}

/// Group secrets by the response they would give the guess
fn group_by_response(rules: &Rules, guess: Code, secrets: &[Code]) -> FxHashMap<Response, usize> {
    let mut counts = FxHashMap::default();

    for &secret in secrets {
        let response = rules.check(guess, secret);
        *counts.entry(response).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_sizes_sum_to_secret_count() {
        let rules = Rules::new();
        let guess = Code::parse("rrgg").unwrap();

        let groups = group_by_response(&rules, guess, rules.all_codes());
        assert_eq!(groups.values().sum::<usize>(), 1296);
        assert!(groups.len() <= 14);
    }

    #[test]
    fn two_pair_opening_worst_case_is_256() {
        // For a guess with two colours twice each, the biggest partition is
        // the 4^4 codes using neither colour, all answered (0, 0).
        let rules = Rules::new();
        let opening = Code::parse("rrgg").unwrap();

        assert_eq!(largest_partition(&rules, opening, rules.all_codes()), 256);
    }

    #[test]
    fn monochrome_guess_worst_case_is_625() {
        // A single-colour guess lumps the 5^4 codes without that colour
        // into one partition.
        let rules = Rules::new();
        let mono = Code::parse("rrrr").unwrap();

        assert_eq!(largest_partition(&rules, mono, rules.all_codes()), 625);
    }

    #[test]
    fn worst_case_bounded_by_secret_count() {
        let rules = Rules::new();
        let secrets: Vec<Code> = rules.all_codes().iter().copied().take(50).collect();

        for &guess in rules.all_codes().iter().step_by(100) {
            let worst = largest_partition(&rules, guess, &secrets);
            assert!(worst >= 1);
            assert!(worst <= secrets.len());
        }
    }

    #[test]
    fn empty_secret_set() {
        let rules = Rules::new();
        let guess = Code::parse("rrgg").unwrap();
        assert_eq!(largest_partition(&rules, guess, &[]), 0);
    }

    #[test]
    fn single_secret() {
        let rules = Rules::new();
        let guess = Code::parse("rrgg").unwrap();
        let secrets = [Code::parse("ypcb").unwrap()];
        assert_eq!(largest_partition(&rules, guess, &secrets), 1);
    }
}
