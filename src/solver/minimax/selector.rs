//! Minimax guess selection
//!
//! Picks, from the working set, the guess whose worst-case partition over
//! the full candidate space is smallest.

use super::calculator::largest_partition;
use crate::core::Code;
use crate::rules::Rules;
use rayon::prelude::*;

/// Select the guess minimizing the worst-case remaining candidates
///
/// Candidate guesses come from `working` (the already-narrowed set, not the
/// full space), while each guess is scored against the entire candidate
/// space. Returns the chosen guess and its worst-case size, or `None` if
/// `working` is empty.
///
/// Ties keep the earliest guess in working-set order: a later guess wins
/// only with a strictly smaller worst case. The worst cases are computed in
/// parallel but the selection scan is sequential so that tie-breaking stays
/// deterministic.
#[must_use]
pub fn select_guess(rules: &Rules, working: &[Code]) -> Option<(Code, usize)> {
    let worst_cases: Vec<usize> = working
        .par_iter()
        .map(|&guess| largest_partition(rules, guess, rules.all_codes()))
        .collect();

    let mut best: Option<(Code, usize)> = None;
    for (&guess, &worst) in working.iter().zip(&worst_cases) {
        match best {
            Some((_, min)) if worst >= min => {}
            _ => best = Some((guess, worst)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_working_set_returns_none() {
        let rules = Rules::new();
        assert!(select_guess(&rules, &[]).is_none());
    }

    #[test]
    fn single_candidate_is_selected() {
        let rules = Rules::new();
        let only = Code::parse("ygcp").unwrap();

        let (guess, worst) = select_guess(&rules, &[only]).unwrap();
        assert_eq!(guess, only);
        assert!(worst >= 1);
    }

    #[test]
    fn prefers_strictly_smaller_worst_case() {
        // A two-pair guess (worst case 256) beats a monochrome one (625).
        let rules = Rules::new();
        let working = [Code::parse("rrrr").unwrap(), Code::parse("rrgg").unwrap()];

        let (guess, worst) = select_guess(&rules, &working).unwrap();
        assert_eq!(guess, working[1]);
        assert_eq!(worst, 256);
    }

    #[test]
    fn ties_keep_the_earliest_guess() {
        // Both monochrome guesses have worst case 625; the first in
        // working-set order must win.
        let rules = Rules::new();
        let working = [Code::parse("gggg").unwrap(), Code::parse("rrrr").unwrap()];

        let (guess, worst) = select_guess(&rules, &working).unwrap();
        assert_eq!(guess, working[0]);
        assert_eq!(worst, 625);
    }

    #[test]
    fn selection_is_deterministic() {
        let rules = Rules::new();
        let working: Vec<Code> = rules.all_codes().iter().copied().take(40).collect();

        let first = select_guess(&rules, &working).unwrap();
        let second = select_guess(&rules, &working).unwrap();
        assert_eq!(first, second);
    }
}
