//! Candidate filtering and guess metrics
//!
//! Shared by the search-based guessers.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Words from `pool` that would have produced every observed feedback
///
/// # Examples
/// ```
/// use wordle_cli::core::{Feedback, Word};
/// use wordle_cli::guesser::candidates::consistent_candidates;
///
/// let pool = vec![Word::new("slate").unwrap(), Word::new("crane").unwrap()];
/// let guess = Word::new("plate").unwrap();
/// let feedback = Feedback::calculate(&guess, &pool[0]).unwrap();
///
/// let remaining = consistent_candidates(&pool, &[guess], &[feedback]);
/// assert_eq!(remaining, vec![&pool[0]]);
/// ```
pub fn consistent_candidates<'a>(
    pool: &'a [Word],
    guesses: &[Word],
    feedback: &[Feedback],
) -> Vec<&'a Word> {
    pool.iter()
        .filter(|&candidate| {
            guesses.iter().zip(feedback).all(|(guess, observed)| {
                Feedback::calculate(guess, candidate).is_ok_and(|f| f == *observed)
            })
        })
        .collect()
}

/// Shannon entropy of the feedback distribution `guess` induces over `candidates`
///
/// H = -Σ p * log₂(p). Zero when all candidates give the same feedback or the
/// set is empty.
#[must_use]
pub fn feedback_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for &candidate in candidates {
        if let Ok(feedback) = Feedback::calculate(guess, candidate) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    let total = counts.values().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn empty_history_keeps_pool() {
        let pool = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(consistent_candidates(&pool, &[], &[]).len(), 3);
    }

    #[test]
    fn filter_keeps_secret() {
        let pool = words_from_slice(&["irate", "crate", "grate", "slate"]);
        let secret = Word::new("grate").unwrap();
        let guesses = words_from_slice(&["crane", "irate"]);
        let feedback: Vec<Feedback> = guesses
            .iter()
            .map(|g| Feedback::calculate(g, &secret).unwrap())
            .collect();

        let remaining = consistent_candidates(&pool, &guesses, &feedback);
        assert!(remaining.contains(&&secret));
        assert!(remaining.len() < pool.len());
    }

    #[test]
    fn impossible_feedback_leaves_nothing() {
        let pool = words_from_slice(&["crane", "slate"]);
        let guesses = words_from_slice(&["zzzzz"]);
        let feedback = vec![Feedback::parse("GGGGG").unwrap()];
        assert!(consistent_candidates(&pool, &guesses, &feedback).is_empty());
    }

    #[test]
    fn wrong_length_candidates_are_dropped() {
        let pool = words_from_slice(&["crane", "cat"]);
        let guesses = words_from_slice(&["crane"]);
        let feedback = vec![Feedback::parse("-----").unwrap()];
        assert!(consistent_candidates(&pool, &guesses, &feedback).is_empty());
    }

    #[test]
    fn entropy_bounds() {
        let candidates = words_from_slice(&["slate", "irate", "crane", "plumb"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let guess = Word::new("crane").unwrap();
        let entropy = feedback_entropy(&guess, &refs);
        assert!(entropy > 0.0);
        assert!(entropy <= (refs.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn entropy_of_uninformative_guess_is_zero() {
        let candidates = words_from_slice(&["slate", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let guess = Word::new("fjord").unwrap();
        assert!(feedback_entropy(&guess, &refs).abs() < f64::EPSILON);
        assert!(feedback_entropy(&guess, &[]).abs() < f64::EPSILON);
    }
}
