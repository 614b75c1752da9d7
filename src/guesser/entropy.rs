//! Entropy-maximizing player
//!
//! Picks the acceptable word whose feedback splits the remaining candidates most
//! evenly, measured by Shannon entropy.

use super::candidates::{consistent_candidates, feedback_entropy};
use super::{Guesser, GuesserMove};
use crate::core::{Feedback, Word};
use rayon::prelude::*;

/// Expected-information guesser
///
/// With two or fewer candidates left it guesses a candidate directly.
#[derive(Debug, Clone, Default)]
pub struct EntropyGuesser {
    candidates: Option<Vec<Word>>,
}

impl EntropyGuesser {
    #[must_use]
    pub const fn new() -> Self {
        Self { candidates: None }
    }

    /// Restrict the candidate answers to this pool, typically the possible secrets
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<Word>) -> Self {
        self.candidates = Some(candidates);
        self
    }
}

impl Guesser for EntropyGuesser {
    fn next_guess(
        &mut self,
        acceptable: &[Word],
        guesses: &[Word],
        feedback: &[Feedback],
    ) -> GuesserMove {
        let pool = self.candidates.as_deref().unwrap_or(acceptable);
        let remaining = consistent_candidates(pool, guesses, feedback);

        match remaining.as_slice() {
            [] => GuesserMove::Quit,
            [only] | [only, _] => GuesserMove::Guess(only.text().to_string()),
            _ => select_best_guess(acceptable, &remaining)
                .map_or(GuesserMove::Quit, |w| GuesserMove::Guess(w.text().to_string())),
        }
    }
}

/// Highest-entropy word from `guess_pool`
///
/// Ties go to words that could still be the answer, then to the earlier word in
/// the pool, so the choice is deterministic.
fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[&Word]) -> Option<&'a Word> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let entropy = feedback_entropy(guess, candidates);
            let is_candidate = candidates.contains(&guess);
            (index, guess, entropy, is_candidate)
        })
        .max_by(|a, b| {
            a.2.total_cmp(&b.2)
                .then(a.3.cmp(&b.3))
                .then_with(|| b.0.cmp(&a.0))
        })
        .map(|(_, guess, _, _)| guess)
}
