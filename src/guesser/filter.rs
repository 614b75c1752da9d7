//! Random consistent-candidate player

use super::candidates::consistent_candidates;
use super::{Guesser, GuesserMove};
use crate::core::{Feedback, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Guesses a random word that agrees with every feedback so far
///
/// Candidates come from the configured pool, or from the acceptable words when no
/// pool is set.
pub struct FilterGuesser {
    candidates: Option<Vec<Word>>,
    rng: StdRng,
}

impl FilterGuesser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic choices for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            candidates: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restrict guesses to this pool, typically the possible secrets
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<Word>) -> Self {
        self.candidates = Some(candidates);
        self
    }
}

impl Default for FilterGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl Guesser for FilterGuesser {
    fn next_guess(
        &mut self,
        acceptable: &[Word],
        guesses: &[Word],
        feedback: &[Feedback],
    ) -> GuesserMove {
        let pool = self.candidates.as_deref().unwrap_or(acceptable);
        let remaining = consistent_candidates(pool, guesses, feedback);

        match remaining.choose(&mut self.rng) {
            Some(word) => GuesserMove::Guess(word.text().to_string()),
            None => GuesserMove::Quit,
        }
    }
}
