//! Word lists
//!
//! Acceptable guesses and possible secrets, embedded at build time or loaded from
//! files, plus the daily-secret cipher.

pub mod daily;
mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SECRETS, SECRETS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// The two word sets a game is played against
#[derive(Debug, Clone)]
pub struct WordList {
    acceptable: Vec<Word>,
    lookup: FxHashSet<Word>,
    secrets: Vec<Word>,
}

impl WordList {
    /// Build a word list from acceptable guesses and possible secrets
    ///
    /// Secrets are expected to be a subset of the acceptable words but this is
    /// not enforced.
    #[must_use]
    pub fn new(acceptable: Vec<Word>, secrets: Vec<Word>) -> Self {
        let lookup = acceptable.iter().cloned().collect();
        Self {
            acceptable,
            lookup,
            secrets,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(SECRETS),
        )
    }

    /// Drop every word whose length differs from `word_length`
    #[must_use]
    pub fn with_length(self, word_length: usize) -> Self {
        let keep = |words: Vec<Word>| -> Vec<Word> {
            words
                .into_iter()
                .filter(|w| w.len() == word_length)
                .collect()
        };
        Self::new(keep(self.acceptable), keep(self.secrets))
    }

    /// Words accepted as guesses, in list order
    #[inline]
    #[must_use]
    pub fn acceptable(&self) -> &[Word] {
        &self.acceptable
    }

    /// Words that may be chosen as the secret, in list order
    #[inline]
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// Membership test against the acceptable guesses
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Pick a secret uniformly at random
    ///
    /// Returns `None` if there are no secrets.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.secrets.choose(rng)
    }
}
