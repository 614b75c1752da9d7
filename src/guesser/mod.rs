//! Guessers
//!
//! A [`Guesser`] produces the next guess from the game history. Human input and
//! automated strategies implement the same trait; the session driver always
//! supplies the full history, so strategies need not remember anything.

pub mod candidates;
mod entropy;
mod filter;
pub mod human;
mod loser;

pub use entropy::EntropyGuesser;
pub use filter::FilterGuesser;
pub use human::HumanGuesser;
pub use loser::LoserGuesser;

use crate::core::{Feedback, Word};
use crate::wordlists::WordList;
use thiserror::Error;

/// What a guesser wants to do this turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuesserMove {
    /// Submit this word; the session validates it
    Guess(String),
    /// Give up the game
    Quit,
}

/// Something that can play the game
pub trait Guesser {
    /// Choose the next guess
    ///
    /// `guesses` and `feedback` are parallel, in turn order, and empty on the first
    /// turn. The returned word need not be acceptable; the session rejects it if not.
    fn next_guess(
        &mut self,
        acceptable: &[Word],
        guesses: &[Word],
        feedback: &[Feedback],
    ) -> GuesserMove;
}

impl<G: Guesser + ?Sized> Guesser for Box<G> {
    fn next_guess(
        &mut self,
        acceptable: &[Word],
        guesses: &[Word],
        feedback: &[Feedback],
    ) -> GuesserMove {
        (**self).next_guess(acceptable, guesses, feedback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuesserError {
    #[error("Unknown AI player '{0}' (expected one of: loser, filter, entropy)")]
    Unknown(String),
}

/// Automated guessers selectable by name
///
/// Allows runtime selection while keeping static dispatch.
pub enum GuesserKind {
    /// Always guesses LOSES, which is never a secret
    Loser(LoserGuesser),
    /// Random word consistent with all feedback so far
    Filter(FilterGuesser),
    /// Maximum expected information
    Entropy(EntropyGuesser),
}

impl GuesserKind {
    /// Names accepted by [`GuesserKind::from_name`]
    pub const NAMES: [&'static str; 3] = ["loser", "filter", "entropy"];

    /// Create a guesser from its name
    ///
    /// Search-based guessers narrow their candidates to the list's possible secrets.
    ///
    /// # Errors
    /// Returns `GuesserError::Unknown` for unrecognized names.
    pub fn from_name(name: &str, words: &WordList) -> Result<Self, GuesserError> {
        match name.to_ascii_lowercase().as_str() {
            "loser" | "ai_loser" => Ok(Self::Loser(LoserGuesser)),
            "filter" | "random" => Ok(Self::Filter(
                FilterGuesser::new().with_candidates(words.secrets().to_vec()),
            )),
            "entropy" => Ok(Self::Entropy(
                EntropyGuesser::new().with_candidates(words.secrets().to_vec()),
            )),
            _ => Err(GuesserError::Unknown(name.to_string())),
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loser(_) => "loser",
            Self::Filter(_) => "filter",
            Self::Entropy(_) => "entropy",
        }
    }
}

impl Guesser for GuesserKind {
    fn next_guess(
        &mut self,
        acceptable: &[Word],
        guesses: &[Word],
        feedback: &[Feedback],
    ) -> GuesserMove {
        match self {
            Self::Loser(g) => g.next_guess(acceptable, guesses, feedback),
            Self::Filter(g) => g.next_guess(acceptable, guesses, feedback),
            Self::Entropy(g) => g.next_guess(acceptable, guesses, feedback),
        }
    }
}
