//! The losing player
//!
//! Always guesses LOSES: an acceptable word that is never chosen as a secret, so
//! every game ends lost. Useful for exercising a 0% win rate.

use super::{Guesser, GuesserMove};
use crate::core::{Feedback, Word};

/// The word this player always submits
pub const LOSING_WORD: &str = "LOSES";

#[derive(Debug, Clone, Copy, Default)]
pub struct LoserGuesser;

impl Guesser for LoserGuesser {
    fn next_guess(&mut self, _: &[Word], _: &[Word], _: &[Feedback]) -> GuesserMove {
        GuesserMove::Guess(LOSING_WORD.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_guesses_loses() {
        let mut guesser = LoserGuesser;
        let guesses = vec![Word::new("loses").unwrap()];
        let feedback = vec![Feedback::parse("-----").unwrap()];

        assert_eq!(
            guesser.next_guess(&[], &[], &[]),
            GuesserMove::Guess("LOSES".to_string())
        );
        assert_eq!(
            guesser.next_guess(&[], &guesses, &feedback),
            GuesserMove::Guess("LOSES".to_string())
        );
    }
}
