//! Remaining-letters hint
//!
//! The set of alphabet letters not yet ruled out by Absent feedback. This is a
//! player-facing aid only; scoring never consults it.

use super::{Feedback, LetterScore, Word};
use std::fmt;

/// The 26 uppercase letters, in order
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters still in play, stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemainingLetters(u32);

impl RemainingLetters {
    const FULL: u32 = (1 << 26) - 1;

    /// Every letter available
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    /// Derive the remaining letters from a guess history
    ///
    /// A letter is eliminated as soon as it scores Absent at any position, even if
    /// the same guess credited another copy of it.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Feedback, RemainingLetters, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// let remaining = RemainingLetters::from_history([(&guess, &feedback)]);
    /// assert!(!remaining.contains(b'C'));
    /// assert!(remaining.contains(b'A'));
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        history
            .into_iter()
            .fold(Self::all(), |remaining, (guess, feedback)| {
                remaining.eliminate(guess, feedback)
            })
    }

    /// Remove every letter of `guess` that scored Absent somewhere
    #[must_use]
    pub fn eliminate(self, guess: &Word, feedback: &Feedback) -> Self {
        let removed = guess
            .letters()
            .iter()
            .zip(feedback.scores())
            .filter(|&(_, &score)| score == LetterScore::Absent)
            .fold(0u32, |mask, (&letter, _)| mask | bit(letter));
        Self(self.0 & !removed)
    }

    /// Check whether an uppercase letter is still in play
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    /// Number of letters still in play
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remaining letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ALPHABET
            .bytes()
            .filter(move |&b| self.contains(b))
            .map(char::from)
    }
}

impl Default for RemainingLetters {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for RemainingLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.iter() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

fn bit(letter: u8) -> u32 {
    if letter.is_ascii_uppercase() {
        1 << (letter - b'A')
    } else {
        0
    }
}
