//! Feedback scoring
//!
//! Feedback is one [`LetterScore`] per position of a guess:
//! - Absent (0): letter does not occur in any unmatched position of the secret
//! - Present (1): letter occurs elsewhere in the secret
//! - Correct (2): letter matches the secret at this position
//!
//! The numeric codes are the ones AI players and logs see.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Score for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LetterScore {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl LetterScore {
    /// Integer code (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error raised when scoring is called with unusable input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Guess has {guess} letters but secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}

/// Per-position scoring of one guess against a secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterScore>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as Correct and remove them from the pool
    ///    of unmatched secret letters
    /// 2. Second pass, left to right: a letter still in the pool is Present and
    ///    consumes one instance; anything else is Absent
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Feedback, Word};
    ///
    /// let guess = Word::new("adieu").unwrap();
    /// let secret = Word::new("dials").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(feedback.codes(), vec![1, 1, 1, 0, 0]);
    /// ```
    pub fn calculate(guess: &Word, secret: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != secret.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let mut result = vec![LetterScore::Absent; guess.len()];
        let mut unmatched = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                result[i] = LetterScore::Correct;
                if let Some(count) = unmatched.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, consuming one unmatched instance each
        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == LetterScore::Correct {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Scores in position order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Number of positions with the given score
    #[must_use]
    pub fn count(&self, score: LetterScore) -> usize {
        self.0.iter().filter(|&&s| s == score).count()
    }

    /// Integer codes, one per position
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.code()).collect()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(LetterScore::Correct),
                'Y' | 'y' | '🟨' => Some(LetterScore::Present),
                '-' | '_' | '⬜' => Some(LetterScore::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }
}

/// Score `guess` against `secret`; shorthand for [`Feedback::calculate`]
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
pub fn score(guess: &Word, secret: &Word) -> Result<Feedback, FeedbackError> {
    Feedback::calculate(guess, secret)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            let ch = match s {
                LetterScore::Correct => 'G',
                LetterScore::Present => 'Y',
                LetterScore::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
