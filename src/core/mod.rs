//! Core domain types for the game
//!
//! Words, feedback scoring and the remaining-letters hint. Everything here is
//! pure and free of I/O.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterScore, score};
pub use letters::{ALPHABET, RemainingLetters};
pub use word::{Word, WordError};
