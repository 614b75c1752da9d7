//! Game session state machine
//!
//! A session holds one secret and the guesses made against it. Each accepted
//! guess is scored and recorded; the session then either finishes (won or lost)
//! or waits for the next guess. Rejected guesses do not consume a turn.

use crate::config::GameConfig;
use crate::core::{Feedback, FeedbackError, LetterScore, RemainingLetters, Word, WordError};
use crate::wordlists::WordList;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Integer code reported for an abandoned game
pub const ABANDONED_CODE: i32 = -1;

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Solved on the given guess (1-based)
    Won(usize),
    /// Ran out of attempts
    Lost,
    /// The player quit, or an automated player forfeited
    Abandoned,
}

impl Outcome {
    /// Integer encoding: guesses taken when won, 0 when lost, -1 when abandoned
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Won(guesses) => i32::try_from(guesses).unwrap_or(i32::MAX),
            Self::Lost => 0,
            Self::Abandoned => ABANDONED_CODE,
        }
    }

    /// Inverse of [`Outcome::code`]
    ///
    /// Returns `None` for codes below the abandoned sentinel.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            ABANDONED_CODE => Some(Self::Abandoned),
            0 => Some(Self::Lost),
            n if n > 0 => usize::try_from(n).ok().map(Self::Won),
            _ => None,
        }
    }

    /// Whether this outcome belongs in the statistics
    #[must_use]
    pub const fn is_recordable(self) -> bool {
        !matches!(self, Self::Abandoned)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(1) => write!(f, "won in 1 guess"),
            Self::Won(n) => write!(f, "won in {n} guesses"),
            Self::Lost => write!(f, "lost"),
            Self::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Finished(Outcome),
}

/// Why a candidate guess was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("Not enough letters")]
    TooShort,
    #[error("Too many letters")]
    TooLong,
    #[error("Not a word: {0}")]
    Malformed(#[from] WordError),
    #[error("Not in word list")]
    NotInWordList,
}

/// Errors from driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0}")]
    InvalidGuess(#[from] InvalidGuess),
    #[error("The game is already over")]
    GameOver,
    #[error("Secret has {found} letters but the game uses {expected}")]
    SecretLength { expected: usize, found: usize },
    #[error("{0}")]
    Scoring(#[from] FeedbackError),
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One game against a fixed secret
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    config: GameConfig,
    records: Vec<GuessRecord>,
    state: SessionState,
}

impl GameSession {
    /// Start a session
    ///
    /// # Errors
    /// Returns `GameError::SecretLength` unless the secret has
    /// `config.word_length` letters.
    pub fn new(secret: Word, config: GameConfig) -> Result<Self, GameError> {
        if secret.len() != config.word_length {
            return Err(GameError::SecretLength {
                expected: config.word_length,
                found: secret.len(),
            });
        }
        debug!(secret_len = secret.len(), max_attempts = config.max_attempts, "session started");
        Ok(Self {
            secret,
            config,
            records: Vec::with_capacity(config.max_attempts),
            state: SessionState::AwaitingGuess,
        })
    }

    /// Check a candidate guess without changing the session
    ///
    /// # Errors
    /// Returns `InvalidGuess` if the candidate has the wrong length, is not made of
    /// letters, or is not an acceptable word.
    pub fn validate(&self, candidate: &str, words: &WordList) -> Result<Word, InvalidGuess> {
        let length = candidate.chars().count();
        if length < self.config.word_length {
            return Err(InvalidGuess::TooShort);
        }
        if length > self.config.word_length {
            return Err(InvalidGuess::TooLong);
        }

        let word = Word::new(candidate)?;
        if !words.contains(&word) {
            return Err(InvalidGuess::NotInWordList);
        }
        Ok(word)
    }

    /// Submit a guess for the current turn
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session has already finished
    /// - `GameError::InvalidGuess` if validation fails; the turn is not consumed
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::config::GameConfig;
    /// use wordle_cli::core::Word;
    /// use wordle_cli::game::{GameSession, Outcome, SessionState};
    /// use wordle_cli::wordlists::WordList;
    ///
    /// let words = WordList::embedded();
    /// let secret = Word::new("slate").unwrap();
    /// let mut session = GameSession::new(secret, GameConfig::default()).unwrap();
    ///
    /// session.submit("crane", &words).unwrap();
    /// let state = session.submit("slate", &words).unwrap();
    /// assert_eq!(state, SessionState::Finished(Outcome::Won(2)));
    /// ```
    pub fn submit(&mut self, candidate: &str, words: &WordList) -> Result<SessionState, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        let guess = self.validate(candidate, words)?;
        let feedback = Feedback::calculate(&guess, &self.secret)?;

        let solved = feedback.is_solved();
        debug!(
            turn = self.records.len() + 1,
            guess = %guess,
            feedback = %feedback,
            correct = feedback.count(LetterScore::Correct),
            present = feedback.count(LetterScore::Present),
            "guess scored"
        );
        self.records.push(GuessRecord { guess, feedback });

        if solved {
            self.state = SessionState::Finished(Outcome::Won(self.records.len()));
        } else if self.records.len() >= self.config.max_attempts {
            self.state = SessionState::Finished(Outcome::Lost);
        }

        Ok(self.state)
    }

    /// Quit the game, keeping any guesses already recorded
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the session has already finished.
    pub fn abandon(&mut self) -> Result<Outcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        debug!(turns = self.records.len(), "session abandoned");
        self.state = SessionState::Finished(Outcome::Abandoned);
        Ok(Outcome::Abandoned)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    /// Terminal outcome, once the session has finished
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Finished(outcome) => Some(outcome),
            SessionState::AwaitingGuess => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Recorded guesses in turn order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Guesses in turn order
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.records.iter().map(|r| r.guess.clone()).collect()
    }

    /// Feedback in turn order
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.records.iter().map(|r| r.feedback.clone()).collect()
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.records.len())
    }

    /// Letters not yet eliminated by Absent feedback
    #[must_use]
    pub fn remaining_letters(&self) -> RemainingLetters {
        RemainingLetters::from_history(self.records.iter().map(|r| (&r.guess, &r.feedback)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const WRONG: [&str; 6] = ["crane", "irate", "grate", "crate", "trace", "plate"];

    fn words() -> WordList {
        let mut all = vec!["slate", "loses", "abc"];
        all.extend(WRONG);
        WordList::new(words_from_slice(&all), words_from_slice(&["slate"]))
    }

    fn session() -> GameSession {
        GameSession::new(Word::new("slate").unwrap(), GameConfig::default()).unwrap()
    }

    #[test]
    fn secret_of_wrong_length_is_refused() {
        let result = GameSession::new(Word::new("cranes").unwrap(), GameConfig::default());
        assert!(matches!(
            result,
            Err(GameError::SecretLength { expected: 5, found: 6 })
        ));

        let short = GameSession::new(Word::new("abc").unwrap(), GameConfig::default());
        assert!(matches!(
            short,
            Err(GameError::SecretLength { expected: 5, found: 3 })
        ));

        let six = GameConfig::new(6, 6);
        assert!(GameSession::new(Word::new("cranes").unwrap(), six).is_ok());
    }

    #[test]
    fn new_session_awaits_guess() {
        let s = session();
        assert_eq!(s.state(), SessionState::AwaitingGuess);
        assert_eq!(s.outcome(), None);
        assert_eq!(s.attempts_left(), 6);
        assert!(s.records().is_empty());
        assert_eq!(s.remaining_letters(), RemainingLetters::all());
    }

    #[test]
    fn win_on_guess_k_reports_k() {
        let words = words();
        for k in 1..=6 {
            let mut s = session();
            for wrong in &WRONG[..k - 1] {
                assert_eq!(s.submit(wrong, &words), Ok(SessionState::AwaitingGuess));
            }
            assert_eq!(
                s.submit("slate", &words),
                Ok(SessionState::Finished(Outcome::Won(k)))
            );
            assert_eq!(s.outcome().unwrap().code(), k as i32);
            assert_eq!(s.records().len(), k);
        }
    }

    #[test]
    fn exhausting_attempts_loses() {
        let words = words();
        let mut s = session();
        for wrong in &WRONG[..5] {
            s.submit(wrong, &words).unwrap();
        }
        assert_eq!(
            s.submit(WRONG[5], &words),
            Ok(SessionState::Finished(Outcome::Lost))
        );
        assert_eq!(s.outcome().unwrap().code(), 0);
        assert_eq!(s.attempts_left(), 0);
    }

    #[test]
    fn invalid_guess_does_not_consume_turn() {
        let words = words();
        let mut s = session();

        assert_eq!(
            s.submit("zzzzz", &words),
            Err(GameError::InvalidGuess(InvalidGuess::NotInWordList))
        );
        assert_eq!(
            s.submit("abc", &words),
            Err(GameError::InvalidGuess(InvalidGuess::TooShort))
        );
        assert_eq!(
            s.submit("slates", &words),
            Err(GameError::InvalidGuess(InvalidGuess::TooLong))
        );
        assert!(matches!(
            s.submit("sl4te", &words),
            Err(GameError::InvalidGuess(InvalidGuess::Malformed(_)))
        ));

        assert!(s.records().is_empty());
        assert_eq!(s.state(), SessionState::AwaitingGuess);
        assert_eq!(s.attempts_left(), 6);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let words = words();
        let mut s = session();
        assert_eq!(
            s.submit("SlAtE", &words),
            Ok(SessionState::Finished(Outcome::Won(1)))
        );
    }

    #[test]
    fn finished_session_rejects_more_guesses() {
        let words = words();
        let mut s = session();
        s.submit("slate", &words).unwrap();

        assert_eq!(s.submit("crane", &words), Err(GameError::GameOver));
        assert_eq!(s.abandon(), Err(GameError::GameOver));
        assert_eq!(s.records().len(), 1);
    }

    #[test]
    fn abandon_keeps_history() {
        let words = words();
        let mut s = session();
        s.submit("crane", &words).unwrap();

        assert_eq!(s.abandon(), Ok(Outcome::Abandoned));
        assert_eq!(s.outcome(), Some(Outcome::Abandoned));
        assert_eq!(s.records().len(), 1);
        assert_eq!(s.outcome().unwrap().code(), ABANDONED_CODE);
        assert_eq!(s.submit("slate", &words), Err(GameError::GameOver));
    }

    #[test]
    fn records_hold_guess_and_feedback_in_order() {
        let words = words();
        let mut s = session();
        s.submit("crane", &words).unwrap();
        s.submit("plate", &words).unwrap();

        assert_eq!(s.guesses()[0].text(), "CRANE");
        assert_eq!(s.guesses()[1].text(), "PLATE");
        assert_eq!(s.feedback()[0].codes(), vec![0, 0, 2, 0, 2]);
        assert_eq!(s.feedback()[1].codes(), vec![0, 2, 2, 2, 2]);
    }

    #[test]
    fn remaining_letters_follow_history() {
        let words = words();
        let mut s = session();
        s.submit("crane", &words).unwrap();

        let remaining = s.remaining_letters();
        assert!(!remaining.contains(b'C'));
        assert!(!remaining.contains(b'R'));
        assert!(!remaining.contains(b'N'));
        assert!(remaining.contains(b'A'));
        assert_eq!(remaining.len(), 23);
    }

    #[test]
    fn outcome_codes_round_trip() {
        for outcome in [Outcome::Won(1), Outcome::Won(6), Outcome::Lost, Outcome::Abandoned] {
            assert_eq!(Outcome::from_code(outcome.code()), Some(outcome));
        }
        assert_eq!(Outcome::from_code(-2), None);
        assert!(!Outcome::Abandoned.is_recordable());
        assert!(Outcome::Lost.is_recordable());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Won(1).to_string(), "won in 1 guess");
        assert_eq!(Outcome::Won(3).to_string(), "won in 3 guesses");
        assert_eq!(Outcome::Lost.to_string(), "lost");
    }
}
