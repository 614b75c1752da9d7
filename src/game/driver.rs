//! Session driver
//!
//! Runs a [`GameSession`] to completion by asking a [`Guesser`] for each turn.
//! Presentation hooks go through [`SessionObserver`] so the loop itself never
//! touches the terminal.

use super::session::{GameError, GameSession, GuessRecord, InvalidGuess, Outcome};
use crate::guesser::{Guesser, GuesserMove};
use crate::wordlists::WordList;
use tracing::{info, warn};

/// What to do when a guesser proposes an unacceptable word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Ask again as often as needed (human players)
    Interactive,
    /// Allow this many consecutive retries, then forfeit the game
    Automated { max_retries: usize },
}

impl RetryPolicy {
    /// One retry, then forfeit
    pub const AUTOMATED: Self = Self::Automated { max_retries: 1 };

    /// Whether `consecutive_invalid` rejections in a row end the game
    #[must_use]
    pub const fn forfeits_after(self, consecutive_invalid: usize) -> bool {
        match self {
            Self::Interactive => false,
            Self::Automated { max_retries } => consecutive_invalid > max_retries,
        }
    }
}

/// Presentation hooks called while a session is driven
///
/// All methods default to doing nothing.
pub trait SessionObserver {
    fn on_start(&mut self, _session: &GameSession) {}

    /// A guess was proposed and is about to be validated
    fn on_guess_proposed(&mut self, _session: &GameSession, _candidate: &str) {}

    fn on_rejected(&mut self, _session: &GameSession, _candidate: &str, _reason: &InvalidGuess) {}

    fn on_scored(&mut self, _session: &GameSession, _record: &GuessRecord) {}

    fn on_finished(&mut self, _session: &GameSession, _outcome: Outcome) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Drive `session` until it finishes and return the outcome
///
/// A session that is already finished returns its outcome immediately.
///
/// # Examples
/// ```
/// use wordle_cli::config::GameConfig;
/// use wordle_cli::core::Word;
/// use wordle_cli::game::{GameSession, NoopObserver, Outcome, RetryPolicy, play_session};
/// use wordle_cli::guesser::LoserGuesser;
/// use wordle_cli::wordlists::WordList;
///
/// let words = WordList::embedded();
/// let mut session = GameSession::new(Word::new("slate").unwrap(), GameConfig::default()).unwrap();
///
/// let outcome = play_session(
///     &mut session,
///     &words,
///     &mut LoserGuesser,
///     RetryPolicy::AUTOMATED,
///     &mut NoopObserver,
/// );
/// assert_eq!(outcome, Outcome::Lost);
/// ```
pub fn play_session<G, O>(
    session: &mut GameSession,
    words: &WordList,
    guesser: &mut G,
    policy: RetryPolicy,
    observer: &mut O,
) -> Outcome
where
    G: Guesser + ?Sized,
    O: SessionObserver + ?Sized,
{
    if let Some(outcome) = session.outcome() {
        return outcome;
    }

    observer.on_start(session);
    let mut consecutive_invalid = 0;

    let outcome = loop {
        if let Some(outcome) = session.outcome() {
            break outcome;
        }

        let guesses = session.guesses();
        let feedback = session.feedback();
        let candidate = match guesser.next_guess(words.acceptable(), &guesses, &feedback) {
            GuesserMove::Guess(candidate) => candidate,
            GuesserMove::Quit => break abandon(session),
        };

        observer.on_guess_proposed(session, &candidate);
        match session.submit(&candidate, words) {
            Ok(_) => {
                consecutive_invalid = 0;
                if let Some(record) = session.records().last() {
                    observer.on_scored(session, record);
                }
            }
            Err(GameError::InvalidGuess(reason)) => {
                observer.on_rejected(session, &candidate, &reason);
                consecutive_invalid += 1;
                if policy.forfeits_after(consecutive_invalid) {
                    warn!(
                        candidate = %candidate,
                        rejections = consecutive_invalid,
                        "guesser keeps proposing invalid words; forfeiting"
                    );
                    break abandon(session);
                }
            }
            Err(GameError::GameOver) => break session.outcome().unwrap_or(Outcome::Abandoned),
        }
    };

    info!(outcome = %outcome, secret = %session.secret(), turns = session.records().len(), "game finished");
    observer.on_finished(session, outcome);
    outcome
}

fn abandon(session: &mut GameSession) -> Outcome {
    session
        .abandon()
        .unwrap_or_else(|_| session.outcome().unwrap_or(Outcome::Abandoned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Feedback, Word};
    use crate::guesser::{FilterGuesser, LoserGuesser};
    use crate::wordlists::loader::words_from_slice;
    use std::collections::VecDeque;

    /// Plays a fixed list of moves, then quits
    struct Scripted {
        moves: VecDeque<GuesserMove>,
        calls: usize,
        seen_history: Vec<usize>,
    }

    impl Scripted {
        fn new(words: &[&str]) -> Self {
            Self {
                moves: words
                    .iter()
                    .map(|w| GuesserMove::Guess((*w).to_string()))
                    .collect(),
                calls: 0,
                seen_history: Vec::new(),
            }
        }
    }

    impl Guesser for Scripted {
        fn next_guess(&mut self, _: &[Word], guesses: &[Word], feedback: &[Feedback]) -> GuesserMove {
            assert_eq!(guesses.len(), feedback.len());
            self.calls += 1;
            self.seen_history.push(guesses.len());
            self.moves.pop_front().unwrap_or(GuesserMove::Quit)
        }
    }

    #[derive(Default)]
    struct Recorder {
        started: usize,
        proposed: Vec<String>,
        rejected: Vec<InvalidGuess>,
        scored: usize,
        finished: Option<Outcome>,
    }

    impl SessionObserver for Recorder {
        fn on_start(&mut self, _: &GameSession) {
            self.started += 1;
        }
        fn on_guess_proposed(&mut self, _: &GameSession, candidate: &str) {
            self.proposed.push(candidate.to_string());
        }
        fn on_rejected(&mut self, _: &GameSession, _: &str, reason: &InvalidGuess) {
            self.rejected.push(reason.clone());
        }
        fn on_scored(&mut self, _: &GameSession, _: &GuessRecord) {
            self.scored += 1;
        }
        fn on_finished(&mut self, _: &GameSession, outcome: Outcome) {
            self.finished = Some(outcome);
        }
    }

    fn words() -> WordList {
        WordList::new(
            words_from_slice(&["crane", "slate", "plate", "irate", "grate", "crate", "loses"]),
            words_from_slice(&["slate", "plate"]),
        )
    }

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap(), GameConfig::default()).unwrap()
    }

    #[test]
    fn scripted_win_reports_guess_count() {
        let words = words();
        let mut s = session("slate");
        let mut guesser = Scripted::new(&["crane", "plate", "slate"]);
        let mut recorder = Recorder::default();

        let outcome = play_session(&mut s, &words, &mut guesser, RetryPolicy::AUTOMATED, &mut recorder);

        assert_eq!(outcome, Outcome::Won(3));
        assert_eq!(recorder.started, 1);
        assert_eq!(recorder.scored, 3);
        assert_eq!(recorder.finished, Some(Outcome::Won(3)));
        // Full history is supplied on every call
        assert_eq!(guesser.seen_history, vec![0, 1, 2]);
    }

    #[test]
    fn loser_exhausts_attempts() {
        let words = words();
        let mut s = session("slate");
        let outcome = play_session(
            &mut s,
            &words,
            &mut LoserGuesser,
            RetryPolicy::AUTOMATED,
            &mut NoopObserver,
        );

        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(outcome.code(), 0);
        assert_eq!(s.records().len(), 6);
    }

    #[test]
    fn two_invalid_words_in_a_row_forfeit() {
        let words = words();
        let mut s = session("slate");
        let mut guesser = Scripted::new(&["zzzzz", "qqqqq", "slate"]);
        let mut recorder = Recorder::default();

        let outcome = play_session(&mut s, &words, &mut guesser, RetryPolicy::AUTOMATED, &mut recorder);

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(guesser.calls, 2);
        assert_eq!(recorder.rejected.len(), 2);
        assert!(s.records().is_empty());
    }

    #[test]
    fn single_invalid_word_is_retried() {
        let words = words();
        let mut s = session("slate");
        let mut guesser = Scripted::new(&["zzzzz", "crane", "qqqqq", "slate"]);

        let outcome = play_session(
            &mut s,
            &words,
            &mut guesser,
            RetryPolicy::AUTOMATED,
            &mut NoopObserver,
        );

        // Rejections are not consecutive, so the game continues
        assert_eq!(outcome, Outcome::Won(2));
        assert_eq!(guesser.calls, 4);
    }

    #[test]
    fn interactive_policy_keeps_asking() {
        let words = words();
        let mut s = session("plate");
        let mut guesser = Scripted::new(&["abc", "zzzzz", "qqqqq", "xxxxx", "plate"]);
        let mut recorder = Recorder::default();

        let outcome = play_session(&mut s, &words, &mut guesser, RetryPolicy::Interactive, &mut recorder);

        assert_eq!(outcome, Outcome::Won(1));
        assert_eq!(recorder.rejected[0], InvalidGuess::TooShort);
        assert_eq!(recorder.rejected.len(), 4);
    }

    #[test]
    fn quit_abandons_and_keeps_guesses() {
        let words = words();
        let mut s = session("slate");
        let mut guesser = Scripted::new(&["crane"]);

        let outcome = play_session(
            &mut s,
            &words,
            &mut guesser,
            RetryPolicy::Interactive,
            &mut NoopObserver,
        );

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(outcome.code(), -1);
        assert_eq!(s.records().len(), 1);
    }

    #[test]
    fn finished_session_is_not_replayed() {
        let words = words();
        let mut s = session("slate");
        s.submit("slate", &words).unwrap();

        let mut guesser = Scripted::new(&["crane"]);
        let mut recorder = Recorder::default();
        let outcome = play_session(&mut s, &words, &mut guesser, RetryPolicy::AUTOMATED, &mut recorder);

        assert_eq!(outcome, Outcome::Won(1));
        assert_eq!(guesser.calls, 0);
        assert_eq!(recorder.started, 0);
    }

    #[test]
    fn filter_guesser_always_wins_small_list() {
        let words = words();
        for seed in 0..5 {
            let mut s = session("plate");
            let mut guesser = FilterGuesser::seeded(seed);
            let outcome = play_session(
                &mut s,
                &words,
                &mut guesser,
                RetryPolicy::AUTOMATED,
                &mut NoopObserver,
            );
            assert!(matches!(outcome, Outcome::Won(_)));
        }
    }

    #[test]
    fn retry_policy_thresholds() {
        assert!(!RetryPolicy::AUTOMATED.forfeits_after(1));
        assert!(RetryPolicy::AUTOMATED.forfeits_after(2));
        assert!(RetryPolicy::Automated { max_retries: 0 }.forfeits_after(1));
        assert!(!RetryPolicy::Interactive.forfeits_after(100));
    }
}
