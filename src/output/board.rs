//! Terminal game board
//!
//! A [`SessionObserver`] that draws the game as it is played.

use super::display;
use crate::game::{GameSession, GuessRecord, InvalidGuess, Outcome, SessionObserver};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Draws each turn to stdout
#[derive(Debug, Clone, Copy)]
pub struct TerminalBoard {
    /// Type out proposed guesses before scoring them (for watching automated players)
    echo_guesses: bool,
    /// Pause after echoing a guess and before showing a rejection clears
    delay: Duration,
}

impl TerminalBoard {
    /// Board for a human typing their own guesses
    #[must_use]
    pub const fn interactive(flash: Duration) -> Self {
        Self {
            echo_guesses: false,
            delay: flash,
        }
    }

    /// Board for watching an automated player
    #[must_use]
    pub const fn watching(delay: Duration) -> Self {
        Self {
            echo_guesses: true,
            delay,
        }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl SessionObserver for TerminalBoard {
    fn on_start(&mut self, session: &GameSession) {
        display::print_title(session.config());
        display::print_remaining_letters(session.remaining_letters());
    }

    fn on_guess_proposed(&mut self, session: &GameSession, candidate: &str) {
        if self.echo_guesses {
            if let Err(e) = display::print_typing(candidate, session.config().word_length) {
                debug!(error = %e, "could not draw proposed guess");
            }
            self.pause();
        }
    }

    fn on_rejected(&mut self, _session: &GameSession, _candidate: &str, reason: &InvalidGuess) {
        if let Err(e) = display::flash_message(&reason.to_string(), self.delay) {
            debug!(error = %e, "could not show rejection");
        }
    }

    fn on_scored(&mut self, session: &GameSession, record: &GuessRecord) {
        if self.echo_guesses
            && let Err(e) = display::clear_typing()
        {
            debug!(error = %e, "could not clear typed guess");
        }
        display::print_scored(
            &record.guess,
            &record.feedback,
            session.records().len(),
            session.config().max_attempts,
        );
        if !session.is_finished() {
            display::print_remaining_letters(session.remaining_letters());
        }
    }

    fn on_finished(&mut self, session: &GameSession, outcome: Outcome) {
        display::print_outcome(session, outcome);
    }
}
