//! Keyboard player
//!
//! Collects a guess one key at a time. Letters fill the row up to the word
//! length, Backspace removes the last letter, Enter submits a full row and
//! Escape quits. Word-list checks are left to the session; a row it turns away
//! comes back for editing on the next ask.

use super::{Guesser, GuesserMove};
use crate::core::{Feedback, Word};
use crate::interactive::{Key, KeySource, TerminalKeys};
use crate::output::display;
use std::time::Duration;
use tracing::warn;

/// Message flashed when Enter is pressed on a partial row
pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";

/// A person typing guesses
#[derive(Debug)]
pub struct HumanGuesser<K: KeySource = TerminalKeys> {
    keys: K,
    word_length: usize,
    flash: Duration,
    /// Last submitted row and the turn it was submitted on
    submitted: Option<(usize, String)>,
}

impl HumanGuesser<TerminalKeys> {
    /// Read from the terminal
    #[must_use]
    pub const fn terminal(word_length: usize, flash: Duration) -> Self {
        Self::new(TerminalKeys, word_length, flash)
    }
}

impl<K: KeySource> HumanGuesser<K> {
    #[must_use]
    pub const fn new(keys: K, word_length: usize, flash: Duration) -> Self {
        Self {
            keys,
            word_length,
            flash,
            submitted: None,
        }
    }

    fn read_row(&mut self, turn: usize) -> GuesserMove {
        // Same turn as the last submission means it was rejected
        let mut typed = match self.submitted.take() {
            Some((submitted_turn, row)) if submitted_turn == turn => row,
            _ => String::with_capacity(self.word_length),
        };
        self.redraw(&typed);

        loop {
            let key = match self.keys.next_key() {
                Ok(key) => key,
                Err(e) => {
                    warn!(error = %e, "keyboard input failed; quitting");
                    return GuesserMove::Quit;
                }
            };

            match key {
                Key::Letter(c) if typed.len() < self.word_length => typed.push(c),
                Key::Letter(_) => {}
                Key::Backspace => {
                    typed.pop();
                }
                Key::Enter if typed.len() < self.word_length => {
                    if let Err(e) = display::flash_message(NOT_ENOUGH_LETTERS, self.flash) {
                        warn!(error = %e, "could not show message");
                    }
                }
                Key::Enter => {
                    if let Err(e) = display::clear_typing() {
                        warn!(error = %e, "could not clear input row");
                    }
                    self.submitted = Some((turn, typed.clone()));
                    return GuesserMove::Guess(typed);
                }
                Key::Escape => {
                    if let Err(e) = display::clear_typing() {
                        warn!(error = %e, "could not clear input row");
                    }
                    return GuesserMove::Quit;
                }
            }
            self.redraw(&typed);
        }
    }

    fn redraw(&self, typed: &str) {
        if let Err(e) = display::print_typing(typed, self.word_length) {
            warn!(error = %e, "could not draw input row");
        }
    }
}

impl<K: KeySource> Guesser for HumanGuesser<K> {
    fn next_guess(&mut self, _acceptable: &[Word], guesses: &[Word], _feedback: &[Feedback]) -> GuesserMove {
        self.read_row(guesses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::ScriptedKeys;

    fn guesser(keys: Vec<Key>) -> HumanGuesser<ScriptedKeys> {
        HumanGuesser::new(ScriptedKeys::new(keys), 5, Duration::ZERO)
    }

    fn ask(guesser: &mut HumanGuesser<ScriptedKeys>) -> GuesserMove {
        guesser.next_guess(&[], &[], &[])
    }

    #[test]
    fn typed_word_is_submitted() {
        let mut g = guesser(ScriptedKeys::typed("crane"));
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
    }

    #[test]
    fn extra_letters_are_ignored() {
        let mut g = guesser(ScriptedKeys::typed("cranes"));
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut keys = vec![Key::Backspace];
        keys.extend("CRANX".chars().map(Key::Letter));
        keys.push(Key::Backspace);
        keys.extend(ScriptedKeys::typed("e"));

        let mut g = guesser(keys);
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
    }

    #[test]
    fn enter_on_partial_row_keeps_typing() {
        let mut keys: Vec<Key> = "CRA".chars().map(Key::Letter).collect();
        keys.push(Key::Enter);
        keys.extend(ScriptedKeys::typed("ne"));

        let mut g = guesser(keys);
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
    }

    #[test]
    fn escape_quits() {
        let mut g = guesser(vec![Key::Letter('C'), Key::Escape]);
        assert_eq!(ask(&mut g), GuesserMove::Quit);
    }

    #[test]
    fn exhausted_input_quits() {
        let mut g = guesser(vec![Key::Letter('C')]);
        assert_eq!(ask(&mut g), GuesserMove::Quit);
    }

    #[test]
    fn consecutive_rows() {
        let mut keys = ScriptedKeys::typed("crane");
        keys.extend(ScriptedKeys::typed("slate"));

        let mut g = guesser(keys);
        let crane = [Word::new("crane").unwrap()];
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
        assert_eq!(
            g.next_guess(&[], &crane, &[]),
            GuesserMove::Guess("SLATE".to_string())
        );
    }

    #[test]
    fn rejected_row_is_kept_for_editing() {
        let mut keys = ScriptedKeys::typed("cranx");
        keys.extend([Key::Backspace, Key::Letter('E'), Key::Enter]);

        let mut g = guesser(keys);
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANX".to_string()));
        // No guess was recorded, so the row comes back
        assert_eq!(ask(&mut g), GuesserMove::Guess("CRANE".to_string()));
    }

    #[test]
    fn rejected_row_can_be_cleared() {
        let mut keys = ScriptedKeys::typed("zzzzz");
        keys.extend([Key::Backspace; 5]);
        keys.extend(ScriptedKeys::typed("slate"));

        let mut g = guesser(keys);
        assert_eq!(ask(&mut g), GuesserMove::Guess("ZZZZZ".to_string()));
        assert_eq!(ask(&mut g), GuesserMove::Guess("SLATE".to_string()));
    }
}
