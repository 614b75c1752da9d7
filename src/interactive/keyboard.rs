//! Keystroke capture
//!
//! Reads single key presses in raw mode and reduces them to the few keys the game
//! cares about: letters, Backspace, Enter and Escape.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::collections::VecDeque;
use std::io;

/// A key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(char),
    Backspace,
    Enter,
    /// Escape or Ctrl-C
    Escape,
}

/// Source of key presses
pub trait KeySource {
    /// Block until the next relevant key
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Map a crossterm key event, ignoring anything the game does not use
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    // Only process key press events (avoids double input on Windows)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Escape),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c.to_ascii_uppercase())),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Reads keys from the real terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

/// Restores cooked mode on drop, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(mapped) = map_key_event(key)
            {
                return Ok(mapped);
            }
        }
    }
}

/// Replays a fixed key sequence; used for tests and demos
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Keys for typing `text` and pressing Enter
    #[must_use]
    pub fn typed(text: &str) -> Vec<Key> {
        text.chars()
            .map(|c| Key::Letter(c.to_ascii_uppercase()))
            .chain(std::iter::once(Key::Enter))
            .collect()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}
