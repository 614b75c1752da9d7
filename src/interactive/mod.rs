//! Terminal keyboard input

mod keyboard;

pub use keyboard::{Key, KeySource, ScriptedKeys, TerminalKeys, map_key_event};
