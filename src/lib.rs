//! Wordle CLI
//!
//! A terminal word-guessing game: guess the secret word in six tries, with
//! per-letter feedback after each guess. Games can be played at the keyboard or
//! watched while an automated guesser plays, and results are kept in a plain
//! text statistics file.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{Word, score};
//!
//! let guess = Word::new("adieu").unwrap();
//! let secret = Word::new("dials").unwrap();
//!
//! let feedback = score(&guess, &secret).unwrap();
//! assert_eq!(feedback.codes(), vec![1, 1, 1, 0, 0]);
//! println!("{}", feedback.to_emoji());
//! ```

// Game rules
pub mod config;

// Core domain types
pub mod core;

// Session state machine and driver
pub mod game;

// Human and automated players
pub mod guesser;

// Word lists
pub mod wordlists;

// Persistent statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Keyboard input
pub mod interactive;
