//! Player statistics
//!
//! [`StatsSummary`] folds game outcomes into running totals, and
//! [`StatsStore`] keeps them in a plain `key=value` text file.

pub mod format;
mod store;
mod summary;

pub use store::{LoadStatus, LoadedStats, StatsStore};
pub use summary::StatsSummary;

use crate::game::Outcome;
use std::io;
use thiserror::Error;

/// Errors reading, validating, or updating statistics
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("missing stat '{0}'")]
    MissingKey(&'static str),

    #[error("unknown stat '{0}'")]
    UnknownKey(String),

    #[error("stat '{0}' appears more than once")]
    DuplicateKey(String),

    #[error("line {line} is not a key=value pair: {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("invalid value for '{key}': {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("guess distribution has {found} entries, expected {expected}")]
    BucketCount { found: usize, expected: usize },

    #[error("inconsistent stats: {0}")]
    Inconsistent(&'static str),

    #[error("stat '{0}' is at its maximum and cannot grow")]
    Overflow(&'static str),

    #[error("a game that was {0} cannot be recorded")]
    Unrecordable(Outcome),

    #[error("stats file error: {0}")]
    Io(#[from] io::Error),
}
