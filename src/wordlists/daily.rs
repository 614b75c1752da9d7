//! Daily secret
//!
//! The word of the day is stored encrypted with a circular Caesar shift. The
//! file's first line is the integer key, followed by one encrypted word per line.
//! The word for a date sits at `DAY_ZERO_INDEX` plus the days elapsed since
//! 2022-01-01, wrapping around the list.

use crate::core::{Word, WordError};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// List index of the word for 2022-01-01
pub const DAY_ZERO_INDEX: i64 = 196;

#[derive(Debug, Error)]
pub enum DailyError {
    #[error("Unable to read daily secret file: {0}")]
    Io(#[from] io::Error),
    #[error("Daily secret file is missing its key line")]
    MissingKey,
    #[error("Invalid cipher key: {0}")]
    InvalidKey(String),
    #[error("Daily secret file contains no words")]
    NoWords,
    #[error("Decrypted daily secret is not a word: {0}")]
    InvalidWord(#[from] WordError),
}

/// Encrypted list of daily secrets
#[derive(Debug, Clone)]
pub struct DailyCipher {
    key: u8,
    words: Vec<String>,
}

impl DailyCipher {
    /// Parse cipher file contents
    ///
    /// # Errors
    /// Returns `DailyError` if the key line is missing or not an integer, or no
    /// words follow it.
    pub fn parse(content: &str) -> Result<Self, DailyError> {
        let mut lines = content.lines();
        let key_line = lines.next().ok_or(DailyError::MissingKey)?.trim();
        let key: u32 = key_line
            .parse()
            .map_err(|_| DailyError::InvalidKey(key_line.to_string()))?;

        let words: Vec<String> = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_ascii_uppercase)
            .collect();
        if words.is_empty() {
            return Err(DailyError::NoWords);
        }

        Ok(Self {
            key: (key % 26) as u8,
            words,
        })
    }

    /// Read and parse a cipher file
    ///
    /// # Errors
    /// Returns `DailyError::Io` if the file cannot be read, or any parse error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DailyError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// List index of the word for `date`
    #[must_use]
    pub fn index_for(&self, date: NaiveDate) -> usize {
        let day_zero = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
        let elapsed = (date - day_zero).num_days();
        (DAY_ZERO_INDEX + elapsed).rem_euclid(self.words.len() as i64) as usize
    }

    /// Decrypted secret for `date`
    ///
    /// # Errors
    /// Returns `DailyError::InvalidWord` if the decrypted entry is not a word.
    pub fn secret_for(&self, date: NaiveDate) -> Result<Word, DailyError> {
        let encrypted = &self.words[self.index_for(date)];
        Ok(Word::new(decrypt(encrypted, self.key))?)
    }

    /// Decrypted secret for the local current date
    ///
    /// # Errors
    /// See [`DailyCipher::secret_for`].
    pub fn today(&self) -> Result<Word, DailyError> {
        self.secret_for(chrono::Local::now().date_naive())
    }
}

/// Shift each uppercase letter back by `key`, wrapping within A-Z
///
/// Anything that is not an uppercase letter passes through unchanged.
#[must_use]
pub fn decrypt(encrypted: &str, key: u8) -> String {
    let key = key % 26;
    encrypted
        .bytes()
        .map(|b| {
            if b.is_ascii_uppercase() {
                char::from(b'A' + (b - b'A' + 26 - key) % 26)
            } else {
                char::from(b)
            }
        })
        .collect()
}
