//! Game configuration

/// Rules shared by sessions, word lists and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Guesses allowed before the game is lost; also the histogram size
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5, 6)
    }
}
