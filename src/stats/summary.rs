//! Aggregate statistics across games

use super::StatsError;
use crate::game::Outcome;

/// Running totals over every recorded game
///
/// Wins are the histogram sum and losses are whatever remains of `played`; the
/// win percentage is always derived from those, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    played: u32,
    current_streak: u32,
    max_streak: u32,
    histogram: Vec<u32>,
}

impl StatsSummary {
    /// A zeroed summary with one histogram bucket per allowed attempt
    #[must_use]
    pub fn new(buckets: usize) -> Self {
        Self {
            played: 0,
            current_streak: 0,
            max_streak: 0,
            histogram: vec![0; buckets],
        }
    }

    /// Rebuild a summary from stored values
    ///
    /// # Errors
    /// Returns `StatsError::Inconsistent` when the values could not have come
    /// from a real game history.
    pub fn from_parts(
        played: u32,
        current_streak: u32,
        max_streak: u32,
        histogram: Vec<u32>,
    ) -> Result<Self, StatsError> {
        let wins: u64 = histogram.iter().map(|&n| u64::from(n)).sum();
        if wins > u64::from(played) {
            return Err(StatsError::Inconsistent("more wins than games played"));
        }
        if current_streak > max_streak {
            return Err(StatsError::Inconsistent("current streak exceeds max streak"));
        }
        if u64::from(max_streak) > wins {
            return Err(StatsError::Inconsistent("max streak exceeds wins"));
        }

        Ok(Self {
            played,
            current_streak,
            max_streak,
            histogram,
        })
    }

    /// Fold one finished game into the totals
    ///
    /// # Errors
    /// Returns `StatsError::Unrecordable` for abandoned games and for wins whose
    /// guess count has no histogram bucket, and `StatsError::Overflow` when a
    /// counter is already at `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::game::Outcome;
    /// use wordle_cli::stats::StatsSummary;
    ///
    /// let stats = StatsSummary::new(6)
    ///     .record(Outcome::Won(3)).unwrap()
    ///     .record(Outcome::Lost).unwrap();
    ///
    /// assert_eq!(stats.played(), 2);
    /// assert_eq!(stats.win_percentage(), 50);
    /// assert_eq!(stats.histogram(), &[0, 0, 1, 0, 0, 0]);
    /// ```
    pub fn record(&self, outcome: Outcome) -> Result<Self, StatsError> {
        let mut next = self.clone();
        next.played = increment(next.played, "played")?;

        match outcome {
            Outcome::Won(guesses) => {
                let bucket = guesses
                    .checked_sub(1)
                    .and_then(|i| next.histogram.get_mut(i))
                    .ok_or(StatsError::Unrecordable(outcome))?;
                *bucket = increment(*bucket, "guess distribution")?;
                next.current_streak = increment(next.current_streak, "current streak")?;
                next.max_streak = next.max_streak.max(next.current_streak);
            }
            Outcome::Lost => next.current_streak = 0,
            Outcome::Abandoned => return Err(StatsError::Unrecordable(outcome)),
        }

        Ok(next)
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Wins by guess count; index 0 holds wins on the first guess
    #[must_use]
    pub fn histogram(&self) -> &[u32] {
        &self.histogram
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.histogram.iter().sum()
    }

    /// Whole-number win rate, rounded down; 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (u64::from(self.wins()) * 100 / u64::from(self.played)) as u32
        }
    }
}

fn increment(value: u32, stat: &'static str) -> Result<u32, StatsError> {
    value.checked_add(1).ok_or(StatsError::Overflow(stat))
}
