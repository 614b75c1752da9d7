//! Watch command
//!
//! Plays a batch of games with an automated guesser, one after another, and
//! summarizes the results.

use super::record_outcome;
use crate::config::GameConfig;
use crate::game::{GameSession, Outcome, RetryPolicy, SessionObserver, play_session};
use crate::guesser::Guesser;
use crate::stats::StatsStore;
use crate::wordlists::WordList;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a batch of automated games
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub guesser: String,
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
    /// Wins by guess count; index 0 holds wins on the first guess
    pub distribution: Vec<usize>,
    pub outcomes: Vec<Outcome>,
    pub duration: Duration,
}

impl BatchResult {
    fn new(guesser: &str, buckets: usize) -> Self {
        Self {
            guesser: guesser.to_string(),
            games: 0,
            won: 0,
            lost: 0,
            abandoned: 0,
            distribution: vec![0; buckets],
            outcomes: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    fn push(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(n) => {
                self.won += 1;
                if let Some(bucket) = n.checked_sub(1).and_then(|i| self.distribution.get_mut(i)) {
                    *bucket += 1;
                }
            }
            Outcome::Lost => self.lost += 1,
            Outcome::Abandoned => self.abandoned += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Mean guess count over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.won as f64)
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64 * 100.0
        }
    }
}

/// Plays sequential games against random secrets
pub struct BatchRunner<'a> {
    words: &'a WordList,
    config: GameConfig,
    stats: Option<&'a StatsStore>,
    show_progress: bool,
}

impl<'a> BatchRunner<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList, config: GameConfig) -> Self {
        Self {
            words,
            config,
            stats: None,
            show_progress: false,
        }
    }

    /// Record every recordable outcome in `store`
    #[must_use]
    pub const fn with_stats(mut self, store: &'a StatsStore) -> Self {
        self.stats = Some(store);
        self
    }

    /// Draw a progress bar while games run
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Play `games` sessions with `guesser`
    ///
    /// Each session uses [`RetryPolicy::AUTOMATED`], so a guesser that keeps
    /// proposing invalid words forfeits that game.
    ///
    /// # Errors
    /// Fails when there are no secrets to play against, a secret does not fit
    /// the configured length, or statistics cannot be written.
    pub fn run<G, O, R>(
        &self,
        name: &str,
        guesser: &mut G,
        games: usize,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<BatchResult>
    where
        G: Guesser + ?Sized,
        O: SessionObserver + ?Sized,
        R: Rng + ?Sized,
    {
        if self.words.secrets().is_empty() {
            bail!("no {}-letter secrets to play against", self.config.word_length);
        }

        let pb = if self.show_progress {
            let pb = ProgressBar::new(games as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                    .progress_chars("█▓▒░"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut result = BatchResult::new(name, self.config.max_attempts);
        let start = Instant::now();

        for _ in 0..games {
            let Some(secret) = self.words.random_secret(rng) else {
                break;
            };
            let mut session = GameSession::new(secret.clone(), self.config)?;
            let outcome = play_session(
                &mut session,
                self.words,
                guesser,
                RetryPolicy::AUTOMATED,
                observer,
            );

            if let Some(store) = self.stats {
                record_outcome(store, outcome)?;
            }

            result.push(outcome);
            pb.set_message(format!("{} won", result.won));
            pb.inc(1);
        }

        pb.finish_and_clear();
        result.duration = start.elapsed();
        info!(
            guesser = name,
            games = result.games,
            won = result.won,
            lost = result.lost,
            abandoned = result.abandoned,
            "batch finished"
        );

        Ok(result)
    }
}
