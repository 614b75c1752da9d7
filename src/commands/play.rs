//! Play command
//!
//! One game typed by a person at the keyboard.

use super::record_outcome;
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameSession, Outcome, RetryPolicy, SessionObserver, play_session};
use crate::guesser::{Guesser, HumanGuesser};
use crate::output::{TerminalBoard, print_stats};
use crate::stats::{StatsStore, StatsSummary};
use crate::wordlists::WordList;
use crate::wordlists::daily::DailyCipher;
use anyhow::{Context, Result, anyhow, bail};
use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// How long rejection messages stay on screen
const FLASH: Duration = Duration::from_millis(1200);

/// Options for a human game
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Take the secret from this daily cipher file instead of at random
    pub daily: Option<PathBuf>,
    /// Leave statistics untouched
    pub practice: bool,
}

/// Pick the secret for a game
///
/// # Errors
/// Fails when the daily word cannot be decrypted or does not fit the game, or
/// when there are no secrets to choose from.
pub fn choose_secret<R: Rng + ?Sized>(
    words: &WordList,
    config: GameConfig,
    daily: Option<&DailyCipher>,
    rng: &mut R,
) -> Result<Word> {
    let secret = match daily {
        Some(cipher) => cipher.today()?,
        None => words
            .random_secret(rng)
            .cloned()
            .ok_or_else(|| anyhow!("no {}-letter secrets to play against", config.word_length))?,
    };

    if secret.len() != config.word_length {
        bail!(
            "secret has {} letters but the game uses {}",
            secret.len(),
            config.word_length
        );
    }
    if !words.contains(&secret) {
        bail!("secret {secret} is not in the word list");
    }
    Ok(secret)
}

/// Play one game and record it unless it was abandoned
///
/// Returns the outcome and, when statistics were written, the new summary.
///
/// # Errors
/// Fails when the secret does not fit `config` or statistics cannot be written.
pub fn play_game<G, O>(
    secret: Word,
    words: &WordList,
    config: GameConfig,
    guesser: &mut G,
    observer: &mut O,
    stats: Option<&StatsStore>,
) -> Result<(Outcome, Option<StatsSummary>)>
where
    G: Guesser + ?Sized,
    O: SessionObserver + ?Sized,
{
    let mut session = GameSession::new(secret, config)?;
    let outcome = play_session(&mut session, words, guesser, RetryPolicy::Interactive, observer);

    let summary = match stats {
        Some(store) => record_outcome(store, outcome)?,
        None => None,
    };
    Ok((outcome, summary))
}

/// Run the `play` subcommand on the terminal
///
/// # Errors
/// Propagates secret selection and statistics failures.
pub fn run_play(
    words: &WordList,
    config: GameConfig,
    options: &PlayOptions,
    store: &StatsStore,
) -> Result<()> {
    let cipher = options
        .daily
        .as_ref()
        .map(|path| {
            DailyCipher::load(path)
                .with_context(|| format!("failed to read daily file {}", path.display()))
        })
        .transpose()?;

    let secret = choose_secret(words, config, cipher.as_ref(), &mut rand::rng())?;
    info!(daily = cipher.is_some(), practice = options.practice, "starting game");

    let mut guesser = HumanGuesser::terminal(config.word_length, FLASH);
    let mut board = TerminalBoard::interactive(FLASH);
    let stats = (!options.practice).then_some(store);

    let (_, summary) = play_game(secret, words, config, &mut guesser, &mut board, stats)?;
    if let Some(summary) = summary {
        print_stats(&summary);
    }
    Ok(())
}
