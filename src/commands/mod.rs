//! Command implementations

pub mod play;
pub mod stats;
pub mod watch;

pub use play::{PlayOptions, choose_secret, play_game, run_play};
pub use stats::run_stats;
pub use watch::{BatchResult, BatchRunner};

use crate::config::GameConfig;
use crate::game::Outcome;
use crate::stats::{LoadStatus, StatsStore, StatsSummary};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{SECRETS, WordList};
use anyhow::{Context, Result, bail};
use colored::Colorize;

/// Load word lists based on the `--words` flag
///
/// - "all": every embedded word is acceptable, secrets come from the secret list
/// - "secrets": only secret words are acceptable
/// - "<path>": words from the file are acceptable; secrets are the embedded
///   secrets found in the file, or the whole file when none are
///
/// Words whose length differs from the configured length are dropped.
///
/// # Errors
/// Fails when the file cannot be read or no acceptable words remain.
pub fn load_words(source: &str, config: GameConfig) -> Result<WordList> {
    let words = match source {
        "all" => WordList::embedded(),
        "secrets" => {
            let secrets = words_from_slice(SECRETS);
            WordList::new(secrets.clone(), secrets)
        }
        path => {
            let acceptable = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            let secrets: Vec<_> = words_from_slice(SECRETS)
                .into_iter()
                .filter(|w| acceptable.contains(w))
                .collect();
            if secrets.is_empty() {
                WordList::new(acceptable.clone(), acceptable)
            } else {
                WordList::new(acceptable, secrets)
            }
        }
    }
    .with_length(config.word_length);

    if words.acceptable().is_empty() {
        bail!("word list '{source}' has no {}-letter words", config.word_length);
    }
    Ok(words)
}

/// Record a finished game
///
/// Abandoned games are skipped and return `None`.
///
/// # Errors
/// Fails when the stats file cannot be written.
pub fn record_outcome(store: &StatsStore, outcome: Outcome) -> Result<Option<StatsSummary>> {
    if !outcome.is_recordable() {
        return Ok(None);
    }

    let updated = store
        .update(outcome)
        .with_context(|| format!("failed to update {}", store.path().display()))?;
    report_load_status(store, &updated.status);
    Ok(Some(updated.summary))
}

/// Tell the user when the stats file had to be created or reset
pub fn report_load_status(store: &StatsStore, status: &LoadStatus) {
    match status {
        LoadStatus::Loaded => {}
        LoadStatus::Created => eprintln!(
            "{} no stats file found; created {}",
            "Note:".bright_cyan(),
            store.path().display()
        ),
        LoadStatus::Reset(reason) => eprintln!(
            "{} {} was invalid ({reason}); statistics have been reset",
            "Warning:".yellow().bold(),
            store.path().display()
        ),
    }
}
