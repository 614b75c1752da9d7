//! Wordle CLI
//!
//! Play Wordle in the terminal, watch an automated player, or review statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_cli::{
    commands::{BatchRunner, PlayOptions, load_words, run_play, run_stats},
    config::GameConfig,
    game::{NoopObserver, SessionObserver},
    guesser::GuesserKind,
    output::{TerminalBoard, print_batch_result},
    stats::StatsStore,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_cli",
    about = "Terminal Wordle with automated players and persistent statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'all' (default), 'secrets' (secret words only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    words: String,

    /// Statistics file; '.txt' is appended when the name has no extension
    #[arg(long, global = true, default_value = "stats.txt")]
    stats_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game at the keyboard (default)
    Play {
        /// Do not update statistics
        #[arg(long)]
        practice: bool,

        /// Play the daily word from an encrypted word file
        #[arg(long, value_name = "FILE")]
        daily: Option<PathBuf>,
    },

    /// Watch an automated player
    Watch {
        /// Player: loser, filter, entropy
        #[arg(long, default_value = "entropy")]
        ai: String,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1")]
        games: usize,

        /// No delay between guesses, and no board for multi-game runs
        #[arg(long)]
        fast: bool,

        /// Do not update statistics
        #[arg(long)]
        practice: bool,
    },

    /// Show statistics
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::default();
    let store = StatsStore::new(&cli.stats_file, config.max_attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        practice: false,
        daily: None,
    });

    match command {
        Commands::Play { practice, daily } => {
            let words = load_words(&cli.words, config)?;
            run_play(&words, config, &PlayOptions { daily, practice }, &store)
        }
        Commands::Watch {
            ai,
            games,
            fast,
            practice,
        } => {
            let words = load_words(&cli.words, config)?;
            run_watch_command(&words, config, &ai, games, fast, (!practice).then_some(&store))
        }
        Commands::Stats => run_stats(&store),
    }
}

fn run_watch_command(
    words: &WordList,
    config: GameConfig,
    ai: &str,
    games: usize,
    fast: bool,
    store: Option<&StatsStore>,
) -> Result<()> {
    let mut guesser = GuesserKind::from_name(ai, words)?;
    let delay = if fast {
        Duration::ZERO
    } else {
        Duration::from_secs(1)
    };

    // A fast multi-game run shows only the progress bar and the summary
    let quiet = fast && games > 1;
    let mut runner = BatchRunner::new(words, config).with_progress(quiet);
    if let Some(store) = store {
        runner = runner.with_stats(store);
    }

    let mut board = TerminalBoard::watching(delay);
    let mut silent = NoopObserver;
    let observer: &mut dyn SessionObserver = if quiet { &mut silent } else { &mut board };

    let result = runner.run(guesser.name(), &mut guesser, games, &mut rand::rng(), observer)?;
    if games > 1 {
        print_batch_result(&result);
    }
    Ok(())
}
